//! cutplan - Guillotine cutting planner.
//!
//! This library computes cutting plans for rectangular pieces cut from
//! rectangular stock boards with straight, edge-to-edge cuts. Pieces are
//! placed greedily, largest first, using a best-area-fit search over the free
//! rectangles of each board; every cut loses a fixed blade kerf.
//!
//! # Example
//!
//! ```
//! use cutplan_rs::{pack, PieceRequest};
//!
//! let requests = vec![PieceRequest::new(60.0, 40.0, 8, 0)];
//! let plan = pack(244.0, 122.0, &requests);
//! assert_eq!(plan.boards.len(), 1);
//! assert_eq!(plan.boards[0].pieces.len(), 8);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod packer;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::PackConfig;
pub use error::{PlanError, Result};
pub use model::{Board, CutPlan, FreeRect, Item, Job, PieceRequest, PlacedPiece, Termination};
pub use packer::{pack, pack_with_config, Packer};
pub use parser::{parse_job_file, parse_piece_spec};
pub use report::PlanSummary;
pub use validation::{validate_job, validate_plan, ValidationResult};

/// Validate a job and compute its cutting plan.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Validate the job (invalid geometry or policy is an error)
/// 2. Pack the pieces
/// 3. Check the resulting layout
///
/// Pieces that cannot be placed are not an error; they are returned in
/// [`CutPlan::unplaced`].
pub fn plan_job(job: &Job) -> Result<CutPlan> {
    let validation = validate_job(job)?;
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    let plan = pack_with_config(job.board_width, job.board_height, &job.requests, job.config);

    let check = validate_plan(job, &plan);
    for err in &check.errors {
        tracing::error!("{}", err);
    }

    tracing::debug!(
        "Planned {} piece(s) on {} board(s)",
        plan.placed_count(),
        plan.boards.len()
    );

    Ok(plan)
}

/// Load a job file and compute its cutting plan.
pub fn plan_job_file(input_path: &std::path::Path) -> Result<(Job, CutPlan)> {
    let job = parse_job_file(input_path)?;
    let plan = plan_job(&job)?;
    Ok((job, plan))
}
