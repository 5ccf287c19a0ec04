//! Validation logic for cutting jobs and the plans computed from them.

use crate::config::float_cmp::{approx_eq, in_range, is_positive_finite};
use crate::error::{PlanError, Result};
use crate::model::{Board, CutPlan, Job};
use std::collections::HashSet;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate a job before packing.
///
/// Malformed geometry or policy is rejected outright; conditions the packer
/// copes with (oversize pieces, duplicate indices) are reported as warnings.
pub fn validate_job(job: &Job) -> Result<ValidationResult> {
    let mut result = ValidationResult::ok();

    if !is_positive_finite(job.board_width) || !is_positive_finite(job.board_height) {
        return Err(PlanError::InvalidBoard {
            width: job.board_width,
            height: job.board_height,
        });
    }

    let config = &job.config;
    if !config.kerf.is_finite() || config.kerf < 0.0 {
        return Err(PlanError::InvalidConfig {
            message: format!("kerf must be zero or positive, got {}", config.kerf),
        });
    }
    if !is_positive_finite(config.min_dimension) {
        return Err(PlanError::InvalidConfig {
            message: format!(
                "min_dimension must be positive, got {}",
                config.min_dimension
            ),
        });
    }
    if config.max_boards == 0 {
        return Err(PlanError::InvalidConfig {
            message: "max_boards must be at least 1".to_string(),
        });
    }

    if job.requests.is_empty() {
        return Err(PlanError::NoPieces);
    }

    let mut seen = HashSet::new();

    for (idx, request) in job.requests.iter().enumerate() {
        if !is_positive_finite(request.width)
            || !is_positive_finite(request.height)
            || request.quantity == 0
        {
            return Err(PlanError::InvalidPiece {
                index: idx + 1,
                width: request.width,
                height: request.height,
                quantity: request.quantity,
            });
        }

        if !seen.insert(request.request_index) {
            result.add_warning(format!(
                "Piece {}: request index {} is used more than once",
                idx + 1,
                request.request_index
            ));
        }

        if !request.fits_board(job.board_width, job.board_height) {
            result.add_warning(format!(
                "Piece {}: {} x {} does not fit a {} x {} board in any orientation",
                idx + 1,
                request.width,
                request.height,
                job.board_width,
                job.board_height
            ));
        }
    }

    Ok(result)
}

/// Check that a finished plan is geometrically sound.
pub fn validate_plan(job: &Job, plan: &CutPlan) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (board_idx, board) in plan.boards.iter().enumerate() {
        result.merge(validate_board(board, board_idx + 1));
    }

    let placed = plan.placed_count();
    let requested = job.piece_count();
    if placed + plan.unplaced.len() != requested {
        result.add_error(format!(
            "Placed {} and left {} unplaced, but {} piece(s) were requested",
            placed,
            plan.unplaced.len(),
            requested
        ));
    }

    if !plan.unplaced.is_empty() {
        result.add_warning(format!(
            "{} piece(s) could not be placed ({})",
            plan.unplaced.len(),
            plan.termination
        ));
    }

    result
}

/// Validate one board: bounds, rotation bookkeeping, overlaps and area.
pub fn validate_board(board: &Board, board_num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (piece_idx, piece) in board.pieces.iter().enumerate() {
        if !in_range(piece.x, 0.0, board.width)
            || !in_range(piece.y, 0.0, board.height)
            || !in_range(piece.x_max(), 0.0, board.width)
            || !in_range(piece.y_max(), 0.0, board.height)
        {
            result.add_error(format!(
                "Board {}, Piece {}: Extends beyond board bounds",
                board_num,
                piece_idx + 1
            ));
        }

        let (expected_w, expected_h) = if piece.rotated {
            (piece.original_height, piece.original_width)
        } else {
            (piece.original_width, piece.original_height)
        };
        if !approx_eq(piece.width, expected_w) || !approx_eq(piece.height, expected_h) {
            result.add_error(format!(
                "Board {}, Piece {}: Footprint {} x {} does not match {} (rotated: {})",
                board_num,
                piece_idx + 1,
                piece.width,
                piece.height,
                piece.label(),
                piece.rotated
            ));
        }
    }

    for (a, b) in find_overlaps(board) {
        result.add_error(format!(
            "Board {}: Pieces {} and {} overlap",
            board_num,
            a + 1,
            b + 1
        ));
    }

    if board.used_area() > board.area() + crate::config::EPS {
        result.add_error(format!(
            "Board {}: Used area {} exceeds board area {}",
            board_num,
            board.used_area(),
            board.area()
        ));
    }

    result
}

/// Find pairs of pieces whose footprints overlap.
pub fn find_overlaps(board: &Board) -> Vec<(usize, usize)> {
    let mut overlaps = Vec::new();

    for i in 0..board.pieces.len() {
        for j in i + 1..board.pieces.len() {
            let a = board.pieces[i].footprint();
            let b = board.pieces[j].footprint();

            if a.overlaps(&b) {
                overlaps.push((i, j));
            }
        }
    }

    overlaps
}
