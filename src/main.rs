//! cutplan - CLI tool to compute guillotine cutting plans.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cutplan_rs::parser::{parse_board_spec, parse_piece_spec};
use cutplan_rs::{
    parse_job_file, plan_job, validate_job, CutPlan, Job, PlanSummary, ValidationResult,
};

/// Compute a cutting plan for rectangular pieces on stock boards.
#[derive(Parser, Debug)]
#[command(name = "cutplan")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input job file (JSON)
    #[arg(short, long, conflicts_with_all = ["board", "piece"])]
    input: Option<PathBuf>,

    /// Board size as WIDTHxHEIGHT
    #[arg(short, long, requires = "piece")]
    board: Option<String>,

    /// Piece as WIDTHxHEIGHT[:QTY], repeatable
    #[arg(short, long)]
    piece: Vec<String>,

    /// Blade kerf, overrides the job file
    #[arg(long)]
    kerf: Option<f64>,

    /// Board limit, overrides the job file
    #[arg(long)]
    max_boards: Option<usize>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output the plan and summary as JSON
    #[arg(long)]
    json: bool,

    /// Validate only, don't compute a plan
    #[arg(long)]
    validate: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// JSON output document.
#[derive(Serialize)]
struct PlanOutput<'a> {
    plan: &'a CutPlan,
    summary: &'a PlanSummary,
}

/// Build the job from either the input file or the command-line specs.
fn load_job(args: &Args) -> Result<Job> {
    let mut job = match (&args.input, &args.board) {
        (Some(input), _) => {
            info!("Processing: {}", input.display());
            parse_job_file(input)
                .with_context(|| format!("Failed to parse {}", input.display()))?
        }
        (None, Some(board)) => {
            let (width, height) = parse_board_spec(board)?;
            let requests = args
                .piece
                .iter()
                .enumerate()
                .map(|(idx, spec)| parse_piece_spec(spec, idx))
                .collect::<cutplan_rs::Result<Vec<_>>>()?;
            Job::new(width, height, requests)
        }
        (None, None) => anyhow::bail!("Either --input or --board with --piece is required"),
    };

    if let Some(kerf) = args.kerf {
        job.config.kerf = kerf;
    }
    if let Some(max_boards) = args.max_boards {
        job.config.max_boards = max_boards;
    }

    Ok(job)
}

/// Validate a job without planning it, logging every finding.
fn validate_only(job: &Job) -> Result<ValidationResult> {
    let validation = validate_job(job).context("Validation failed")?;

    for warning in &validation.warnings {
        warn!("{}", warning);
    }
    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    Ok(validation)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let job = load_job(&args)?;

    info!(
        "Board {} x {}, {} piece(s) in {} type(s)",
        job.board_width,
        job.board_height,
        job.piece_count(),
        job.requests.len()
    );

    // Validate-only mode
    if args.validate {
        let validation = validate_only(&job)?;
        info!(
            "Validation passed with {} warning(s)",
            validation.warnings.len()
        );
        return Ok(());
    }

    let plan = plan_job(&job).context("Failed to compute plan")?;
    let summary = PlanSummary::new(&job, &plan);

    if !plan.is_complete() {
        warn!(
            "{} piece(s) could not be placed ({})",
            plan.unplaced.len(),
            plan.termination
        );
    }

    let rendered = if args.json {
        let output = PlanOutput {
            plan: &plan,
            summary: &summary,
        };
        serde_json::to_string_pretty(&output)?
    } else {
        summary.to_string()
    };

    match &args.output {
        Some(output_path) => {
            std::fs::write(output_path, &rendered)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;
            info!("Generated: {}", output_path.display());
        }
        None => println!("{}", rendered),
    }

    info!("Used {} board(s)", plan.boards.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutplan_rs::PieceRequest;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["cutplan"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    // ==================== Validate-only tests ====================

    #[test]
    fn test_validate_only_reports_oversize_piece() {
        let job = load_job(&args(&["--board", "100x100", "--piece", "200x10:1", "--validate"]))
            .unwrap();
        let validation = validate_only(&job).unwrap();
        assert!(validation.passed);
        assert_eq!(validation.warnings.len(), 1);
        assert!(validation.warnings[0].contains("200 x 10 does not fit a 100 x 100 board"));
    }

    #[test]
    fn test_validate_only_clean_job_has_no_warnings() {
        let job = Job::new(244.0, 122.0, vec![PieceRequest::new(60.0, 40.0, 8, 0)]);
        let validation = validate_only(&job).unwrap();
        assert!(validation.passed);
        assert!(validation.warnings.is_empty());
    }

    #[test]
    fn test_validate_only_rejects_invalid_board() {
        let job = Job::new(0.0, 100.0, vec![PieceRequest::new(10.0, 10.0, 1, 0)]);
        assert!(validate_only(&job).is_err());
    }

    // ==================== Argument tests ====================

    #[test]
    fn test_load_job_applies_overrides() {
        let job = load_job(&args(&[
            "--board",
            "100x50",
            "--piece",
            "10x10:3",
            "--kerf",
            "0.3",
            "--max-boards",
            "2",
        ]))
        .unwrap();
        assert_eq!(job.board_width, 100.0);
        assert_eq!(job.board_height, 50.0);
        assert_eq!(job.piece_count(), 3);
        assert_eq!(job.config.kerf, 0.3);
        assert_eq!(job.config.max_boards, 2);
    }
}
