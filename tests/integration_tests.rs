//! Integration tests for the cutting planner.
//!
//! These tests run whole jobs through the public API and check the
//! geometric properties every plan must have rather than exact coordinates,
//! except for the small scenarios whose layout is fully determined.

use cutplan_rs::config::float_cmp::approx_eq;
use cutplan_rs::validation::find_overlaps;
use cutplan_rs::{
    pack, pack_with_config, plan_job, plan_job_file, CutPlan, Job, PackConfig, PieceRequest,
    PlanError, PlanSummary, Termination,
};
use pretty_assertions::assert_eq;
use std::io::Write;

// ==================== Test Helpers ====================

/// Check the invariants every plan must satisfy; returns the violations.
fn check_plan_properties(job: &Job, plan: &CutPlan) -> Vec<String> {
    let mut errors = Vec::new();

    for (board_idx, board) in plan.boards.iter().enumerate() {
        if board.pieces.is_empty() {
            errors.push(format!("Board {} is empty", board_idx + 1));
        }

        for (a, b) in find_overlaps(board) {
            errors.push(format!(
                "Board {}: pieces {} and {} overlap",
                board_idx + 1,
                a + 1,
                b + 1
            ));
        }

        for (piece_idx, piece) in board.pieces.iter().enumerate() {
            if piece.x < 0.0
                || piece.y < 0.0
                || piece.x_max() > board.width + 1e-9
                || piece.y_max() > board.height + 1e-9
            {
                errors.push(format!(
                    "Board {}, piece {}: outside the board",
                    board_idx + 1,
                    piece_idx + 1
                ));
            }

            let swapped = piece.width == piece.original_height
                && piece.height == piece.original_width;
            let same = piece.width == piece.original_width
                && piece.height == piece.original_height;
            if !(same || swapped) || (piece.rotated && !swapped) || (!piece.rotated && !same) {
                errors.push(format!(
                    "Board {}, piece {}: inconsistent rotation",
                    board_idx + 1,
                    piece_idx + 1
                ));
            }
        }

        if board.used_area() > board.area() {
            errors.push(format!("Board {}: used area exceeds board", board_idx + 1));
        }
    }

    let requested = job.piece_count();
    if plan.placed_count() + plan.unplaced.len() != requested {
        errors.push(format!(
            "{} placed + {} unplaced != {} requested",
            plan.placed_count(),
            plan.unplaced.len(),
            requested
        ));
    }

    errors
}

fn assert_plan_properties(job: &Job, plan: &CutPlan) {
    let errors = check_plan_properties(job, plan);
    assert!(errors.is_empty(), "Plan violations: {:?}", errors);
}

/// Deterministic mixed piece list, every piece fitting a 244 x 122 board.
fn mixed_requests(count: usize) -> Vec<PieceRequest> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = |max: u64| {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) % max
    };

    (0..count)
        .map(|idx| {
            let width = 5.0 + next(110) as f64 + 0.5 * next(2) as f64;
            let height = 5.0 + next(110) as f64;
            let quantity = 1 + next(6) as u32;
            PieceRequest::new(width, height, quantity, idx)
        })
        .collect()
}

// ==================== Scenario Tests ====================

#[test]
fn test_single_type_fits_one_board() {
    let job = Job::new(244.0, 122.0, vec![PieceRequest::new(60.0, 40.0, 8, 0)]);
    let plan = plan_job(&job).expect("Should plan");

    assert_eq!(plan.boards.len(), 1);
    assert_eq!(plan.boards[0].pieces.len(), 8);
    assert_eq!(plan.termination, Termination::Complete);
    for piece in &plan.boards[0].pieces {
        let dims = (piece.width, piece.height);
        assert!(dims == (60.0, 40.0) || dims == (40.0, 60.0));
    }
    assert_plan_properties(&job, &plan);
}

#[test]
fn test_small_piece_uses_leftover() {
    let requests = vec![
        PieceRequest::new(90.0, 90.0, 1, 0),
        PieceRequest::new(5.0, 5.0, 1, 1),
    ];
    let plan = pack(100.0, 100.0, &requests);

    assert_eq!(plan.boards.len(), 1);
    let pieces = &plan.boards[0].pieces;
    assert_eq!(pieces.len(), 2);
    assert_eq!((pieces[0].x, pieces[0].y), (0.0, 0.0));
    assert_eq!(pieces[1].request_index, 1);
    // Right of the big piece, one kerf away
    assert!(approx_eq(pieces[1].x, 90.04));
    assert_eq!(pieces[1].y, 0.0);
}

#[test]
fn test_oversize_piece_yields_no_boards() {
    let job = Job::new(100.0, 100.0, vec![PieceRequest::new(200.0, 10.0, 1, 0)]);
    let plan = plan_job(&job).expect("Oversize pieces are not an error");

    assert!(plan.boards.is_empty());
    assert_eq!(plan.termination, Termination::InfeasibleItem);
    assert_eq!(plan.unplaced.len(), 1);
    assert_eq!(plan.unplaced[0].request_index, 0);
}

#[test]
fn test_four_per_board_needs_five_boards() {
    let job = Job::new(50.0, 50.0, vec![PieceRequest::new(20.0, 20.0, 20, 0)]);
    let plan = plan_job(&job).expect("Should plan");

    assert_eq!(plan.boards.len(), 5);
    assert!(plan.is_complete());
    for board in &plan.boards {
        assert_eq!(board.pieces.len(), 4);
        let origins: Vec<(f64, f64)> = board.pieces.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(origins[0], (0.0, 0.0));
        assert!(approx_eq(origins[1].0, 20.04) && origins[1].1 == 0.0);
        assert!(origins[2].0 == 0.0 && approx_eq(origins[2].1, 20.04));
        assert!(approx_eq(origins[3].0, 20.04) && approx_eq(origins[3].1, 20.04));
    }
    assert_plan_properties(&job, &plan);
}

#[test]
fn test_mixed_sizes_spill_to_second_board() {
    let job = Job::new(
        244.0,
        122.0,
        vec![
            PieceRequest::new(120.0, 60.0, 3, 0),
            PieceRequest::new(60.0, 30.0, 5, 1),
            PieceRequest::new(200.0, 10.0, 2, 2),
        ],
    );
    let plan = plan_job(&job).expect("Should plan");

    assert_eq!(plan.boards.len(), 2);
    assert_eq!(plan.boards[0].pieces.len(), 7);
    let second: Vec<usize> = plan.boards[1]
        .pieces
        .iter()
        .map(|p| p.request_index)
        .collect();
    assert_eq!(second, vec![2, 2, 1]);
    assert_plan_properties(&job, &plan);
}

// ==================== Property Tests ====================

#[test]
fn test_mixed_job_properties() {
    let job = Job::new(244.0, 122.0, mixed_requests(25));
    let plan = plan_job(&job).expect("Should plan");

    assert!(plan.is_complete());
    assert_eq!(plan.placed_count(), job.piece_count());
    assert_plan_properties(&job, &plan);
}

#[test]
fn test_mixed_job_properties_wide_kerf() {
    let config = PackConfig::default().with_kerf(0.5);
    let job = Job::new(244.0, 122.0, mixed_requests(15)).with_config(config);
    let plan = plan_job(&job).expect("Should plan");

    assert!(plan.is_complete());
    assert_plan_properties(&job, &plan);
}

#[test]
fn test_determinism() {
    let requests = mixed_requests(30);
    let first = pack(244.0, 122.0, &requests);
    let second = pack(244.0, 122.0, &requests);
    assert_eq!(first, second);
}

#[test]
fn test_kerf_between_neighbours() {
    let plan = pack(244.0, 122.0, &[PieceRequest::new(60.0, 40.0, 8, 0)]);
    let pieces = &plan.boards[0].pieces;

    // The first column is stacked downwards, one kerf apart
    for pair in pieces[..3].windows(2) {
        assert!(approx_eq(pair[1].y - pair[0].y_max(), 0.04));
        assert_eq!(pair[1].x, pair[0].x);
    }

    // The top row runs to the right, one kerf apart
    let top_row: Vec<_> = pieces.iter().filter(|p| p.y == 0.0).collect();
    assert_eq!(top_row.len(), 4);
    for pair in top_row.windows(2) {
        assert!(approx_eq(pair[1].x - pair[0].x_max(), 0.04));
    }
}

#[test]
fn test_custom_kerf_gap() {
    let config = PackConfig::default().with_kerf(0.3);
    let plan = pack_with_config(100.0, 100.0, &[PieceRequest::new(40.0, 40.0, 2, 0)], config);
    let pieces = &plan.boards[0].pieces;
    assert!(approx_eq(pieces[1].x - pieces[0].x_max(), 0.3));
}

#[test]
fn test_board_limit_reports_leftovers() {
    let config = PackConfig::default().with_max_boards(3);
    let job =
        Job::new(50.0, 50.0, vec![PieceRequest::new(20.0, 20.0, 20, 0)]).with_config(config);
    let plan = plan_job(&job).expect("Should plan");

    assert_eq!(plan.boards.len(), 3);
    assert_eq!(plan.termination, Termination::BoardLimit);
    assert_eq!(plan.unplaced.len(), 8);
    assert_plan_properties(&job, &plan);
}

// ==================== Pipeline Tests ====================

#[test]
fn test_invalid_job_is_rejected() {
    let job = Job::new(0.0, 122.0, vec![PieceRequest::new(60.0, 40.0, 1, 0)]);
    assert!(matches!(
        plan_job(&job),
        Err(PlanError::InvalidBoard { .. })
    ));
}

#[test]
fn test_job_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "board": {{ "width": 100, "height": 100 }},
            "pieces": [
                {{ "width": 90, "height": 90, "label": "panel" }},
                {{ "width": 5, "height": 5 }}
            ]
        }}"#
    )
    .expect("write job");

    let (job, plan) = plan_job_file(file.path()).expect("Should plan");
    assert_eq!(job.requests.len(), 2);
    assert_eq!(plan.boards.len(), 1);

    let summary = PlanSummary::new(&job, &plan);
    assert_eq!(summary.board_count, 1);
    assert_eq!(summary.piece_count, 2);
    assert_eq!(summary.legend[0].label.as_deref(), Some("panel"));
    assert_eq!(summary.legend[1].placed, 1);
    assert!(approx_eq(summary.used_area, 8125.0));
}

#[test]
fn test_plan_serializes_to_json() {
    let plan = pack(100.0, 100.0, &[PieceRequest::new(30.0, 60.0, 1, 0)]);
    let json = serde_json::to_value(&plan).expect("serialize");

    assert_eq!(json["termination"], "complete");
    let piece = &json["boards"][0]["pieces"][0];
    assert_eq!(piece["original_width"], 30.0);
    assert_eq!(piece["rotated"], false);
}
