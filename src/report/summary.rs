//! Utilization and waste statistics for a finished plan.

use super::palette::{piece_color, text_color};
use crate::model::{Board, CutPlan, Job, Termination};
use serde::Serialize;
use std::fmt;

/// Percentage of `part` in `total`, 0 when there is nothing to divide by.
fn percent(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

/// Statistics for one board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardStats {
    /// 1-based board number.
    pub index: usize,
    /// Pieces cut from this board.
    pub piece_count: usize,
    /// Area covered by piece footprints.
    pub used_area: f64,
    /// Board area.
    pub board_area: f64,
    /// Used share of the board, in percent.
    pub utilization_pct: f64,
    /// Wasted share of the board, in percent.
    pub waste_pct: f64,
}

impl BoardStats {
    /// Compute the statistics of a board.
    pub fn from_board(board: &Board, index: usize) -> Self {
        let utilization_pct = board.utilization() * 100.0;
        Self {
            index,
            piece_count: board.pieces.len(),
            used_area: board.used_area(),
            board_area: board.area(),
            utilization_pct,
            waste_pct: 100.0 - utilization_pct,
        }
    }
}

/// Legend line for one piece request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    /// Request identity.
    pub request_index: usize,
    /// User label, if any.
    pub label: Option<String>,
    /// Requested width.
    pub width: f64,
    /// Requested height.
    pub height: f64,
    /// Requested quantity.
    pub quantity: u32,
    /// Units actually placed.
    pub placed: usize,
    /// Fill color.
    pub color: &'static str,
    /// Label color readable on `color`.
    pub text_color: &'static str,
}

/// Totals for a plan, with per-board and per-request breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    /// Boards consumed.
    pub board_count: usize,
    /// Pieces placed.
    pub piece_count: usize,
    /// Pieces left over.
    pub unplaced_count: usize,
    /// Area covered by all placed pieces.
    pub used_area: f64,
    /// Area of all consumed boards.
    pub total_board_area: f64,
    /// Used share of all boards, in percent.
    pub utilization_pct: f64,
    /// Wasted share of all boards, in percent.
    pub waste_pct: f64,
    /// Why packing stopped.
    pub termination: Termination,
    /// Per-board statistics.
    pub boards: Vec<BoardStats>,
    /// Per-request legend.
    pub legend: Vec<LegendEntry>,
}

impl PlanSummary {
    /// Summarize `plan`, computed for `job`.
    pub fn new(job: &Job, plan: &CutPlan) -> Self {
        let boards: Vec<BoardStats> = plan
            .boards
            .iter()
            .enumerate()
            .map(|(idx, board)| BoardStats::from_board(board, idx + 1))
            .collect();

        // Folded from +0.0: an empty f64 sum is -0.0.
        let used_area = boards.iter().fold(0.0, |acc, b| acc + b.used_area);
        let total_board_area = boards.iter().fold(0.0, |acc, b| acc + b.board_area);
        let utilization_pct = percent(used_area, total_board_area);
        let waste_pct = if boards.is_empty() {
            0.0
        } else {
            100.0 - utilization_pct
        };

        let legend = job
            .requests
            .iter()
            .map(|request| {
                let color = piece_color(request.request_index);
                LegendEntry {
                    request_index: request.request_index,
                    label: request.label.clone(),
                    width: request.width,
                    height: request.height,
                    quantity: request.quantity,
                    placed: plan.placed_count_for(request.request_index),
                    color,
                    text_color: text_color(color),
                }
            })
            .collect();

        Self {
            board_count: plan.boards.len(),
            piece_count: plan.placed_count(),
            unplaced_count: plan.unplaced.len(),
            used_area,
            total_board_area,
            utilization_pct,
            waste_pct,
            termination: plan.termination,
            boards,
            legend,
        }
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Boards: {}", self.board_count)?;
        writeln!(
            f,
            "Pieces: {} placed, {} unplaced",
            self.piece_count, self.unplaced_count
        )?;
        writeln!(
            f,
            "Area: {:.2} used of {:.2} ({:.1}% used, {:.1}% waste)",
            self.used_area, self.total_board_area, self.utilization_pct, self.waste_pct
        )?;

        for board in &self.boards {
            writeln!(
                f,
                "Board {}: {} piece(s), {:.1}% used, {:.1}% waste",
                board.index, board.piece_count, board.utilization_pct, board.waste_pct
            )?;
        }

        writeln!(f, "Legend:")?;
        for entry in &self.legend {
            write!(f, "  {} {} x {}", entry.color, entry.width, entry.height)?;
            if let Some(label) = &entry.label {
                write!(f, " ({})", label)?;
            }
            writeln!(f, ": {}/{} placed", entry.placed, entry.quantity)?;
        }

        if self.unplaced_count > 0 {
            writeln!(
                f,
                "Warning: {} piece(s) could not be placed ({})",
                self.unplaced_count, self.termination
            )?;
        }

        Ok(())
    }
}
