//! Result of a packing run.

use super::{Board, Item};
use serde::{Deserialize, Serialize};

/// Why the allocator stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every item was placed.
    #[default]
    Complete,
    /// A fresh board could not take any of the remaining items.
    InfeasibleItem,
    /// The board cap was reached with items left over.
    BoardLimit,
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Termination::Complete => write!(f, "complete"),
            Termination::InfeasibleItem => write!(f, "item does not fit an empty board"),
            Termination::BoardLimit => write!(f, "board limit reached"),
        }
    }
}

/// Boards produced for a job, plus anything that could not be placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutPlan {
    /// Boards in the order they were opened.
    pub boards: Vec<Board>,
    /// Items left over when the allocator stopped, in placement order.
    pub unplaced: Vec<Item>,
    /// Why the allocator stopped.
    pub termination: Termination,
}

impl CutPlan {
    /// Check if every requested item was placed.
    pub fn is_complete(&self) -> bool {
        self.termination == Termination::Complete && self.unplaced.is_empty()
    }

    /// Number of placed pieces over all boards.
    pub fn placed_count(&self) -> usize {
        self.boards.iter().map(|b| b.pieces.len()).sum()
    }

    /// Number of placed pieces belonging to one request.
    pub fn placed_count_for(&self, request_index: usize) -> usize {
        self.boards
            .iter()
            .flat_map(|b| &b.pieces)
            .filter(|p| p.request_index == request_index)
            .count()
    }
}
