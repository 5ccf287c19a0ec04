//! Piece requests and the individual items expanded from them.

use serde::{Deserialize, Serialize};

/// One distinct piece type requested by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceRequest {
    /// Requested width.
    pub width: f64,
    /// Requested height.
    pub height: f64,
    /// Number of identical pieces wanted.
    pub quantity: u32,
    /// Stable identity used to correlate placed pieces with the legend.
    pub request_index: usize,
    /// Free-form label shown in reports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PieceRequest {
    /// Create a new piece request.
    pub fn new(width: f64, height: f64, quantity: u32, request_index: usize) -> Self {
        Self {
            width,
            height,
            quantity,
            request_index,
            label: None,
        }
    }

    /// Attach a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Area of a single piece.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Check if a single piece fits a board of the given size in either orientation.
    pub fn fits_board(&self, board_width: f64, board_height: f64) -> bool {
        (self.width <= board_width && self.height <= board_height)
            || (self.height <= board_width && self.width <= board_height)
    }
}

/// A single unit of a piece request, waiting to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unrotated width.
    pub width: f64,
    /// Unrotated height.
    pub height: f64,
    /// Index of the originating request.
    pub request_index: usize,
}

impl Item {
    /// Create a new item.
    pub fn new(width: f64, height: f64, request_index: usize) -> Self {
        Self {
            width,
            height,
            request_index,
        }
    }

    /// Item area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
