//! Boards and the pieces placed on them.

use super::{FreeRect, Item};
use serde::{Deserialize, Serialize};

/// A piece positioned on a board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedPiece {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Footprint width (after rotation).
    pub width: f64,
    /// Footprint height (after rotation).
    pub height: f64,
    /// Index of the originating request.
    pub request_index: usize,
    /// Requested width, before rotation.
    pub original_width: f64,
    /// Requested height, before rotation.
    pub original_height: f64,
    /// Whether the piece was turned 90 degrees.
    pub rotated: bool,
}

impl PlacedPiece {
    /// Place an item at `(x, y)`, swapping its sides when `rotated`.
    pub fn from_item(item: &Item, x: f64, y: f64, rotated: bool) -> Self {
        let (width, height) = if rotated {
            (item.height, item.width)
        } else {
            (item.width, item.height)
        };
        Self {
            x,
            y,
            width,
            height,
            request_index: item.request_index,
            original_width: item.width,
            original_height: item.height,
            rotated,
        }
    }

    /// Footprint area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Right edge.
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Footprint as a rectangle.
    pub fn footprint(&self) -> FreeRect {
        FreeRect::new(self.x, self.y, self.width, self.height)
    }

    /// Label text for drawings, always in requested orientation.
    pub fn label(&self) -> String {
        format!("{} x {}", self.original_width, self.original_height)
    }

    /// Recover the unplaced item.
    pub fn to_item(&self) -> Item {
        Item::new(self.original_width, self.original_height, self.request_index)
    }
}

/// One stock board and the pieces cut from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Board width.
    pub width: f64,
    /// Board height.
    pub height: f64,
    /// Pieces in placement order.
    pub pieces: Vec<PlacedPiece>,
}

impl Board {
    /// Create a board holding the given pieces.
    pub fn new(width: f64, height: f64, pieces: Vec<PlacedPiece>) -> Self {
        Self {
            width,
            height,
            pieces,
        }
    }

    /// Board area.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Sum of placed footprint areas.
    pub fn used_area(&self) -> f64 {
        self.pieces.iter().map(PlacedPiece::area).sum()
    }

    /// Area lost to kerf and offcuts.
    pub fn waste_area(&self) -> f64 {
        self.area() - self.used_area()
    }

    /// Used area as a fraction of the board, 0.0 to 1.0.
    pub fn utilization(&self) -> f64 {
        if self.area() > 0.0 {
            self.used_area() / self.area()
        } else {
            0.0
        }
    }
}
