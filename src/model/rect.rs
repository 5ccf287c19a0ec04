//! Free rectangle of unused stock.

use serde::{Deserialize, Serialize};

/// Axis-aligned region of a board not yet assigned to any piece.
///
/// The origin is the top-left corner; `x` grows to the right and `y` grows
/// downwards, matching how boards are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl FreeRect {
    /// Create a new free rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering a whole board.
    pub fn board(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Rectangle area.
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

    /// Check if a `width` x `height` footprint fits without rotation.
    pub fn admits(&self, width: f64, height: f64) -> bool {
        width <= self.width && height <= self.height
    }

    /// Check if both sides exceed the prune threshold.
    pub fn is_usable(&self, min_dimension: f64) -> bool {
        self.width > min_dimension && self.height > min_dimension
    }

    /// Check if two rectangles share interior area.
    pub fn overlaps(&self, other: &FreeRect) -> bool {
        self.x < other.x_max()
            && other.x < self.x_max()
            && self.y < other.y_max()
            && other.y < self.y_max()
    }
}
