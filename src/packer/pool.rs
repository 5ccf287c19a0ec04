//! Free-rectangle pool for a single board.

use crate::model::FreeRect;

/// Ordered set of free rectangles on one board.
///
/// Rectangles are kept in insertion order; replacing an entry by its split
/// keeps the relative order of every untouched entry, which the placement
/// tie-breaks depend on.
#[derive(Debug, Clone)]
pub struct FreeRectPool {
    rects: Vec<FreeRect>,
    min_dimension: f64,
}

impl FreeRectPool {
    /// Pool seeded with one rectangle covering the whole board.
    pub fn new(board_width: f64, board_height: f64, min_dimension: f64) -> Self {
        Self {
            rects: vec![FreeRect::board(board_width, board_height)],
            min_dimension,
        }
    }

    /// Current free rectangles in pool order.
    pub fn rects(&self) -> &[FreeRect] {
        &self.rects
    }

    /// Number of free rectangles.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Check if no free space is left.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Total free area.
    pub fn free_area(&self) -> f64 {
        self.rects.iter().map(FreeRect::area).sum()
    }

    /// Replace the rectangle at `index` with `splits` in place, then prune
    /// every rectangle with a side at or below the threshold.
    pub fn replace(&mut self, index: usize, splits: Vec<FreeRect>) {
        self.rects.splice(index..=index, splits);
        let min_dimension = self.min_dimension;
        self.rects.retain(|r| r.is_usable(min_dimension));
    }
}
