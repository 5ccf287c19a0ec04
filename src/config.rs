//! Configuration constants and settings for the cutting planner.

use serde::{Deserialize, Serialize};

/// Material removed by the saw blade per cut (0.4 mm expressed in cm).
pub const KERF: f64 = 0.04;

/// Free rectangles with a side at or below this size are unusable and pruned.
pub const MIN_DIMENSION: f64 = 0.01;

/// Hard cap on the number of boards a single plan may open.
pub const MAX_BOARDS: usize = 500;

/// Floating-point comparison epsilon used by layout checks.
pub const EPS: f64 = 0.0001;

/// Packing policy.
///
/// Defaults match the constants above; a job file or the command line may
/// override any of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// Blade kerf, in board units.
    pub kerf: f64,
    /// Prune threshold for free rectangles, in board units.
    pub min_dimension: f64,
    /// Maximum number of boards before the allocator gives up.
    pub max_boards: usize,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            kerf: KERF,
            min_dimension: MIN_DIMENSION,
            max_boards: MAX_BOARDS,
        }
    }
}

impl PackConfig {
    /// Create a configuration with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blade kerf.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Set the free-rectangle prune threshold.
    pub fn with_min_dimension(mut self, min_dimension: f64) -> Self {
        self.min_dimension = min_dimension;
        self
    }

    /// Set the board cap.
    pub fn with_max_boards(mut self, max_boards: usize) -> Self {
        self.max_boards = max_boards;
        self
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a is in range [min, max] with epsilon tolerance.
    #[inline]
    pub fn in_range(a: f64, min: f64, max: f64) -> bool {
        a >= min - EPS && a <= max + EPS
    }

    /// Check if a value is a usable positive dimension.
    #[inline]
    pub fn is_positive_finite(a: f64) -> bool {
        a.is_finite() && a > 0.0
    }
}
