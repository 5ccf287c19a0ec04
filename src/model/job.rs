//! A complete cutting job: board size, piece list and packing policy.

use super::PieceRequest;
use crate::config::PackConfig;
use serde::{Deserialize, Serialize};

/// Everything needed to compute one cutting plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Stock board width.
    pub board_width: f64,
    /// Stock board height.
    pub board_height: f64,
    /// Requested pieces, in the order the user listed them.
    pub requests: Vec<PieceRequest>,
    /// Packing policy.
    #[serde(default)]
    pub config: PackConfig,
}

impl Job {
    /// Create a job with the default packing policy.
    pub fn new(board_width: f64, board_height: f64, requests: Vec<PieceRequest>) -> Self {
        Self {
            board_width,
            board_height,
            requests,
            config: PackConfig::default(),
        }
    }

    /// Replace the packing policy.
    pub fn with_config(mut self, config: PackConfig) -> Self {
        self.config = config;
        self
    }

    /// Total number of pieces requested.
    pub fn piece_count(&self) -> usize {
        self.requests.iter().map(|r| r.quantity as usize).sum()
    }
}
