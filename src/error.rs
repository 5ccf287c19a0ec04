//! Error types for the cutting planner.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for job processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// Invalid board dimensions (E100)
    InvalidBoard = 100,
    /// Invalid piece request (E101)
    InvalidPiece = 101,
    /// Job has no pieces (E102)
    NoPieces = 102,
    /// Invalid packing configuration (E200)
    InvalidConfig = 200,
}

/// Main error type for the planner.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid job file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid piece spec '{spec}': {message}")]
    InvalidSpec { spec: String, message: String },

    #[error("Invalid board dimensions ({width} x {height})")]
    InvalidBoard { width: f64, height: f64 },

    #[error("Invalid piece {index}: {width} x {height}, quantity {quantity}")]
    InvalidPiece {
        index: usize,
        width: f64,
        height: f64,
        quantity: u32,
    },

    #[error("No pieces requested")]
    NoPieces,

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlanError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::FileNotFound { .. } => ErrorCode::FileNotFound,
            PlanError::EmptyFile { .. } => ErrorCode::EmptyFile,
            PlanError::Json(_) => ErrorCode::ParseError,
            PlanError::InvalidSpec { .. } => ErrorCode::ParseError,
            PlanError::InvalidBoard { .. } => ErrorCode::InvalidBoard,
            PlanError::InvalidPiece { .. } => ErrorCode::InvalidPiece,
            PlanError::NoPieces => ErrorCode::NoPieces,
            PlanError::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            PlanError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for planner operations.
pub type Result<T> = std::result::Result<T, PlanError>;
