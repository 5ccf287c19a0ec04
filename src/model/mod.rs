//! Data model types for cutting plans.

mod board;
mod job;
mod piece;
mod plan;
mod rect;

pub use board::{Board, PlacedPiece};
pub use job::Job;
pub use piece::{Item, PieceRequest};
pub use plan::{CutPlan, Termination};
pub use rect::FreeRect;
