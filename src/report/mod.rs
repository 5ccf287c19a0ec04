//! Plan statistics and text reports.

mod palette;
mod summary;

pub use palette::{hex_to_rgb, piece_color, text_color, PALETTE};
pub use summary::{BoardStats, LegendEntry, PlanSummary};
