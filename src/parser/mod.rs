//! Job input parsing.

mod job;
mod spec;

pub use job::{parse_job_file, parse_job_str};
pub use spec::{parse_board_spec, parse_dimensions, parse_piece_spec};
