//! Input and plan validation.

mod validate;

pub use validate::{find_overlaps, validate_board, validate_job, validate_plan, ValidationResult};
