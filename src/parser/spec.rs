//! Compact dimension specs used on the command line.
//!
//! A board is written `WxH`, a piece `WxH` or `WxH:QTY`. The separator may be
//! `x`, `X` or `*`, and a comma is accepted as decimal separator.

use crate::error::{PlanError, Result};
use crate::model::PieceRequest;

fn spec_error(spec: &str, message: impl Into<String>) -> PlanError {
    PlanError::InvalidSpec {
        spec: spec.to_string(),
        message: message.into(),
    }
}

/// Parse a single dimension value.
fn parse_number(spec: &str, value: &str) -> Result<f64> {
    let normalized = value.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|_| spec_error(spec, format!("'{}' is not a number", value.trim())))
}

/// Parse a `WxH` pair.
pub fn parse_dimensions(spec: &str) -> Result<(f64, f64)> {
    let mut parts = spec.trim().split(['x', 'X', '*']);

    let (Some(width), Some(height), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(spec_error(spec, "expected WIDTHxHEIGHT"));
    };

    Ok((parse_number(spec, width)?, parse_number(spec, height)?))
}

/// Parse a board spec such as `244x122`.
pub fn parse_board_spec(spec: &str) -> Result<(f64, f64)> {
    parse_dimensions(spec)
}

/// Parse a piece spec such as `60x40:8`; the quantity defaults to 1.
pub fn parse_piece_spec(spec: &str, request_index: usize) -> Result<PieceRequest> {
    let (dims, quantity) = match spec.split_once(':') {
        Some((dims, qty)) => {
            let quantity = qty
                .trim()
                .parse::<u32>()
                .map_err(|_| spec_error(spec, format!("'{}' is not a quantity", qty.trim())))?;
            (dims, quantity)
        }
        None => (spec, 1),
    };

    let (width, height) =
        parse_dimensions(dims).map_err(|_| spec_error(spec, "expected WIDTHxHEIGHT[:QTY]"))?;

    Ok(PieceRequest::new(width, height, quantity, request_index))
}
