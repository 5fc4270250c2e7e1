//! Number formatting utilities
//!
//! Rounding and parsing helpers shared by the engine and the commands.

use crate::errors::{ConvertError, ConvertResult};

/// Decimal places kept for latitudes returned by the inverse projection
pub const LATITUDE_DECIMALS: i32 = 5;

/// Decimal places kept for longitudes returned by the inverse projection
pub const LONGITUDE_DECIMALS: i32 = 3;

/// Decimal places used when printing grid coordinates (millimeters)
pub const GRID_DECIMALS: i32 = 3;

/// Round a value to a fixed number of decimal places
///
/// Ties round away from zero.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Parse a numeric field, labelling the error with what was expected
///
/// Surrounding whitespace and double quotes are ignored.
pub fn parse_number(label: &str, raw: &str) -> ConvertResult<f64> {
    let cleaned = raw.trim().trim_matches('"').trim();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConvertError::invalid_number(label, raw)),
    }
}
