//! Validation utilities for FloraWatch
//!
//! Coordinates arrive as decimal strings in request paths and are checked here
//! before any outbound call is made.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

use crate::types::Coordinates;

/// Maximum forecast length offered by the 3-hour forecast API
pub const MAX_FORECAST_DAYS: u32 = 5;

/// Forecast samples per day at 3-hour resolution
pub const SAMPLES_PER_DAY: u32 = 8;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoordinateError {
    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} out of range: {value} (allowed {min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: Decimal,
        min: i32,
        max: i32,
    },
}

impl CoordinateError {
    pub fn field(&self) -> &'static str {
        match self {
            CoordinateError::NotANumber { field, .. } => *field,
            CoordinateError::OutOfRange { field, .. } => *field,
        }
    }
}

/// Parse a decimal string, accepting plain and scientific notation.
///
/// Exponents beyond what `Decimal` holds go through `f64`, so `1e-400`
/// underflows to zero. Infinities and NaN are not numbers here.
pub fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, CoordinateError> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .and_then(Decimal::from_f64)
        })
        .ok_or_else(|| CoordinateError::NotANumber {
            field,
            value: value.to_string(),
        })
}

fn check_range(
    field: &'static str,
    value: Decimal,
    min: i32,
    max: i32,
) -> Result<Decimal, CoordinateError> {
    if value < Decimal::from(min) || value > Decimal::from(max) {
        return Err(CoordinateError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Validate latitude is between -90 and 90
pub fn validate_latitude(latitude: Decimal) -> Result<Decimal, CoordinateError> {
    check_range("lat", latitude, -90, 90)
}

/// Validate longitude is between -180 and 180
pub fn validate_longitude(longitude: Decimal) -> Result<Decimal, CoordinateError> {
    check_range("lon", longitude, -180, 180)
}

/// Parse and validate a latitude/longitude pair
pub fn parse_coordinates(lat: &str, lon: &str) -> Result<Coordinates, CoordinateError> {
    let latitude = validate_latitude(parse_decimal("lat", lat)?)?;
    let longitude = validate_longitude(parse_decimal("lon", lon)?)?;
    Ok(Coordinates::new(latitude, longitude))
}

/// Number of 3-hour samples to request for a forecast of `days`
pub fn forecast_sample_count(days: u32) -> u32 {
    days * SAMPLES_PER_DAY
}
