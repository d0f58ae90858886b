//! Weather data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conditions observed at a single instant
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity, 0-100
    pub humidity: f64,
    /// Atmospheric pressure in hPa
    pub pressure: f64,
    pub description: String,
}

/// One 3-hour bucket of a forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub temperature: f64,
    #[serde(default)]
    pub humidity: f64,
    /// Probability of precipitation (0-1)
    #[serde(default)]
    pub probability_of_precipitation: f64,
    #[serde(default)]
    pub description: String,
    /// Precipitation accumulated over the bucket, absent when none was reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precipitation_3h_mm: Option<f64>,
}

impl ForecastSample {
    /// A sample carrying only a timestamp and a precipitation amount
    pub fn with_precipitation(timestamp: DateTime<Utc>, precipitation_3h_mm: Option<f64>) -> Self {
        Self {
            timestamp,
            temperature: 0.0,
            humidity: 0.0,
            probability_of_precipitation: 0.0,
            description: String::new(),
            precipitation_3h_mm,
        }
    }
}

/// Ordered forecast samples at 3-hour resolution
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastWindow {
    pub samples: Vec<ForecastSample>,
}

impl ForecastWindow {
    pub fn new(samples: Vec<ForecastSample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
