//! Flowering-condition models and evaluation
//!
//! Scores how favorable the current weather and the next 48 hours of forecast
//! are for flowering. The ranges are general-purpose and do not vary by species.

use serde::{Deserialize, Serialize};

use crate::types::Language;

use super::weather::{CurrentConditions, ForecastWindow};

/// Ideal temperature range for flowering (°C, inclusive)
pub const IDEAL_TEMPERATURE_RANGE: (f64, f64) = (15.0, 25.0);

/// Ideal relative humidity range for flowering (%, inclusive)
pub const IDEAL_HUMIDITY_RANGE: (f64, f64) = (40.0, 70.0);

/// Rain in a single 3-hour bucket above this is heavy (mm)
pub const HEAVY_RAIN_THRESHOLD_MM: f64 = 10.0;

/// Number of 3-hour samples covering 48 hours
pub const PRECIPITATION_WINDOW_SAMPLES: usize = 16;

pub const TEMPERATURE_POINTS: u8 = 40;
pub const HUMIDITY_POINTS: u8 = 30;
pub const DRY_FORECAST_POINTS: u8 = 30;

/// Precipitation outlook for the next 48 hours
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrecipitationSummary {
    pub heavy_rain_expected: bool,
    pub total_precipitation_48h: f64,
    pub rainy_periods: u32,
}

/// Result of evaluating flowering conditions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionReport {
    pub temperature_favorable: bool,
    pub humidity_favorable: bool,
    pub precipitation: PrecipitationSummary,
    /// 0-100
    pub overall_score: u8,
    pub recommendation: Recommendation,
}

/// Recommendation tier derived from the overall score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// 80 and above
    Excellent,
    /// 60-79
    Good,
    /// 40-59
    Moderate,
    /// Below 40
    Unfavorable,
}

impl Recommendation {
    /// Map a score to its tier; lower bounds are inclusive
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Recommendation::Excellent,
            60..=79 => Recommendation::Good,
            40..=59 => Recommendation::Moderate,
            _ => Recommendation::Unfavorable,
        }
    }

    pub fn message(&self, language: Language) -> &'static str {
        match (self, language) {
            (Recommendation::Excellent, Language::Spanish) => {
                "Condiciones excelentes para floración"
            }
            (Recommendation::Good, Language::Spanish) => "Condiciones buenas para floración",
            (Recommendation::Moderate, Language::Spanish) => "Condiciones moderadas para floración",
            (Recommendation::Unfavorable, Language::Spanish) => {
                "Condiciones desfavorables para floración"
            }
            (Recommendation::Excellent, Language::English) => "Excellent conditions for flowering",
            (Recommendation::Good, Language::English) => "Good conditions for flowering",
            (Recommendation::Moderate, Language::English) => "Moderate conditions for flowering",
            (Recommendation::Unfavorable, Language::English) => {
                "Unfavorable conditions for flowering"
            }
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Excellent => write!(f, "excellent"),
            Recommendation::Good => write!(f, "good"),
            Recommendation::Moderate => write!(f, "moderate"),
            Recommendation::Unfavorable => write!(f, "unfavorable"),
        }
    }
}

pub fn is_temperature_favorable(temperature: f64) -> bool {
    let (min, max) = IDEAL_TEMPERATURE_RANGE;
    min <= temperature && temperature <= max
}

pub fn is_humidity_favorable(humidity: f64) -> bool {
    let (min, max) = IDEAL_HUMIDITY_RANGE;
    min <= humidity && humidity <= max
}

/// Summarize precipitation over the first 48 hours of a forecast.
///
/// Samples beyond the window are ignored and a missing amount counts as zero.
pub fn summarize_precipitation(forecast: &ForecastWindow) -> PrecipitationSummary {
    let mut total_precipitation_48h = 0.0;
    let mut rainy_periods = 0u32;

    for sample in forecast.samples.iter().take(PRECIPITATION_WINDOW_SAMPLES) {
        let rain_3h = sample.precipitation_3h_mm.unwrap_or(0.0);
        total_precipitation_48h += rain_3h;
        if rain_3h > HEAVY_RAIN_THRESHOLD_MM {
            rainy_periods += 1;
        }
    }

    PrecipitationSummary {
        heavy_rain_expected: rainy_periods > 0,
        total_precipitation_48h,
        rainy_periods,
    }
}

/// Evaluate flowering conditions from current weather and a short-term forecast
pub fn evaluate(current: &CurrentConditions, forecast: &ForecastWindow) -> ConditionReport {
    let temperature_favorable = is_temperature_favorable(current.temperature);
    let humidity_favorable = is_humidity_favorable(current.humidity);
    let precipitation = summarize_precipitation(forecast);

    let mut score = 0u8;
    if temperature_favorable {
        score += TEMPERATURE_POINTS;
    }
    if humidity_favorable {
        score += HUMIDITY_POINTS;
    }
    if !precipitation.heavy_rain_expected {
        score += DRY_FORECAST_POINTS;
    }

    ConditionReport {
        temperature_favorable,
        humidity_favorable,
        precipitation,
        overall_score: score,
        recommendation: Recommendation::from_score(score),
    }
}
