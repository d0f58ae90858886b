//! Weather service: pass-through lookups and flowering-condition analysis

use serde::Serialize;
use shared::{
    evaluate, ConditionReport, Coordinates, CurrentConditions, Language, Units, MAX_FORECAST_DAYS,
};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::external::{CurrentWeather, Lookup, WeatherForecast, WeatherGateway};

/// Weather service wrapping a [`WeatherGateway`]
#[derive(Clone)]
pub struct WeatherService {
    gateway: Arc<dyn WeatherGateway>,
}

/// Location echoed back with an analysis
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisLocation {
    pub lat: f64,
    pub lon: f64,
    pub city: String,
}

/// Flowering-condition analysis for a coordinate
#[derive(Debug, Clone, Serialize)]
pub struct FloweringAnalysis {
    pub location: AnalysisLocation,
    pub current_conditions: CurrentConditions,
    pub flowering_analysis: ConditionReport,
    pub recommendation_message: String,
}

/// Turn a gateway lookup into a handler result
fn resolve<T>(lookup: Lookup<T>, what: &str) -> AppResult<T> {
    match lookup {
        Lookup::Ready(value) => Ok(value),
        Lookup::Unconfigured => Err(AppError::WeatherServiceUnconfigured),
        Lookup::Unavailable(failure) => {
            tracing::debug!("{} unavailable: {}", what, failure);
            Err(AppError::WeatherDataUnavailable(what.to_string()))
        }
    }
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(gateway: Arc<dyn WeatherGateway>) -> Self {
        Self { gateway }
    }

    pub fn is_configured(&self) -> bool {
        self.gateway.is_configured()
    }

    /// Fetch current weather
    pub async fn current(&self, coords: &Coordinates, units: Units) -> AppResult<CurrentWeather> {
        resolve(self.gateway.current(coords, units).await, "current weather")
    }

    /// Fetch a forecast of `days` days
    pub async fn forecast(
        &self,
        coords: &Coordinates,
        units: Units,
        days: u32,
    ) -> AppResult<WeatherForecast> {
        resolve(
            self.gateway.forecast(coords, units, days).await,
            "weather forecast",
        )
    }

    /// Analyze how favorable the weather is for flowering.
    ///
    /// Always requests metric units since the scoring ranges are in °C, and the
    /// longest forecast the upstream offers.
    pub async fn analyze_flowering(
        &self,
        coords: &Coordinates,
        language: Language,
    ) -> AppResult<FloweringAnalysis> {
        let current = self.current(coords, Units::Metric).await?;
        let forecast = self
            .forecast(coords, Units::Metric, MAX_FORECAST_DAYS)
            .await?;

        let report = evaluate(&current.conditions, &forecast.forecast);
        tracing::info!(
            "Flowering analysis for {},{}: score {} ({})",
            coords.latitude,
            coords.longitude,
            report.overall_score,
            report.recommendation
        );

        Ok(FloweringAnalysis {
            location: AnalysisLocation {
                lat: coords.latitude_f64(),
                lon: coords.longitude_f64(),
                city: current.location_name,
            },
            recommendation_message: report.recommendation.message(language).to_string(),
            current_conditions: current.conditions,
            flowering_analysis: report,
        })
    }
}
