//! HTTP handlers for weather endpoints

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use shared::{parse_coordinates, Coordinates, Language, Units, MAX_FORECAST_DAYS};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::external::{CurrentWeather, WeatherForecast};
use crate::services::weather::{FloweringAnalysis, WeatherService};
use crate::AppState;

/// Parse `lat`/`lon` path segments
pub fn coordinates_from_path(Path((lat, lon)): Path<(String, String)>) -> AppResult<Coordinates> {
    Ok(parse_coordinates(&lat, &lon)?)
}

/// Unwrap a query extractor, turning rejections into validation errors
pub fn query_or_reject<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    query.map(|Query(q)| q).map_err(|rejection| AppError::Validation {
        field: "query".to_string(),
        message: rejection.body_text(),
        message_es: format!("Error en parámetros: {}", rejection.body_text()),
    })
}

/// Query parameters for current weather
#[derive(Debug, Deserialize)]
pub struct UnitsQuery {
    pub units: Option<Units>,
}

/// Query parameters for forecasts
#[derive(Debug, Deserialize, Validate)]
pub struct ForecastQuery {
    #[validate(range(min = 1, max = "MAX_FORECAST_DAYS"))]
    pub days: Option<u32>,
    pub units: Option<Units>,
}

/// Query parameters selecting the response language
#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<Language>,
}

/// Get current weather for a location
pub async fn get_current_weather(
    State(state): State<AppState>,
    path: Path<(String, String)>,
    query: Result<Query<UnitsQuery>, QueryRejection>,
) -> AppResult<Json<CurrentWeather>> {
    let coords = coordinates_from_path(path)?;
    let query = query_or_reject(query)?;
    let units = query.units.unwrap_or(state.config.weather.units);

    let service = WeatherService::new(state.weather.clone());
    let current = service.current(&coords, units).await?;
    Ok(Json(current))
}

/// Get weather forecast for a location
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    path: Path<(String, String)>,
    query: Result<Query<ForecastQuery>, QueryRejection>,
) -> AppResult<Json<WeatherForecast>> {
    let coords = coordinates_from_path(path)?;
    let query = query_or_reject(query)?;
    query.validate().map_err(|_| AppError::Validation {
        field: "days".to_string(),
        message: format!("days must be between 1 and {}", MAX_FORECAST_DAYS),
        message_es: format!("days debe estar entre 1 y {}", MAX_FORECAST_DAYS),
    })?;

    // Without `days`, return the full upstream forecast
    let days = query.days.unwrap_or(MAX_FORECAST_DAYS);
    let units = query.units.unwrap_or(state.config.weather.units);

    let service = WeatherService::new(state.weather.clone());
    let forecast = service.forecast(&coords, units, days).await?;
    Ok(Json(forecast))
}

/// Analyze weather conditions for flowering
pub async fn analyze_flowering_conditions(
    State(state): State<AppState>,
    path: Path<(String, String)>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> AppResult<Json<FloweringAnalysis>> {
    let coords = coordinates_from_path(path)?;
    let language = query_or_reject(query)?
        .lang
        .unwrap_or(state.config.weather.language);

    let service = WeatherService::new(state.weather.clone());
    let analysis = service.analyze_flowering(&coords, language).await?;
    Ok(Json(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast_query(days: Option<u32>) -> ForecastQuery {
        ForecastQuery { days, units: None }
    }

    #[test]
    fn test_forecast_days_bounded_by_upstream_limit() {
        assert!(forecast_query(None).validate().is_ok());
        assert!(forecast_query(Some(1)).validate().is_ok());
        assert!(forecast_query(Some(MAX_FORECAST_DAYS)).validate().is_ok());
        assert!(forecast_query(Some(0)).validate().is_err());
        assert!(forecast_query(Some(MAX_FORECAST_DAYS + 1)).validate().is_err());
    }
}
