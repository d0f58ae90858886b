//! HTTP handlers for combined analysis

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use super::weather::{coordinates_from_path, query_or_reject, LanguageQuery};
use crate::error::AppResult;
use crate::services::{analysis::CombinedAnalysis, AnalysisService, SatelliteService, WeatherService};
use crate::AppState;

/// Get combined weather and satellite analysis for a location
pub async fn get_combined_analysis(
    State(state): State<AppState>,
    path: Path<(String, String)>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> AppResult<Json<CombinedAnalysis>> {
    let coords = coordinates_from_path(path)?;
    let language = query_or_reject(query)?
        .lang
        .unwrap_or(state.config.weather.language);

    let service = AnalysisService::new(
        WeatherService::new(state.weather.clone()),
        SatelliteService::new(state.satellite.clone()),
    );
    Ok(Json(service.combined(&coords, language).await))
}
