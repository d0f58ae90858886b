//! HTTP handlers for satellite data

use axum::{
    extract::{Path, State},
    Json,
};

use super::weather::coordinates_from_path;
use crate::error::AppResult;
use crate::services::SatelliteService;
use crate::AppState;

/// Get NASA satellite statistics for a location
pub async fn get_satellite_data(
    State(state): State<AppState>,
    path: Path<(String, String)>,
) -> AppResult<Json<serde_json::Value>> {
    let coords = coordinates_from_path(path)?;

    let service = SatelliteService::new(state.satellite.clone());
    let statistics = service.statistics(&coords).await?;
    Ok(Json(statistics))
}
