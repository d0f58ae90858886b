//! Health check and API status handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::{SatelliteService, WeatherService};
use crate::AppState;

pub const SERVICE_NAME: &str = "FloraWatch Backend";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct SystemStatusResponse {
    pub status: String,
    pub services: ServiceStatuses,
    pub version: String,
}

#[derive(Serialize)]
pub struct ServiceStatuses {
    pub weather: String,
    pub satellite: String,
}

#[derive(Serialize)]
pub struct ApiStatusResponse {
    pub timestamp: DateTime<Utc>,
    pub apis: ExternalApis,
}

#[derive(Serialize)]
pub struct ExternalApis {
    pub openweathermap: ExternalApiStatus,
    pub nasa: ExternalApiStatus,
}

#[derive(Serialize)]
pub struct ExternalApiStatus {
    pub configured: bool,
    pub status: String,
}

fn configured_label(configured: bool) -> String {
    if configured { "configured" } else { "not_configured" }.to_string()
}

/// Health check endpoint handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Detailed system status
pub async fn system_status(State(state): State<AppState>) -> Json<SystemStatusResponse> {
    Json(SystemStatusResponse {
        status: "operational".to_string(),
        services: ServiceStatuses {
            weather: configured_label(WeatherService::new(state.weather).is_configured()),
            satellite: configured_label(SatelliteService::new(state.satellite).is_configured()),
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Configuration status of the external APIs
pub async fn api_status(State(state): State<AppState>) -> Json<ApiStatusResponse> {
    let weather_configured = WeatherService::new(state.weather).is_configured();
    let nasa_configured = SatelliteService::new(state.satellite).is_configured();

    Json(ApiStatusResponse {
        timestamp: Utc::now(),
        apis: ExternalApis {
            openweathermap: ExternalApiStatus {
                configured: weather_configured,
                status: if weather_configured { "active" } else { "inactive" }.to_string(),
            },
            nasa: ExternalApiStatus {
                configured: nasa_configured,
                status: configured_label(nasa_configured),
            },
        },
    })
}
