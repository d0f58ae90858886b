//! Route definitions for the FloraWatch API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // External API status
        .route("/status", get(handlers::api_status))
        // Weather routes
        .nest("/weather", weather_routes())
        // Satellite routes
        .route("/satellite/:lat/:lon", get(handlers::get_satellite_data))
        // Combined analysis
        .route("/analysis/:lat/:lon", get(handlers::get_combined_analysis))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/status", get(handlers::system_status))
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/:lat/:lon", get(handlers::get_current_weather))
        .route("/:lat/:lon/forecast", get(handlers::get_weather_forecast))
        .route(
            "/:lat/:lon/flowering-analysis",
            get(handlers::analyze_flowering_conditions),
        )
}
