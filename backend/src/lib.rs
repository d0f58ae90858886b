//! FloraWatch Backend
//!
//! Weather and satellite APIs for plant-flowering monitoring, including the
//! flowering-condition analysis endpoint.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::Layer;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{NasaEarthClient, OpenWeatherClient, SatelliteGateway, WeatherGateway};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub weather: Arc<dyn WeatherGateway>,
    pub satellite: Arc<dyn SatelliteGateway>,
}

impl AppState {
    pub fn new(
        config: Config,
        weather: Arc<dyn WeatherGateway>,
        satellite: Arc<dyn SatelliteGateway>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            weather,
            satellite,
        }
    }

    /// Build state with the live OpenWeatherMap and NASA clients
    pub fn from_config(config: Config) -> Self {
        let weather = Arc::new(OpenWeatherClient::new(&config.weather));
        let satellite = Arc::new(NasaEarthClient::new(&config.nasa));
        Self::new(config, weather, satellite)
    }
}

/// Router wrapped so `/path/` and `/path` resolve to the same route
pub type App = NormalizePath<Router>;

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> App {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/", get(root))
        .nest("/health", routes::health_routes())
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    into_service(router)
}

/// Apply the outer layers: panics become 500 responses and trailing slashes
/// are trimmed before routing.
pub fn into_service(router: Router) -> App {
    let router = router.layer(CatchPanicLayer::custom(error::panic_response));
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Root endpoint
async fn root() -> &'static str {
    "FloraWatch API v1.0"
}
