//! FloraWatch Backend Server

use axum::{extract::Request, ServiceExt};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use florawatch_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "florawatch_server=debug,florawatch_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting FloraWatch Server");
    tracing::info!("Environment: {}", config.environment);

    if config.weather.api_key().is_none() {
        tracing::warn!("OPENWEATHERMAP_API_KEY not set; weather endpoints will return 503");
    }
    if config.nasa.api_key().is_none() {
        tracing::warn!("NASA_API_KEY not set; satellite endpoint will return 503");
    }

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(host, config.server.port);

    // Build application
    let app = create_app(AppState::from_config(config));

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
