//! Configuration management for the FloraWatch backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FLORAWATCH_ prefix
//! 4. The conventional OPENWEATHERMAP_API_KEY / NASA_API_KEY variables

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{Language, Units};

pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5";
pub const DEFAULT_NASA_ENDPOINT: &str = "https://api.nasa.gov/planetary/earth/statistics";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// OpenWeatherMap configuration
    pub weather: WeatherConfig,

    /// NASA Earth API configuration
    pub nasa: NasaConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Weather API base URL
    pub api_endpoint: String,

    /// Weather API key; the service is unconfigured without one
    pub api_key: Option<String>,

    /// Language for upstream descriptions and recommendation messages
    pub language: Language,

    /// Default unit system for pass-through endpoints
    pub units: Units,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NasaConfig {
    /// Earth statistics endpoint
    pub api_endpoint: String,

    /// NASA API key
    pub api_key: Option<String>,

    /// How far back the statistics query starts, in days
    pub lookback_days: i64,

    /// Query box size in degrees
    pub dim: f64,
}

impl WeatherConfig {
    /// API key, treating an empty value as absent
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }
}

impl NasaConfig {
    /// API key, treating an empty value as absent
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FLORAWATCH_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::defaults(config::Config::builder(), &environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FLORAWATCH_ prefix)
            .add_source(
                Environment::with_prefix("FLORAWATCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("weather.api_key", std::env::var("OPENWEATHERMAP_API_KEY").ok())?
            .set_override_option("nasa.api_key", std::env::var("NASA_API_KEY").ok())?
            .build()?;

        config.try_deserialize()
    }

    fn defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            .set_default("environment", environment)?
            .set_default("server.port", 8000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", DEFAULT_WEATHER_ENDPOINT)?
            .set_default("weather.language", "spanish")?
            .set_default("weather.units", "metric")?
            .set_default("nasa.api_endpoint", DEFAULT_NASA_ENDPOINT)?
            .set_default("nasa.lookback_days", 30)?
            .set_default("nasa.dim", 0.1)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_WEATHER_ENDPOINT.to_string(),
            api_key: None,
            language: Language::default(),
            units: Units::default(),
        }
    }
}

impl Default for NasaConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_NASA_ENDPOINT.to_string(),
            api_key: None,
            lookback_days: 30,
            dim: 0.1,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            weather: WeatherConfig::default(),
            nasa: NasaConfig::default(),
        }
    }
}
