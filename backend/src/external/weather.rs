//! Weather API client for fetching weather data
//!
//! Integrates with OpenWeatherMap API for current conditions and forecasts

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{
    forecast_sample_count, Coordinates, CurrentConditions, ForecastSample, ForecastWindow,
    Language, Units,
};

use super::{fetch_json, Lookup};
use crate::config::WeatherConfig;

/// Source of current weather and short-range forecasts
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    /// Whether a credential is present
    fn is_configured(&self) -> bool;

    async fn current(&self, coords: &Coordinates, units: Units) -> Lookup<CurrentWeather>;

    /// Forecast at 3-hour resolution, `days * 8` samples
    async fn forecast(
        &self,
        coords: &Coordinates,
        units: Units,
        days: u32,
    ) -> Lookup<WeatherForecast>;
}

/// Current weather at a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeather {
    pub location_name: String,
    pub observed_at: DateTime<Utc>,
    pub conditions: CurrentConditions,
}

/// Short-range forecast at a location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherForecast {
    pub location_name: String,
    pub forecast: ForecastWindow,
}

/// OpenWeatherMap API client
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    language: Language,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
struct OWMCurrentResponse {
    #[serde(default)]
    name: Option<String>,
    dt: Option<i64>,
    main: OWMMain,
    #[serde(default)]
    weather: Vec<OWMWeather>,
}

#[derive(Debug, Deserialize)]
struct OWMMain {
    temp: f64,
    humidity: f64,
    #[serde(default)]
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OWMWeather {
    description: String,
}

/// OpenWeatherMap API response for forecast
#[derive(Debug, Deserialize)]
struct OWMForecastResponse {
    city: Option<OWMCity>,
    #[serde(default)]
    list: Vec<OWMForecastItem>,
}

#[derive(Debug, Deserialize)]
struct OWMCity {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OWMForecastItem {
    dt: i64,
    main: OWMMain,
    #[serde(default)]
    weather: Vec<OWMWeather>,
    #[serde(default)]
    pop: f64,
    rain: Option<OWMRain>,
}

#[derive(Debug, Deserialize)]
struct OWMRain {
    #[serde(rename = "3h")]
    three_hour: Option<f64>,
}

const UNKNOWN_LOCATION: &str = "Unknown";

impl OpenWeatherClient {
    /// Create a client from configuration
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key().map(str::to_string),
            base_url: config.api_endpoint.trim_end_matches('/').to_string(),
            language: config.language,
        }
    }

    fn query(&self, api_key: &str, coords: &Coordinates, units: Units) -> Vec<(&'static str, String)> {
        vec![
            ("lat", coords.latitude.to_string()),
            ("lon", coords.longitude.to_string()),
            ("appid", api_key.to_string()),
            ("units", units.as_str().to_string()),
            ("lang", self.language.code().to_string()),
        ]
    }

    /// Convert OpenWeatherMap current response to our format
    fn convert_current_response(data: OWMCurrentResponse) -> CurrentWeather {
        CurrentWeather {
            location_name: data
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
            observed_at: data
                .dt
                .and_then(|dt| DateTime::from_timestamp(dt, 0))
                .unwrap_or_else(Utc::now),
            conditions: CurrentConditions {
                temperature: data.main.temp,
                humidity: data.main.humidity,
                pressure: data.main.pressure,
                description: data
                    .weather
                    .into_iter()
                    .next()
                    .map(|w| w.description)
                    .unwrap_or_default(),
            },
        }
    }

    /// Convert OpenWeatherMap forecast response to our format
    fn convert_forecast_response(data: OWMForecastResponse) -> WeatherForecast {
        let samples = data
            .list
            .into_iter()
            .map(|item| ForecastSample {
                timestamp: DateTime::from_timestamp(item.dt, 0).unwrap_or_else(Utc::now),
                temperature: item.main.temp,
                humidity: item.main.humidity,
                probability_of_precipitation: item.pop,
                description: item
                    .weather
                    .into_iter()
                    .next()
                    .map(|w| w.description)
                    .unwrap_or_default(),
                precipitation_3h_mm: item.rain.and_then(|r| r.three_hour),
            })
            .collect();

        WeatherForecast {
            location_name: data
                .city
                .and_then(|c| c.name)
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
            forecast: ForecastWindow::new(samples),
        }
    }
}

#[async_trait]
impl WeatherGateway for OpenWeatherClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn current(&self, coords: &Coordinates, units: Units) -> Lookup<CurrentWeather> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Lookup::Unconfigured;
        };

        let url = format!("{}/weather", self.base_url);
        let query = self.query(api_key, coords, units);
        let lookup = Lookup::from(fetch_json::<OWMCurrentResponse>(&self.client, &url, &query).await);

        if let Lookup::Unavailable(failure) = &lookup {
            tracing::error!("Error fetching current weather: {}", failure);
        }
        lookup.map(Self::convert_current_response)
    }

    async fn forecast(
        &self,
        coords: &Coordinates,
        units: Units,
        days: u32,
    ) -> Lookup<WeatherForecast> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Lookup::Unconfigured;
        };

        let url = format!("{}/forecast", self.base_url);
        let mut query = self.query(api_key, coords, units);
        query.push(("cnt", forecast_sample_count(days).to_string()));

        let lookup = Lookup::from(fetch_json::<OWMForecastResponse>(&self.client, &url, &query).await);

        if let Lookup::Unavailable(failure) = &lookup {
            tracing::error!("Error fetching forecast: {}", failure);
        }
        lookup.map(Self::convert_forecast_response)
    }
}
