//! NASA Earth API client for satellite imagery statistics

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use reqwest::Client;
use shared::Coordinates;

use super::{fetch_json, Lookup};
use crate::config::NasaConfig;

/// Source of satellite statistics for a location
#[async_trait]
pub trait SatelliteGateway: Send + Sync {
    fn is_configured(&self) -> bool;

    /// Raw statistics payload for the box around `coords`
    async fn statistics(&self, coords: &Coordinates) -> Lookup<serde_json::Value>;
}

/// NASA Earth statistics client
#[derive(Clone)]
pub struct NasaEarthClient {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    lookback_days: i64,
    dim: f64,
}

impl NasaEarthClient {
    pub fn new(config: &NasaConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key().map(str::to_string),
            endpoint: config.api_endpoint.clone(),
            lookback_days: config.lookback_days,
            dim: config.dim,
        }
    }

    /// First day of the statistics window
    fn start_date(&self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.lookback_days)
    }

    fn query(&self, api_key: &str, coords: &Coordinates, today: NaiveDate) -> Vec<(&'static str, String)> {
        vec![
            ("lon", coords.longitude.to_string()),
            ("lat", coords.latitude.to_string()),
            ("date", self.start_date(today).format("%Y-%m-%d").to_string()),
            ("dim", self.dim.to_string()),
            ("api_key", api_key.to_string()),
        ]
    }
}

#[async_trait]
impl SatelliteGateway for NasaEarthClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn statistics(&self, coords: &Coordinates) -> Lookup<serde_json::Value> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Lookup::Unconfigured;
        };

        let query = self.query(api_key, coords, Utc::now().date_naive());
        match fetch_json(&self.client, &self.endpoint, &query).await {
            Ok(body) => Lookup::Ready(body),
            Err(failure) => {
                tracing::error!("Error fetching NASA statistics: {}", failure);
                Lookup::Unavailable(failure)
            }
        }
    }
}
