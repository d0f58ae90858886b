//! External API integrations
//!
//! Every gateway call resolves to a [`Lookup`]: the collaborator is either not
//! configured, failed upstream, or produced data.

use reqwest::Client;
use serde::de::DeserializeOwned;

pub mod satellite;
pub mod weather;

pub use satellite::{NasaEarthClient, SatelliteGateway};
pub use weather::{CurrentWeather, OpenWeatherClient, WeatherForecast, WeatherGateway};

/// Outcome of a gateway call
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// No credential is configured; no request was made
    Unconfigured,
    /// The upstream call failed
    Unavailable(UpstreamFailure),
    Ready(T),
}

impl<T> Lookup<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Unconfigured => Lookup::Unconfigured,
            Lookup::Unavailable(failure) => Lookup::Unavailable(failure),
            Lookup::Ready(value) => Lookup::Ready(f(value)),
        }
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Lookup::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, UpstreamFailure>> for Lookup<T> {
    fn from(result: Result<T, UpstreamFailure>) -> Self {
        match result {
            Ok(value) => Lookup::Ready(value),
            Err(failure) => Lookup::Unavailable(failure),
        }
    }
}

/// Why an upstream call produced no data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamFailure {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

const MAX_LOGGED_BODY: usize = 300;

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_LOGGED_BODY {
        return body.to_string();
    }
    let mut truncated: String = body.chars().take(MAX_LOGGED_BODY).collect();
    truncated.push('…');
    truncated
}

/// Issue a GET and decode the JSON body
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, UpstreamFailure> {
    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| UpstreamFailure::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| UpstreamFailure::Transport(e.to_string()))?;

    if !status.is_success() {
        return Err(UpstreamFailure::Status {
            status: status.as_u16(),
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| UpstreamFailure::Decode(e.to_string()))
}
