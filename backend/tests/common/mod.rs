#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use chrono::{Duration, TimeZone, Utc};
use serde_json::Value;
use shared::{Coordinates, CurrentConditions, ForecastSample, ForecastWindow, Units};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use florawatch_backend::external::{
    CurrentWeather, Lookup, SatelliteGateway, UpstreamFailure, WeatherForecast, WeatherGateway,
};
use florawatch_backend::{create_app, App, AppState, Config};

/// Weather gateway returning canned lookups and recording calls
pub struct FakeWeather {
    pub current: Lookup<CurrentWeather>,
    pub forecast: Lookup<WeatherForecast>,
    pub calls: AtomicUsize,
    pub requested: Mutex<Vec<(Units, Option<u32>)>>,
}

impl FakeWeather {
    pub fn ready(temperature: f64, humidity: f64, rain: &[Option<f64>]) -> Self {
        Self::with(
            Lookup::Ready(current_weather(temperature, humidity)),
            Lookup::Ready(weather_forecast(rain)),
        )
    }

    pub fn unconfigured() -> Self {
        Self::with(Lookup::Unconfigured, Lookup::Unconfigured)
    }

    pub fn unavailable() -> Self {
        let failure = UpstreamFailure::Status {
            status: 401,
            body: "Invalid API key".to_string(),
        };
        Self::with(
            Lookup::Unavailable(failure.clone()),
            Lookup::Unavailable(failure),
        )
    }

    pub fn with(current: Lookup<CurrentWeather>, forecast: Lookup<WeatherForecast>) -> Self {
        Self {
            current,
            forecast,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<(Units, Option<u32>)> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherGateway for FakeWeather {
    fn is_configured(&self) -> bool {
        !matches!(self.current, Lookup::Unconfigured)
    }

    async fn current(&self, _: &Coordinates, units: Units) -> Lookup<CurrentWeather> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push((units, None));
        self.current.clone()
    }

    async fn forecast(&self, _: &Coordinates, units: Units, days: u32) -> Lookup<WeatherForecast> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push((units, Some(days)));
        self.forecast.clone()
    }
}

/// Satellite gateway returning a canned lookup
pub struct FakeSatellite(pub Lookup<Value>);

#[async_trait]
impl SatelliteGateway for FakeSatellite {
    fn is_configured(&self) -> bool {
        !matches!(self.0, Lookup::Unconfigured)
    }

    async fn statistics(&self, _: &Coordinates) -> Lookup<Value> {
        self.0.clone()
    }
}

pub fn current_weather(temperature: f64, humidity: f64) -> CurrentWeather {
    CurrentWeather {
        location_name: "Granada".to_string(),
        observed_at: Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap(),
        conditions: CurrentConditions {
            temperature,
            humidity,
            pressure: 1015.0,
            description: "cielo claro".to_string(),
        },
    }
}

pub fn weather_forecast(rain: &[Option<f64>]) -> WeatherForecast {
    let start = Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap();
    WeatherForecast {
        location_name: "Granada".to_string(),
        forecast: ForecastWindow::new(
            rain.iter()
                .enumerate()
                .map(|(i, r)| {
                    ForecastSample::with_precipitation(start + Duration::hours(3 * i as i64), *r)
                })
                .collect(),
        ),
    }
}

pub fn app(weather: Arc<FakeWeather>, satellite: FakeSatellite) -> App {
    create_app(AppState::new(Config::default(), weather, Arc::new(satellite)))
}

/// Issue a GET and decode the JSON response body
pub async fn get_json(app: App, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
