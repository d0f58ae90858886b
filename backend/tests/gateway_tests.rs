//! Upstream client tests
//!
//! Run the OpenWeatherMap and NASA clients against a local fake upstream.

use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use shared::{Coordinates, Language, Units};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use florawatch_backend::config::{NasaConfig, WeatherConfig};
use florawatch_backend::external::{
    Lookup, NasaEarthClient, OpenWeatherClient, SatelliteGateway, UpstreamFailure, WeatherGateway,
};

type SeenQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Serve `router` on an ephemeral port and return its base URL
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Route answering `status` with `body` and recording every query string
fn recording_route(path: &str, status: StatusCode, body: String, seen: SeenQueries) -> Router {
    Router::new().route(
        path,
        get(move |Query(query): Query<HashMap<String, String>>| {
            let seen = seen.clone();
            let body = body.clone();
            async move {
                seen.lock().unwrap().push(query);
                (status, body).into_response()
            }
        }),
    )
}

fn weather_client(base_url: &str) -> OpenWeatherClient {
    OpenWeatherClient::new(&WeatherConfig {
        api_endpoint: base_url.to_string(),
        api_key: Some("test-key".to_string()),
        language: Language::Spanish,
        units: Units::Metric,
    })
}

fn coords() -> Coordinates {
    Coordinates::new(
        Decimal::from_str("37.18").unwrap(),
        Decimal::from_str("-3.6").unwrap(),
    )
}

fn forecast_body() -> String {
    json!({
        "cod": "200",
        "cnt": 3,
        "list": [
            {
                "dt": 1759579200,
                "main": { "temp": 19.0, "humidity": 55, "pressure": 1014 },
                "weather": [{ "description": "lluvia ligera" }],
                "pop": 0.4,
                "rain": { "3h": 2.5 }
            },
            {
                "dt": 1759590000,
                "main": { "temp": 17.5, "humidity": 62, "pressure": 1013 },
                "weather": [{ "description": "lluvia fuerte" }],
                "pop": 0.9,
                "rain": { "3h": 12.0 }
            },
            {
                "dt": 1759600800,
                "main": { "temp": 16.0, "humidity": 70, "pressure": 1013 },
                "weather": [{ "description": "nubes" }],
                "pop": 0.1
            }
        ],
        "city": { "name": "Granada" }
    })
    .to_string()
}

// ============================================================================
// OpenWeatherMap
// ============================================================================

#[tokio::test]
async fn test_current_weather_parsed_and_query_sent() {
    let seen = SeenQueries::default();
    let body = json!({
        "weather": [{ "description": "cielo claro" }],
        "main": { "temp": 21.4, "humidity": 48, "pressure": 1016 },
        "dt": 1759579200,
        "name": "Granada"
    })
    .to_string();
    let base = serve(recording_route("/weather", StatusCode::OK, body, seen.clone())).await;

    let lookup = weather_client(&base).current(&coords(), Units::Imperial).await;
    let current = lookup.ready().expect("current weather");
    assert_eq!(current.location_name, "Granada");
    assert_eq!(current.conditions.temperature, 21.4);
    assert_eq!(current.conditions.humidity, 48.0);
    assert_eq!(current.conditions.description, "cielo claro");

    let queries = seen.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0]["lat"], "37.18");
    assert_eq!(queries[0]["lon"], "-3.6");
    assert_eq!(queries[0]["appid"], "test-key");
    assert_eq!(queries[0]["units"], "imperial");
    assert_eq!(queries[0]["lang"], "es");
    assert!(!queries[0].contains_key("cnt"));
}

#[tokio::test]
async fn test_forecast_parsed_with_sample_count() {
    let seen = SeenQueries::default();
    let base = serve(recording_route(
        "/forecast",
        StatusCode::OK,
        forecast_body(),
        seen.clone(),
    ))
    .await;

    let forecast = weather_client(&base)
        .forecast(&coords(), Units::Metric, 2)
        .await
        .ready()
        .expect("forecast");

    assert_eq!(forecast.location_name, "Granada");
    assert_eq!(forecast.forecast.len(), 3);
    let rain: Vec<Option<f64>> = forecast
        .forecast
        .samples
        .iter()
        .map(|s| s.precipitation_3h_mm)
        .collect();
    assert_eq!(rain, vec![Some(2.5), Some(12.0), None]);
    assert_eq!(forecast.forecast.samples[1].probability_of_precipitation, 0.9);

    assert_eq!(seen.lock().unwrap()[0]["cnt"], "16");
}

#[tokio::test]
async fn test_error_status_is_unavailable() {
    let seen = SeenQueries::default();
    let body = r#"{"cod":401,"message":"Invalid API key"}"#.to_string();
    let base = serve(recording_route(
        "/weather",
        StatusCode::UNAUTHORIZED,
        body,
        seen,
    ))
    .await;

    let lookup = weather_client(&base).current(&coords(), Units::Metric).await;
    match lookup {
        Lookup::Unavailable(UpstreamFailure::Status { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("expected upstream status failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_failure() {
    let base = serve(recording_route(
        "/forecast",
        StatusCode::OK,
        "<html>maintenance</html>".to_string(),
        SeenQueries::default(),
    ))
    .await;

    let lookup = weather_client(&base).forecast(&coords(), Units::Metric, 5).await;
    assert!(matches!(
        lookup,
        Lookup::Unavailable(UpstreamFailure::Decode(_))
    ));
}

#[tokio::test]
async fn test_unreachable_upstream_is_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let lookup = weather_client(&format!("http://{}", addr))
        .current(&coords(), Units::Metric)
        .await;
    assert!(matches!(
        lookup,
        Lookup::Unavailable(UpstreamFailure::Transport(_))
    ));
}

#[tokio::test]
async fn test_blank_key_makes_no_request() {
    let seen = SeenQueries::default();
    let base = serve(recording_route(
        "/weather",
        StatusCode::OK,
        "{}".to_string(),
        seen.clone(),
    ))
    .await;

    let client = OpenWeatherClient::new(&WeatherConfig {
        api_endpoint: base,
        api_key: Some("   ".to_string()),
        ..WeatherConfig::default()
    });

    assert!(!client.is_configured());
    assert_eq!(
        client.current(&coords(), Units::Metric).await,
        Lookup::Unconfigured
    );
    assert!(seen.lock().unwrap().is_empty());
}

// ============================================================================
// NASA Earth statistics
// ============================================================================

#[tokio::test]
async fn test_satellite_statistics_pass_through() {
    let seen = SeenQueries::default();
    let payload = json!({ "stats": { "B4": { "mean": 0.081 } } });
    let base = serve(recording_route(
        "/planetary/earth/stats",
        StatusCode::OK,
        payload.to_string(),
        seen.clone(),
    ))
    .await;

    let client = NasaEarthClient::new(&NasaConfig {
        api_endpoint: format!("{}/planetary/earth/stats", base),
        api_key: Some("DEMO_KEY".to_string()),
        ..NasaConfig::default()
    });

    let body: Value = client.statistics(&coords()).await.ready().expect("statistics");
    assert_eq!(body, payload);

    let queries = seen.lock().unwrap();
    assert_eq!(queries[0]["api_key"], "DEMO_KEY");
    assert_eq!(queries[0]["dim"], "0.1");
    assert_eq!(queries[0]["lat"], "37.18");
}

#[tokio::test]
async fn test_satellite_rate_limit_keeps_status() {
    let base = serve(Router::new().route(
        "/stats",
        get(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": { "code": "OVER_RATE_LIMIT" } })),
            )
        }),
    ))
    .await;

    let client = NasaEarthClient::new(&NasaConfig {
        api_endpoint: format!("{}/stats", base),
        api_key: Some("DEMO_KEY".to_string()),
        ..NasaConfig::default()
    });

    match client.statistics(&coords()).await {
        Lookup::Unavailable(UpstreamFailure::Status { status, body }) => {
            assert_eq!(status, 429);
            assert!(body.contains("OVER_RATE_LIMIT"));
        }
        other => panic!("expected upstream status failure, got {:?}", other),
    }
}
