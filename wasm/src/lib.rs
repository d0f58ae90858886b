//! WebAssembly module for FloraWatch
//!
//! Provides client-side computation for:
//! - Flowering-condition evaluation
//! - Recommendation messages
//! - Coordinate validation

use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

fn evaluate_json(current_json: &str, forecast_json: &str) -> Result<String, String> {
    let current: CurrentConditions = serde_json::from_str(current_json)
        .map_err(|e| format!("Invalid current conditions JSON: {}", e))?;
    let forecast: ForecastWindow = serde_json::from_str(forecast_json)
        .map_err(|e| format!("Invalid forecast JSON: {}", e))?;

    let report = evaluate(&current, &forecast);
    serde_json::to_string(&report).map_err(|e| e.to_string())
}

/// Evaluate flowering conditions; returns the report as JSON
#[wasm_bindgen]
pub fn evaluate_flowering_conditions(
    current_json: &str,
    forecast_json: &str,
) -> Result<String, JsValue> {
    evaluate_json(current_json, forecast_json).map_err(|e| JsValue::from_str(&e))
}

/// Recommendation tier for a score ("excellent", "good", ...)
#[wasm_bindgen]
pub fn flowering_tier(score: u8) -> String {
    Recommendation::from_score(score).to_string()
}

/// Localized recommendation message; unknown languages fall back to Spanish
#[wasm_bindgen]
pub fn flowering_recommendation(score: u8, lang: &str) -> String {
    let language = Language::from_code(lang).unwrap_or_default();
    Recommendation::from_score(score).message(language).to_string()
}

#[wasm_bindgen]
pub fn is_flowering_temperature(temperature: f64) -> bool {
    is_temperature_favorable(temperature)
}

#[wasm_bindgen]
pub fn is_flowering_humidity(humidity: f64) -> bool {
    is_humidity_favorable(humidity)
}

/// Check that a latitude/longitude pair parses and is in range
#[wasm_bindgen]
pub fn validate_coordinates(lat: &str, lon: &str) -> bool {
    parse_coordinates(lat, lon).is_ok()
}
