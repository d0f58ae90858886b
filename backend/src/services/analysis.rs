//! Combined weather and satellite analysis
//!
//! Collaborator failures degrade to `null` sections instead of failing the request.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{Coordinates, Language};

use super::satellite::SatelliteService;
use super::weather::{FloweringAnalysis, WeatherService};

#[derive(Clone)]
pub struct AnalysisService {
    weather: WeatherService,
    satellite: SatelliteService,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombinedLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CombinedAnalysis {
    pub location: CombinedLocation,
    pub weather_analysis: Option<FloweringAnalysis>,
    pub satellite_data: Option<serde_json::Value>,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisService {
    pub fn new(weather: WeatherService, satellite: SatelliteService) -> Self {
        Self { weather, satellite }
    }

    pub async fn combined(&self, coords: &Coordinates, language: Language) -> CombinedAnalysis {
        let weather_analysis = match self.weather.analyze_flowering(coords, language).await {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                tracing::warn!("Combined analysis without weather data: {}", e);
                None
            }
        };

        let satellite_data = match self.satellite.statistics(coords).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!("Combined analysis without satellite data: {}", e);
                None
            }
        };

        CombinedAnalysis {
            location: CombinedLocation {
                latitude: coords.latitude_f64(),
                longitude: coords.longitude_f64(),
            },
            weather_analysis,
            satellite_data,
            generated_at: Utc::now(),
        }
    }
}
