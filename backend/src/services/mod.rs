//! Business logic services for the FloraWatch backend

pub mod analysis;
pub mod satellite;
pub mod weather;

pub use analysis::AnalysisService;
pub use satellite::SatelliteService;
pub use weather::WeatherService;
