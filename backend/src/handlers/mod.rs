//! HTTP handlers for the FloraWatch API

pub mod analysis;
pub mod health;
pub mod satellite;
pub mod weather;

pub use analysis::*;
pub use health::*;
pub use satellite::*;
pub use weather::*;
