//! Satellite data service

use axum::http::StatusCode;
use shared::Coordinates;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::external::{Lookup, SatelliteGateway, UpstreamFailure};

#[derive(Clone)]
pub struct SatelliteService {
    gateway: Arc<dyn SatelliteGateway>,
}

impl SatelliteService {
    pub fn new(gateway: Arc<dyn SatelliteGateway>) -> Self {
        Self { gateway }
    }

    pub fn is_configured(&self) -> bool {
        self.gateway.is_configured()
    }

    /// Fetch NASA Earth statistics, forwarding upstream error statuses
    pub async fn statistics(&self, coords: &Coordinates) -> AppResult<serde_json::Value> {
        match self.gateway.statistics(coords).await {
            Lookup::Ready(body) => Ok(body),
            Lookup::Unconfigured => Err(AppError::SatelliteServiceUnconfigured),
            Lookup::Unavailable(UpstreamFailure::Status { status, body }) => {
                Err(AppError::SatelliteUpstream {
                    status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                    details: body,
                })
            }
            Lookup::Unavailable(failure) => Err(AppError::ExternalService(failure.to_string())),
        }
    }
}
