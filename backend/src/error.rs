//! Error handling for the FloraWatch backend
//!
//! Provides consistent error responses in English and Spanish

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::CoordinateError;
use std::any::Any;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_es: String,
    },

    // External service errors
    #[error("Weather service not configured")]
    WeatherServiceUnconfigured,

    #[error("Weather data unavailable: {0}")]
    WeatherDataUnavailable(String),

    #[error("Satellite service not configured")]
    SatelliteServiceUnconfigured,

    #[error("Satellite API returned {status}")]
    SatelliteUpstream { status: StatusCode, details: String },

    #[error("External service error: {0}")]
    ExternalService(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_es: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCoordinate(_) | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::WeatherServiceUnconfigured | AppError::SatelliteServiceUnconfigured => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::WeatherDataUnavailable(_) => StatusCode::NOT_FOUND,
            AppError::SatelliteUpstream { status, .. } => *status,
            AppError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> ErrorDetail {
        match self {
            AppError::InvalidCoordinate(err) => ErrorDetail {
                code: "INVALID_COORDINATE".to_string(),
                message_en: format!("Parameter error: {}", err),
                message_es: format!("Error en parámetros: {}", err),
                field: Some(err.field().to_string()),
                details: None,
            },
            AppError::Validation {
                field,
                message,
                message_es,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_es: message_es.clone(),
                field: Some(field.clone()),
                details: None,
            },
            AppError::WeatherServiceUnconfigured => ErrorDetail {
                code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                message_en: "Weather service unavailable".to_string(),
                message_es: "Servicio meteorológico no disponible".to_string(),
                field: None,
                details: None,
            },
            AppError::WeatherDataUnavailable(what) => ErrorDetail {
                code: "WEATHER_DATA_UNAVAILABLE".to_string(),
                message_en: format!("Could not obtain {}", what),
                message_es: "No se pudieron obtener datos meteorológicos".to_string(),
                field: None,
                details: None,
            },
            AppError::SatelliteServiceUnconfigured => ErrorDetail {
                code: "SATELLITE_SERVICE_UNAVAILABLE".to_string(),
                message_en: "NASA API key not configured".to_string(),
                message_es: "API Key de NASA no configurada".to_string(),
                field: None,
                details: None,
            },
            AppError::SatelliteUpstream { details, .. } => ErrorDetail {
                code: "SATELLITE_API_ERROR".to_string(),
                message_en: "Error fetching NASA data".to_string(),
                message_es: "Error obteniendo datos de NASA".to_string(),
                field: None,
                details: Some(details.clone()),
            },
            AppError::ExternalService(msg) => ErrorDetail {
                code: "EXTERNAL_SERVICE_ERROR".to_string(),
                message_en: format!("External service error: {}", msg),
                message_es: format!("Error del servicio externo: {}", msg),
                field: None,
                details: None,
            },
            AppError::Internal(_) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message_en: "An internal server error occurred".to_string(),
                message_es: "Se produjo un error interno del servidor".to_string(),
                field: None,
                details: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_detail = self.detail();

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

/// Turn a handler panic into a 500 response
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(message).into_response()
}
