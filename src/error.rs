use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::alerting::{ComputationError, DatasetError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Top-level error for the binary's startup and request paths.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("computation error: {0}")]
    Computation(#[from] ComputationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Dashboard clients get a generic message for feed failures; the
        // underlying store error stays in the server log.
        let message = match &self {
            AppError::Computation(_) => "compliance feed unavailable".to_string(),
            other => other.to_string(),
        };

        let body = Json(json!({ "error": message }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
