//! Live clock server — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use liveclock_core::error::ClockError;
use serde::Serialize;
use thiserror::Error;

use crate::facts::FactError;

/// Startup and runtime errors for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The page clock could not be started.
    #[error("clock error: {0}")]
    Clock(#[from] ClockError),

    /// The cat fact client could not be built.
    #[error("fact client error: {0}")]
    Facts(#[from] FactError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `ClockError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub ClockError);

impl From<ClockError> for ApiError {
    fn from(err: ClockError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            ClockError::TargetNotFound { .. } => (StatusCode::NOT_FOUND, "target_not_found"),
            ClockError::TargetDetached { .. } => (StatusCode::GONE, "target_detached"),
            ClockError::AlreadyRunning => (StatusCode::CONFLICT, "already_running"),
            ClockError::Scheduler(_) => (StatusCode::INTERNAL_SERVER_ERROR, "scheduler_error"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
