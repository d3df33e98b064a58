//! Unified error types for the API service.

use axum::{
    extract::rejection::BytesRejection,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Service startup and runtime error.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Prometheus exporter could not be installed.
    #[error("metrics exporter error: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A path parameter that must be an integer was not one.
    #[error("Invalid {name}: must be a valid integer")]
    InvalidInteger {
        /// Name of the offending path parameter.
        name: &'static str,
    },

    /// No route matches the request.
    #[error("Route {method}:{path} not found")]
    NotFound {
        /// Request method.
        method: Method,
        /// Request path.
        path: String,
    },

    /// The request body could not be read.
    #[error("{}", .0.body_text())]
    Body(#[from] BytesRejection),

    /// The request body is not JSON.
    #[error("Body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInteger { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Body(rejection) => rejection.status(),
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
