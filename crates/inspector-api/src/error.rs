//! Error types for inspector-api

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for inspector-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running the service
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from inspector-core
    #[error("Core error: {0}")]
    Core(#[from] inspector_core::Error),

    /// Socket bind or serve failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned from a request handler.
///
/// Renders as `{"error": {"category": ..., "message": ...}}`.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ApiError {
    status: StatusCode,
    category: &'static str,
    message: String,
}

impl ApiError {
    /// Build an error with an explicit status.
    pub fn new(status: StatusCode, category: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            category,
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable category.
    pub fn category(&self) -> &'static str {
        self.category
    }
}

impl From<inspector_core::Error> for ApiError {
    fn from(err: inspector_core::Error) -> Self {
        let status = match &err {
            inspector_core::Error::InvalidTarget { .. } => StatusCode::BAD_REQUEST,
            inspector_core::Error::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.category(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(category = self.category, "{}", self.message);
        }
        let body = serde_json::json!({
            "error": {
                "category": self.category,
                "message": self.message,
            }
        });
        (self.status, axum::Json(body)).into_response()
    }
}
