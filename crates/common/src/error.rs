//! Common error types and handling for Colloquy

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Remediation hint attached to upstream (LLM provider) failures
pub const UPSTREAM_HINT: &str =
    "Make sure your API key is valid and your account has remaining quota.";

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Colloquy application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Upstream(_) => StatusCode::BAD_GATEWAY,
            Error::Unexpected(_) | Error::Serialization(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Unexpected(_) => "UNEXPECTED_ERROR",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
            Error::Validation(_) => "VALIDATION_ERROR",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Internal(_) => "INTERNAL_ERROR",
            Error::Upstream(_) => "UPSTREAM_ERROR",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Log server-side errors with full context
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        // Upstream failures carry a generic remediation hint for the caller
        let body = match &self {
            Error::Upstream(_) => Json(json!({
                "error": {
                    "code": error_code,
                    "message": self.to_string(),
                    "hint": UPSTREAM_HINT,
                }
            })),
            _ => Json(json!({
                "error": {
                    "code": error_code,
                    "message": self.to_string(),
                }
            })),
        };

        (status, body).into_response()
    }
}
