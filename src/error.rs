//! Domain-specific error types for idea-brief

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the idea-brief service
#[derive(Error, Debug)]
pub enum IdeaBriefError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Completion API error: {message}")]
    Gateway { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl From<reqwest::Error> for IdeaBriefError {
    fn from(err: reqwest::Error) -> Self {
        IdeaBriefError::Gateway {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<serde_json::Error> for IdeaBriefError {
    fn from(err: serde_json::Error) -> Self {
        IdeaBriefError::Parse {
            message: err.to_string(),
        }
    }
}

/// Convert IdeaBriefError to an HTTP error response.
///
/// Every error that escapes a handler surfaces as a 500 with a
/// `{"detail": ...}` body; request-shape problems never reach this point
/// because axum's `Json` extractor rejects them first.
impl IntoResponse for IdeaBriefError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        tracing::error!("request failed: {detail}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response()
    }
}

/// Result type alias for idea-brief operations
pub type Result<T> = std::result::Result<T, IdeaBriefError>;
