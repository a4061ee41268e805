//! Error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::types::Error;

/// Error body returned by every failing request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Whether the operation was successful (always false)
    pub success: bool,
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body from a message
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

impl Error {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Store(_) => StatusCode::BAD_GATEWAY,
            Error::Config(_) | Error::Metrics(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_server_error() {
            tracing::error!(status = status.as_u16(), "request failed: {}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "request rejected: {}", self);
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
