//! Canonical error envelope for the Signet API
//!
//! Every failed request, whatever raised it, is reported to the client
//! as one `ErrorEnvelope` wrapped in the fixed response body
//! `{ "error": 1, "errors": [<envelope>], "data": null }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// The client-visible shape of a single error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// HTTP status code for the failure
    pub code: u16,
    /// Short machine-readable category
    pub key: String,
    /// Human-readable detail
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(code: StatusCode, key: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.as_u16(),
            key: key.to_string(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = Json(json!({
            "error": 1,
            "errors": [self],
            "data": null,
        }));

        (status, body).into_response()
    }
}

/// Application-level error for the Signet API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Page not found")]
    NotFound,

    #[error("Unexpected error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error key for API responses
    pub fn error_key(&self) -> &'static str {
        match self {
            ApiError::NotFound => "PAGE_NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log internal errors with full context; the client only sees
        // the message text
        if matches!(self.status_code(), StatusCode::INTERNAL_SERVER_ERROR) {
            tracing::error!(error = %self, "Internal server error");
        }

        ErrorEnvelope::new(self.status_code(), self.error_key(), self.to_string())
            .into_response()
    }
}
