/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Unified error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("External API error: {0}")]
    ExternalApi(#[from] reqwest::Error),

    #[error("Upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn upstream_code(status: u16) -> &'static str {
    match status {
        401 => "UPSTREAM_401",
        403 => "UPSTREAM_403",
        404 => "UPSTREAM_404",
        429 => "UPSTREAM_429",
        500..=599 => "UPSTREAM_5XX",
        _ => "UPSTREAM_ERROR",
    }
}

impl ApiError {
    /// Stable machine-readable code for the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::ExternalApi(e) => e
                .status()
                .map(|s| upstream_code(s.as_u16()))
                .unwrap_or("UPSTREAM_ERROR"),
            ApiError::Upstream { status, .. } => upstream_code(*status),
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_response = ErrorResponse {
            ok: false,
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };

        // Errors travel in the envelope, the HTTP status stays 200
        (StatusCode::OK, Json(error_response)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
