//! Domain error types for GitHub Data Integration.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Generic message returned for errors whose detail must not reach the client.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Application-level errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Caller supplied an unusable argument (e.g. a blank username)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Upstream returned a non-2xx response, or the call failed outright
    #[error("Upstream call failed\nResponse Code: {status_code}\nError: {body}")]
    UpstreamCall { status_code: u16, body: String },

    /// A successful upstream response could not be decoded
    #[error("Failed to parse upstream response: {message}")]
    ResponseParse { message: String },

    /// Anything else; the detail is logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Numeric status code carried by this error.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::InvalidArgument(_) => 400,
            AppError::UpstreamCall { status_code, .. } => *status_code,
            AppError::ResponseParse { .. } | AppError::Internal(_) => 500,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UpstreamCall { status_code, .. } => StatusCode::from_u16(*status_code)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::ResponseParse { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, response_message) = match self {
            AppError::InvalidArgument(msg) => ("INVALID_ARGUMENT", msg.clone()),
            AppError::UpstreamCall { body, .. } => ("UPSTREAM_ERROR", body.clone()),
            AppError::ResponseParse { message } => ("RESPONSE_PARSE_ERROR", message.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ("INTERNAL_ERROR", UNEXPECTED_ERROR_MESSAGE.to_string())
            }
        };

        HttpResponse::build(ResponseError::status_code(self)).json(ErrorResponse {
            error: error_code.to_string(),
            message: response_message,
        })
    }
}

/// Error response body matching OpenAPI schema.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

// Conversion implementations for common error types

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::UpstreamCall {
            status_code: err.status().map(|s| s.as_u16()).unwrap_or(500),
            body: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ResponseParse {
            message: err.to_string(),
        }
    }
}
