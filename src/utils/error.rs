//! Error Handling Utilities
//!
//! HTTP-facing error type and its JSON response body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error type returned by every handler
#[derive(Error, Debug)]
pub enum AppError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed or invalid input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or bad credentials, token or ownership
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Resource not found errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Conflict errors (e.g., duplicate username)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Generic internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Standard error response structure for API endpoints
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error_code, message) = match self {
            AppError::Database(e) => {
                log::error!("Database error while handling request: {}", e);
                ("DATABASE_ERROR", "A database error occurred".to_string())
            }
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg),
            AppError::Authentication(msg) => ("AUTHENTICATION_ERROR", msg),
            AppError::NotFound(msg) => ("NOT_FOUND", msg),
            AppError::Conflict(msg) => ("CONFLICT", msg),
            AppError::Internal(e) => {
                log::error!("Internal error while handling request: {}", e);
                ("INTERNAL_ERROR", "An internal server error occurred".to_string())
            }
        };

        let error_response = ErrorResponse::new(error_code, &message);
        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for operations that can return AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_creation() {
        let error = ErrorResponse::new("TEST_ERROR", "Test message");
        assert_eq!(error.error, "TEST_ERROR");
        assert_eq!(error.message, "Test message");
    }

    #[test]
    fn test_app_error_display() {
        let error = AppError::Validation("Username cannot be empty".to_string());
        assert_eq!(error.to_string(), "Validation error: Username cannot be empty");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Authentication("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(sqlx::Error::PoolTimedOut).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let response = AppError::Internal("disk on fire".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
