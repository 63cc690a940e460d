//! Service Errors
//!
//! Domain failures shared by the account, session and profile services.

use thiserror::Error;

use crate::database::StoreError;
use crate::utils::error::AppError;

/// Custom error types for the user services
#[derive(Error, Debug)]
pub enum UserServiceError {
    /// Attempted to create a user with a username that already exists
    #[error("{0}")]
    Conflict(String),

    /// No user matches the given identifier
    #[error("User not found")]
    NotFound,

    /// Wrong password, wrong token, or missing identity
    #[error("{0}")]
    Unauthorized(String),

    /// Input failed validation
    #[error("{0}")]
    InvalidArgument(String),

    /// Unexpected storage failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unexpected internal failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type for user service operations
pub type UserServiceResult<T> = Result<T, UserServiceError>;

impl From<StoreError> for UserServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(e) => UserServiceError::Database(e),
            StoreError::UsernameTaken => {
                UserServiceError::Conflict("Username already exists".to_string())
            }
            StoreError::TokenTaken => {
                UserServiceError::Internal("Generated token is already in use".to_string())
            }
        }
    }
}

impl From<UserServiceError> for AppError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::Conflict(msg) => AppError::Conflict(msg),
            UserServiceError::NotFound => AppError::NotFound("User not found".to_string()),
            UserServiceError::Unauthorized(msg) => AppError::Authentication(msg),
            UserServiceError::InvalidArgument(msg) => AppError::Validation(msg),
            UserServiceError::Database(e) => AppError::Database(e),
            UserServiceError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_service_error_to_app_error() {
        let cases = [
            (UserServiceError::Conflict("dup".into()), StatusCode::CONFLICT),
            (UserServiceError::NotFound, StatusCode::NOT_FOUND),
            (
                UserServiceError::Unauthorized("bad".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                UserServiceError::InvalidArgument("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserServiceError::Database(sqlx::Error::PoolClosed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                UserServiceError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            let app_error: AppError = err.into();
            assert_eq!(app_error.status_code(), status);
        }
    }

    #[test]
    fn test_store_error_conversion() {
        let err: UserServiceError = StoreError::UsernameTaken.into();
        assert!(matches!(err, UserServiceError::Conflict(_)));

        let err: UserServiceError = StoreError::TokenTaken.into();
        assert!(matches!(err, UserServiceError::Internal(_)));
    }
}
