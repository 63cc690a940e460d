//! Request and Response Models
//!
//! Data structures for API request and response payloads with validation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{birthday_validator, password_validator, username_validator};

/// Request payload for registering a new account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Login name, must be unique and non-blank
    #[validate(custom(function = "username_validator"))]
    pub username: String,

    /// Password, stored as given
    #[validate(custom(function = "password_validator"))]
    pub password: String,

    /// Optional birthday, may not be in the future
    #[serde(default)]
    #[validate(custom(function = "birthday_validator"))]
    pub birthday: Option<NaiveDate>,
}

/// Request payload for logging in
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request payload for logging out
#[derive(Debug, Clone, Deserialize)]
pub struct LogoutRequest {
    pub id: i64,
    pub token: String,
}

/// Partial profile update
///
/// Only fields that are present are applied. Validation happens in
/// `ProfileService::edit` because the username check needs the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditUserRequest {
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

/// Response for health check
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}
