//! Validation Utilities
//!
//! Input validation functions for user data and API requests.

use chrono::{NaiveDate, Utc};
use validator::ValidationError;

/// Current calendar date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// A username is valid when it has at least one non-whitespace character
pub fn validate_username(username: &str) -> bool {
    !username.trim().is_empty()
}

/// A birthday may be today or any earlier date
pub fn validate_birthday(birthday: &NaiveDate) -> bool {
    *birthday <= today()
}

/// Normalizes a presented session token
///
/// Strips surrounding whitespace and an optional `Bearer ` scheme. Returns
/// `None` when nothing is left.
pub fn normalize_token(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let token = match trimmed.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => trimmed,
    };

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Custom validator for username fields using the validator crate
pub fn username_validator(username: &str) -> Result<(), ValidationError> {
    if validate_username(username) {
        Ok(())
    } else {
        Err(ValidationError::new("blank_username").with_message(messages::BLANK_USERNAME.into()))
    }
}

/// Custom validator for password fields; any non-empty value is accepted
pub fn password_validator(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        Err(ValidationError::new("empty_password").with_message(messages::EMPTY_PASSWORD.into()))
    } else {
        Ok(())
    }
}

/// Custom validator for birthday fields using the validator crate
pub fn birthday_validator(birthday: &NaiveDate) -> Result<(), ValidationError> {
    if validate_birthday(birthday) {
        Ok(())
    } else {
        Err(ValidationError::new("future_birthday")
            .with_message(messages::FUTURE_BIRTHDAY.into()))
    }
}

/// Flattens `validator` errors into a single readable message
pub fn describe_validation_errors(err: &validator::ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, errors) in err.field_errors() {
        for error in errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for field '{}'", field));
            messages.push(format!("{}: {}", field, message));
        }
    }

    messages.sort();
    messages.join(", ")
}

/// Validation error messages for user-friendly responses
pub mod messages {
    pub const BLANK_USERNAME: &str = "Username cannot be empty";
    pub const EMPTY_PASSWORD: &str = "Password cannot be empty";
    pub const FUTURE_BIRTHDAY: &str = "Birthday cannot be in the future";
    pub const USERNAME_EXISTS: &str = "Username already exists";
    pub const MISSING_PATCH: &str = "User data cannot be null";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice"));
        assert!(validate_username(" bob "));
        assert!(!validate_username(""));
        assert!(!validate_username("   "));
        assert!(!validate_username("\t\n"));
    }

    #[test]
    fn test_validate_birthday() {
        let today = today();
        assert!(validate_birthday(&today));
        assert!(validate_birthday(&NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()));
        assert!(!validate_birthday(&today.succ_opt().unwrap()));
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("abc"), Some("abc"));
        assert_eq!(normalize_token("  abc \n"), Some("abc"));
        assert_eq!(normalize_token("Bearer abc"), Some("abc"));
        assert_eq!(normalize_token("Bearer   abc "), Some("abc"));
        assert_eq!(normalize_token(""), None);
        assert_eq!(normalize_token("   "), None);
        assert_eq!(normalize_token("Bearer  "), None);
        assert_eq!(normalize_token("Bearerish"), Some("Bearerish"));
    }

    #[test]
    fn test_custom_validators() {
        assert!(username_validator("carol").is_ok());
        let err = username_validator(" ").unwrap_err();
        assert_eq!(err.code, "blank_username");

        assert!(password_validator(" ").is_ok());
        let err = password_validator("").unwrap_err();
        assert_eq!(err.code, "empty_password");

        let tomorrow = today().succ_opt().unwrap();
        let err = birthday_validator(&tomorrow).unwrap_err();
        assert_eq!(err.code, "future_birthday");
    }
}
