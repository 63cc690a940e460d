//! Security Utilities
//!
//! Token generation and credential comparison.

use uuid::Uuid;

/// Generate a new opaque session token
///
/// UUID v4, 122 random bits. Uniqueness across users is additionally enforced
/// by the `users.token` UNIQUE constraint.
pub fn generate_user_token() -> String {
    Uuid::new_v4().to_string()
}

/// Timing-safe string comparison
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (byte_a, byte_b) in a.bytes().zip(b.bytes()) {
        result |= byte_a ^ byte_b;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_token() {
        let token1 = generate_user_token();
        let token2 = generate_user_token();

        assert_eq!(token1.len(), 36);
        assert!(Uuid::parse_str(&token1).is_ok());
        assert_ne!(token1, token2);
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("hello", "hello"));
        assert!(!constant_time_compare("hello", "world"));
        assert!(!constant_time_compare("hello", "hello_world"));
        assert!(constant_time_compare("", ""));
    }
}
