//! User Model
//!
//! Core user data structures and type definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Session state of a user account
///
/// Stored as `ONLINE` / `OFFLINE` text; the `users.status` column carries a
/// CHECK constraint so no other value can be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum UserStatus {
    Online,
    Offline,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Online => "ONLINE",
            UserStatus::Offline => "OFFLINE",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User representation for external API responses
///
/// This is the only shape handed to HTTP callers. It never carries the
/// password or the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,

    /// Unique login name
    pub username: String,

    /// Current session state
    pub status: UserStatus,

    /// Optional birthday, never in the future
    pub birthday: Option<NaiveDate>,

    /// Date the account was created
    pub registration_date: NaiveDate,
}

/// Internal user representation including credentials
///
/// Mirrors a row of the `users` table. Used by the store and the services;
/// converted into [`User`] before leaving the service boundary.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub token: String,
    pub password: String,
    pub status: UserStatus,
    pub registration_date: NaiveDate,
    pub birthday: Option<NaiveDate>,
}

/// A user that has not been persisted yet and so has no id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub token: String,
    pub password: String,
    pub status: UserStatus,
    pub registration_date: NaiveDate,
    pub birthday: Option<NaiveDate>,
}

impl From<UserRecord> for User {
    /// Strips the password and token
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            username: record.username,
            status: record.status,
            birthday: record.birthday,
            registration_date: record.registration_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> UserRecord {
        UserRecord {
            id: 7,
            username: "alice".to_string(),
            token: "secret-token".to_string(),
            password: "pw1".to_string(),
            status: UserStatus::Online,
            registration_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            birthday: Some(NaiveDate::from_ymd_opt(1990, 5, 17).unwrap()),
        }
    }

    #[test]
    fn test_user_record_conversion() {
        let user: User = sample_record().into();

        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
        assert_eq!(user.status, UserStatus::Online);
        assert_eq!(user.birthday, NaiveDate::from_ymd_opt(1990, 5, 17));
    }

    #[test]
    fn test_user_json_excludes_credentials() {
        let user: User = sample_record().into();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "ONLINE");
        assert_eq!(json["birthday"], "1990-05-17");
        assert_eq!(json["registrationDate"], "2024-03-01");
        assert!(json.get("password").is_none());
        assert!(json.get("token").is_none());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&UserStatus::Offline).unwrap(),
            "\"OFFLINE\""
        );
        let status: UserStatus = serde_json::from_str("\"ONLINE\"").unwrap();
        assert_eq!(status, UserStatus::Online);
        assert_eq!(UserStatus::Offline.to_string(), "OFFLINE");
    }
}
