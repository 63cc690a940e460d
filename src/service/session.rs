//! Session Service
//!
//! Token authentication and the ONLINE/OFFLINE transitions driven by login
//! and logout.

use crate::database::UserStore;
use crate::models::user::{UserRecord, UserStatus};
use crate::service::error::{UserServiceError, UserServiceResult};
use crate::utils::{security::constant_time_compare, validation::normalize_token};

#[derive(Clone)]
pub struct SessionService {
    store: UserStore,
}

impl SessionService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Resolves a presented token to its user
    ///
    /// Surrounding whitespace (and a `Bearer ` prefix) is ignored. A missing
    /// or blank token resolves to `None` without a lookup. Status plays no
    /// part: an OFFLINE user's token still authenticates.
    pub async fn authenticate(&self, token: Option<&str>) -> UserServiceResult<Option<UserRecord>> {
        let Some(token) = token.and_then(normalize_token) else {
            return Ok(None);
        };

        Ok(self.store.find_by_token(token).await?)
    }

    /// Logs a user in by username and password, marking them ONLINE
    ///
    /// # Errors
    ///
    /// * `NotFound` - no user has that username
    /// * `Unauthorized` - the password does not match
    pub async fn login(&self, username: &str, password: &str) -> UserServiceResult<UserRecord> {
        let mut user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or(UserServiceError::NotFound)?;

        if !constant_time_compare(&user.password, password) {
            log::debug!("Rejected login for {}: wrong password", username);
            return Err(UserServiceError::Unauthorized(
                "Password is incorrect".to_string(),
            ));
        }

        user.status = UserStatus::Online;
        let user = self.persist(&user).await?;
        log::info!("User {} logged in", user.id);
        Ok(user)
    }

    /// Logs a user out, marking them OFFLINE
    ///
    /// # Errors
    ///
    /// * `NotFound` - no user has that id
    /// * `Unauthorized` - the token is not this user's token
    pub async fn logout(&self, id: i64, token: &str) -> UserServiceResult<()> {
        let mut user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(UserServiceError::NotFound)?;

        if !constant_time_compare(&user.token, token) {
            log::debug!("Rejected logout for user {}: token mismatch", id);
            return Err(UserServiceError::Unauthorized("Invalid token".to_string()));
        }

        user.status = UserStatus::Offline;
        self.persist(&user).await?;
        log::info!("User {} logged out", id);
        Ok(())
    }

    async fn persist(&self, user: &UserRecord) -> UserServiceResult<UserRecord> {
        self.store
            .save(user)
            .await?
            .ok_or(UserServiceError::NotFound)
    }
}
