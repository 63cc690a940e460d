//! Account Service
//!
//! Registration of new user accounts.

use validator::Validate;

use crate::database::{StoreError, UserStore};
use crate::models::{
    requests::CreateUserRequest,
    user::{NewUser, UserRecord, UserStatus},
};
use crate::service::error::{UserServiceError, UserServiceResult};
use crate::utils::{
    security::generate_user_token,
    validation::{describe_validation_errors, today},
};

/// Fresh tokens drawn before giving up on a token collision
const MAX_TOKEN_ATTEMPTS: usize = 3;

/// Creates user accounts and issues their tokens
#[derive(Clone)]
pub struct AccountService {
    store: UserStore,
    generate_token: fn() -> String,
}

impl AccountService {
    pub fn new(store: UserStore) -> Self {
        Self {
            store,
            generate_token: generate_user_token,
        }
    }

    #[cfg(test)]
    fn with_token_generator(store: UserStore, generate_token: fn() -> String) -> Self {
        Self {
            store,
            generate_token,
        }
    }

    /// Creates a new user account
    ///
    /// The account starts ONLINE, registered today, with a freshly generated
    /// token. The returned record includes the store-assigned id and the token.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - blank username, empty password, or future birthday
    /// * `Conflict` - the username is taken
    pub async fn create_user(&self, request: CreateUserRequest) -> UserServiceResult<UserRecord> {
        request
            .validate()
            .map_err(|e| UserServiceError::InvalidArgument(describe_validation_errors(&e)))?;

        let CreateUserRequest {
            username,
            password,
            birthday,
        } = request;

        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            let candidate = NewUser {
                username: username.clone(),
                token: (self.generate_token)(),
                password: password.clone(),
                status: UserStatus::Online,
                registration_date: today(),
                birthday,
            };

            match self.store.insert(candidate).await {
                Ok(user) => {
                    log::info!("Created user {} (id {})", user.username, user.id);
                    return Ok(user);
                }
                Err(StoreError::UsernameTaken) => {
                    log::debug!("Rejected registration of existing username {}", username);
                    return Err(UserServiceError::Conflict(format!(
                        "Creation of user {} failed because username already exists",
                        username
                    )));
                }
                Err(StoreError::TokenTaken) => {
                    log::warn!("Token collision on attempt {}, regenerating", attempt);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(StoreError::TokenTaken.into())
    }

    /// All users ordered by id
    pub async fn list_users(&self) -> UserServiceResult<Vec<UserRecord>> {
        Ok(self.store.find_all().await?)
    }

    /// Looks up a single user
    pub async fn get_user(&self, id: i64) -> UserServiceResult<UserRecord> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(UserServiceError::NotFound)
    }

    /// Checks database connectivity
    pub async fn health_check(&self) -> UserServiceResult<()> {
        Ok(self.store.ping().await?)
    }
}
