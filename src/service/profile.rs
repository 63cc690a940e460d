//! Profile Service
//!
//! Validated partial updates of a user's username and birthday.

use crate::database::{StoreError, StoreResult, UserStore};
use crate::models::{requests::EditUserRequest, user::UserRecord};
use crate::service::error::{UserServiceError, UserServiceResult};
use crate::utils::validation::{messages, validate_birthday, validate_username};

#[derive(Clone)]
pub struct ProfileService {
    store: UserStore,
}

impl ProfileService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Applies a patch to the profile of `target_id`
    ///
    /// The caller must already be authenticated as `target_id`; that check
    /// belongs to the HTTP layer. Only fields present in the patch change.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - missing patch, username held by another user,
    ///   blank username, or birthday after today
    /// * `NotFound` - no user has that id
    pub async fn edit(
        &self,
        target_id: i64,
        patch: Option<EditUserRequest>,
    ) -> UserServiceResult<UserRecord> {
        let patch = patch
            .ok_or_else(|| UserServiceError::InvalidArgument(messages::MISSING_PATCH.into()))?;

        let mut user = self
            .store
            .find_by_id(target_id)
            .await?
            .ok_or(UserServiceError::NotFound)?;

        if let Some(username) = &patch.username {
            if validate_username(username) && *username != user.username {
                if let Some(existing) = self.store.find_by_username(username).await? {
                    if existing.id != user.id {
                        return Err(username_exists());
                    }
                }
            }

            if !validate_username(username) {
                return Err(UserServiceError::InvalidArgument(
                    messages::BLANK_USERNAME.into(),
                ));
            }
        }

        if let Some(birthday) = &patch.birthday {
            if !validate_birthday(birthday) {
                return Err(UserServiceError::InvalidArgument(
                    messages::FUTURE_BIRTHDAY.into(),
                ));
            }
        }

        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(birthday) = patch.birthday {
            user.birthday = Some(birthday);
        }

        let updated = saved_profile(self.store.save(&user).await)?;

        log::info!("Updated profile of user {}", updated.id);
        Ok(updated)
    }
}

/// Maps the outcome of the profile write
fn saved_profile(result: StoreResult<Option<UserRecord>>) -> UserServiceResult<UserRecord> {
    match result {
        Ok(Some(updated)) => Ok(updated),
        Ok(None) => Err(UserServiceError::NotFound),
        // Lost a race with a concurrent rename to the same username
        Err(StoreError::UsernameTaken) => Err(username_exists()),
        Err(e) => Err(e.into()),
    }
}

fn username_exists() -> UserServiceError {
    UserServiceError::InvalidArgument(messages::USERNAME_EXISTS.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::requests::CreateUserRequest;
    use crate::service::AccountService;
    use crate::utils::validation::today;
    use chrono::NaiveDate;
    use sqlx::SqlitePool;

    async fn create(accounts: &AccountService, username: &str) -> UserRecord {
        accounts
            .create_user(CreateUserRequest {
                username: username.to_string(),
                password: "pw".to_string(),
                birthday: NaiveDate::from_ymd_opt(1990, 1, 1),
            })
            .await
            .unwrap()
    }

    fn setup(pool: SqlitePool) -> (AccountService, ProfileService, UserStore) {
        let store = UserStore::new(pool);
        (
            AccountService::new(store.clone()),
            ProfileService::new(store.clone()),
            store,
        )
    }

    fn patch(username: Option<&str>, birthday: Option<NaiveDate>) -> Option<EditUserRequest> {
        Some(EditUserRequest {
            username: username.map(str::to_string),
            birthday,
        })
    }

    #[sqlx::test]
    async fn test_edit_username_and_birthday(pool: SqlitePool) {
        let (accounts, profiles, store) = setup(pool);
        let user = create(&accounts, "alice").await;
        let birthday = NaiveDate::from_ymd_opt(1991, 6, 30);

        let updated = profiles
            .edit(user.id, patch(Some("alicia"), birthday))
            .await
            .unwrap();

        assert_eq!(updated.username, "alicia");
        assert_eq!(updated.birthday, birthday);
        assert_eq!(updated.token, user.token);
        assert_eq!(updated.registration_date, user.registration_date);
        assert_eq!(store.find_by_id(user.id).await.unwrap(), Some(updated));
    }

    #[sqlx::test]
    async fn test_edit_applies_only_present_fields(pool: SqlitePool) {
        let (accounts, profiles, _) = setup(pool);
        let user = create(&accounts, "alice").await;

        let updated = profiles
            .edit(user.id, patch(None, Some(today())))
            .await
            .unwrap();
        assert_eq!(updated.username, "alice");
        assert_eq!(updated.birthday, Some(today()));

        let updated = profiles.edit(user.id, patch(Some("al"), None)).await.unwrap();
        assert_eq!(updated.username, "al");
        assert_eq!(updated.birthday, Some(today()));
    }

    #[sqlx::test]
    async fn test_edit_rejects_future_birthday(pool: SqlitePool) {
        let (accounts, profiles, store) = setup(pool);
        let user = create(&accounts, "alice").await;
        let tomorrow = today().succ_opt().unwrap();

        let result = profiles.edit(user.id, patch(None, Some(tomorrow))).await;

        assert!(matches!(result, Err(UserServiceError::InvalidArgument(_))));
        let stored = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.birthday, user.birthday);
    }

    #[sqlx::test]
    async fn test_edit_rejects_taken_username(pool: SqlitePool) {
        let (accounts, profiles, store) = setup(pool);
        let alice = create(&accounts, "alice").await;
        create(&accounts, "bob").await;

        let result = profiles.edit(alice.id, patch(Some("bob"), None)).await;

        match result {
            Err(UserServiceError::InvalidArgument(msg)) => {
                assert_eq!(msg, messages::USERNAME_EXISTS)
            }
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        let stored = store.find_by_id(alice.id).await.unwrap().unwrap();
        assert_eq!(stored.username, "alice");
    }

    #[sqlx::test]
    async fn test_edit_own_username_unchanged(pool: SqlitePool) {
        let (accounts, profiles, _) = setup(pool);
        let alice = create(&accounts, "alice").await;

        let updated = profiles
            .edit(alice.id, patch(Some("alice"), None))
            .await
            .unwrap();
        assert_eq!(updated, alice);
    }

    #[sqlx::test]
    async fn test_edit_rejects_blank_username(pool: SqlitePool) {
        let (accounts, profiles, _) = setup(pool);
        let alice = create(&accounts, "alice").await;

        let result = profiles.edit(alice.id, patch(Some("   "), None)).await;
        assert!(matches!(result, Err(UserServiceError::InvalidArgument(_))));
    }

    #[sqlx::test]
    async fn test_edit_rejects_missing_patch(pool: SqlitePool) {
        let (accounts, profiles, _) = setup(pool);
        let alice = create(&accounts, "alice").await;

        let result = profiles.edit(alice.id, None).await;
        assert!(matches!(result, Err(UserServiceError::InvalidArgument(_))));
    }

    #[sqlx::test]
    async fn test_edit_unknown_user(pool: SqlitePool) {
        let (_, profiles, _) = setup(pool);

        let result = profiles.edit(99, patch(Some("ghost"), None)).await;
        assert!(matches!(result, Err(UserServiceError::NotFound)));
    }

    #[test]
    fn test_saved_profile_maps_write_outcomes() {
        let result = saved_profile(Err(StoreError::UsernameTaken));
        assert!(
            matches!(result, Err(UserServiceError::InvalidArgument(msg)) if msg == messages::USERNAME_EXISTS)
        );

        assert!(matches!(saved_profile(Ok(None)), Err(UserServiceError::NotFound)));
        assert!(matches!(
            saved_profile(Err(StoreError::Database(sqlx::Error::PoolTimedOut))),
            Err(UserServiceError::Database(_))
        ));
    }
}
