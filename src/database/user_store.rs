//! User Store
//!
//! Keyed access to the `users` table. Uniqueness of `username` and `token` is
//! enforced by UNIQUE constraints in the schema, so a duplicate insert fails
//! atomically instead of racing a separate existence check.

use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::user::{NewUser, UserRecord};

/// Errors raised by the user store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The username is already held by another row
    #[error("Username already taken")]
    UsernameTaken,

    /// The token is already held by another row
    #[error("Token already taken")]
    TokenTaken,

    /// Any other database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Classifies write failures, separating unique-constraint violations
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let message = db_err.message();
            if message.contains("users.username") {
                return StoreError::UsernameTaken;
            }
            if message.contains("users.token") {
                return StoreError::TokenTaken;
            }
        }
    }
    StoreError::Database(err)
}

/// Durable storage of user records
#[derive(Clone)]
pub struct UserStore {
    db_pool: SqlitePool,
}

impl UserStore {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }

    /// All users ordered by id
    pub async fn find_all(&self) -> StoreResult<Vec<UserRecord>> {
        let users = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, token, password, status, registration_date, birthday
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, token, password, status, registration_date, birthday
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> StoreResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, token, password, status, registration_date, birthday
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_token(&self, token: &str) -> StoreResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, token, password, status, registration_date, birthday
            FROM users
            WHERE token = ?
            "#,
        )
        .bind(token)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(user)
    }

    /// Inserts a new user and returns the stored row with its assigned id
    pub async fn insert(&self, user: NewUser) -> StoreResult<UserRecord> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (username, token, password, status, registration_date, birthday)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, username, token, password, status, registration_date, birthday
            "#,
        )
        .bind(user.username)
        .bind(user.token)
        .bind(user.password)
        .bind(user.status)
        .bind(user.registration_date)
        .bind(user.birthday)
        .fetch_one(&self.db_pool)
        .await
        .map_err(map_write_error)
    }

    /// Writes the mutable fields of an existing user
    ///
    /// `id`, `token` and `registration_date` are never rewritten. Returns
    /// `None` when no row has the given id.
    pub async fn save(&self, user: &UserRecord) -> StoreResult<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET username = ?, password = ?, status = ?, birthday = ?
            WHERE id = ?
            RETURNING id, username, token, password, status, registration_date, birthday
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(user.status)
        .bind(user.birthday)
        .bind(user.id)
        .fetch_optional(&self.db_pool)
        .await
        .map_err(map_write_error)
    }

    /// Checks database connectivity
    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.db_pool).await?;
        Ok(())
    }
}
