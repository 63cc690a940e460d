//! Database Connection Management
//!
//! Utilities for managing SQLite connections with SQLx.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::time::Duration;

use crate::config::env;

/// Database connection pool type alias for convenience
pub type DatabasePool = SqlitePool;

/// Database configuration for connection setup
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:user_accounts.db?mode=rwc".to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Duration::from_secs(3600),
        }
    }
}

impl DatabaseConfig {
    /// Create database configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            url: env::get_string("DATABASE_URL", &defaults.url),
            max_connections: env::get_u32("DB_MAX_CONNECTIONS", defaults.max_connections),
            min_connections: env::get_u32("DB_MIN_CONNECTIONS", defaults.min_connections),
            connect_timeout: Duration::from_secs(env::get_u64("DB_CONNECT_TIMEOUT", 30)),
            idle_timeout: Duration::from_secs(env::get_u64("DB_IDLE_TIMEOUT", 600)),
            max_lifetime: Duration::from_secs(env::get_u64("DB_MAX_LIFETIME", 3600)),
        }
    }

    /// Create a database connection pool from this configuration
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }
}

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
