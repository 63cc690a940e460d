//! User Account Service Library
//!
//! A small user account service: registration, token based login and logout,
//! profile lookup and profile editing, stored in SQLite through SQLx.
//!
//! # Quick Start
//!
//! ## As a Service Library
//!
//! ```rust,no_run
//! use user_account_service::{database, AccountService, CreateUserRequest, UserStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = sqlx::SqlitePool::connect("sqlite:users.db?mode=rwc").await?;
//!     database::run_migrations(&pool).await?;
//!
//!     let accounts = AccountService::new(UserStore::new(pool));
//!     let user = accounts
//!         .create_user(CreateUserRequest {
//!             username: "alice".to_string(),
//!             password: "pw1".to_string(),
//!             birthday: None,
//!         })
//!         .await?;
//!     println!("Created user {} with token {}", user.id, user.token);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## As a Web Server Library
//!
//! ```rust,no_run
//! use user_account_service::{AppState, DatabaseConfig, RouterBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = DatabaseConfig::from_env().create_pool().await?;
//!     user_account_service::database::run_migrations(&pool).await?;
//!
//!     let app = RouterBuilder::with_all_routes().build(AppState::new(pool));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **API Layer**: HTTP handlers, token middleware and configurable routes
//! - **Service Layer**: account creation, sessions and profile edits
//! - **Database**: connection management and the user store
//! - **Models**: the user entity, its response projection and request payloads
//! - **Utils**: errors, token helpers and validation

/// HTTP API layer with handlers and configurable routing
pub mod api;

/// Configuration management for all service settings
pub mod config;

/// Database connection management and the user store
pub mod database;

/// Data models and request/response structures
pub mod models;

/// Account, session and profile services
pub mod service;

/// Shared utilities for security, validation, and error handling
pub mod utils;

// Re-export commonly used types for convenient access
pub use api::{create_routes, AppState, RouterBuilder};
pub use config::{AppConfig, ServerConfig};
pub use database::{DatabaseConfig, DatabasePool, UserStore};
pub use models::{
    requests::{CreateUserRequest, EditUserRequest, LoginRequest, LogoutRequest},
    user::{User, UserRecord, UserStatus},
};
pub use service::{AccountService, ProfileService, SessionService, UserServiceError};
pub use utils::error::{AppError, AppResult, ErrorResponse};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
