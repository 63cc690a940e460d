//! Database Module
//!
//! Connection management and the user store.

pub mod connection;
pub mod user_store;

// Re-export commonly used types
pub use connection::{run_migrations, DatabaseConfig, DatabasePool};
pub use user_store::{StoreError, StoreResult, UserStore};
