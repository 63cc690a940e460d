//! Service Layer
//!
//! Business logic for accounts, sessions and profiles.

pub mod account;
pub mod error;
pub mod profile;
pub mod session;

// Re-export services
pub use account::AccountService;
pub use error::{UserServiceError, UserServiceResult};
pub use profile::ProfileService;
pub use session::SessionService;
