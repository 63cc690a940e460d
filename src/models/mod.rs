//! Data Models Module
//!
//! This module contains all data structures used throughout the user account
//! service: the user entity, its response projection, and request payloads.

pub mod requests;
pub mod user;

// Re-export commonly used types
pub use requests::*;
pub use user::*;
