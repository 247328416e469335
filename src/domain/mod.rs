pub mod auth;
pub mod job;

// Re-export auth module for easier access
pub use auth::*;
