//! Application layer
//!
//! Use cases that orchestrate domain services to implement each operation the
//! HTTP surface exposes. Commands carry raw client input; identifiers are
//! parsed here.

pub mod auth;
pub mod job;
pub mod job_application;
