//! Job board backend
//!
//! Employers post jobs, applicants apply, and employers review the
//! applications to their own postings. Layered as domain, application,
//! adapters and infrastructure.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
