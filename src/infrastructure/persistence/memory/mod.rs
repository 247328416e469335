//! Process-local repositories backed by mutex-guarded vectors.
//!
//! Records are kept in insertion order so that listings can break
//! timestamp ties in favour of the most recent insert.

mod job_application_repository;
mod job_repository;
mod user_repository;

pub use job_application_repository::InMemoryJobApplicationRepository;
pub use job_repository::InMemoryJobRepository;
pub use user_repository::InMemoryUserRepository;

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::domain::auth::errors::RepositoryError;

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
  mutex
    .lock()
    .map_err(|e| RepositoryError::DatabaseError(format!("mutex poisoned: {}", e)))
}

/// Newest first; equal timestamps keep reverse insertion order
fn newest_first<T: Clone>(
  records: impl DoubleEndedIterator<Item = T>,
  timestamp: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<T> {
  let mut out: Vec<T> = records.rev().collect();
  out.sort_by(|a, b| timestamp(b).cmp(&timestamp(a)));
  out
}
