use thiserror::Error;

use crate::domain::auth::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum JobError {
  #[error("Validation error: {0}")]
  Validation(String),

  #[error("Job not found")]
  JobNotFound,

  #[error("Application not found")]
  ApplicationNotFound,

  #[error("Permission denied: {0}")]
  PermissionDenied(String),

  #[error("Already applied to this job")]
  AlreadyApplied,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for JobError {
  fn from(error: sqlx::Error) -> Self {
    JobError::Repository(RepositoryError::from(error))
  }
}
