//! Job posting use cases

mod create_job;
mod delete_job;
mod get_job;
mod list_employer_jobs;
mod list_jobs;
mod update_job;

pub use create_job::{CreateJobCommand, CreateJobResponse, CreateJobUseCase};
pub use delete_job::{DeleteJobCommand, DeleteJobResponse, DeleteJobUseCase};
pub use get_job::GetJobUseCase;
pub use list_employer_jobs::ListEmployerJobsUseCase;
pub use list_jobs::{ListJobsCommand, ListJobsResponse, ListJobsUseCase};
pub use update_job::{UpdateJobCommand, UpdateJobUseCase};

use uuid::Uuid;

use crate::domain::job::JobError;

/// Parses a client-supplied job id. A malformed id names no job, so it is
/// reported the same way as an unknown one.
pub(crate) fn parse_job_id(raw: &str) -> Result<Uuid, JobError> {
  Uuid::parse_str(raw).map_err(|_| JobError::JobNotFound)
}
