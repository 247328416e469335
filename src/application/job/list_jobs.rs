use std::sync::Arc;

use crate::domain::job::{Job, JobError, JobFilter, JobService};

/// Public listing filters; empty values are ignored
#[derive(Debug, Clone, Default)]
pub struct ListJobsCommand {
  pub search: Option<String>,
  pub location: Option<String>,
  pub job_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ListJobsResponse {
  /// Newest first
  pub jobs: Vec<Job>,
}

pub struct ListJobsUseCase {
  job_service: Arc<JobService>,
}

impl ListJobsUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(&self, command: ListJobsCommand) -> Result<ListJobsResponse, JobError> {
    let jobs = self
      .job_service
      .list_jobs(JobFilter {
        search: command.search,
        location: command.location,
        job_type: command.job_type,
      })
      .await?;

    Ok(ListJobsResponse { jobs })
  }
}
