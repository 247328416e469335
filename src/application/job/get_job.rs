use std::sync::Arc;

use super::parse_job_id;
use crate::domain::job::{Job, JobError, JobService};

/// Public lookup of a single job
pub struct GetJobUseCase {
  job_service: Arc<JobService>,
}

impl GetJobUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(&self, job_id: &str) -> Result<Job, JobError> {
    let job_id = parse_job_id(job_id)?;
    self.job_service.get_job(job_id).await
  }
}
