use std::sync::Arc;

use super::list_jobs::ListJobsResponse;
use crate::domain::auth::entities::User;
use crate::domain::job::{JobError, JobService};

/// The caller's own postings
pub struct ListEmployerJobsUseCase {
  job_service: Arc<JobService>,
}

impl ListEmployerJobsUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(&self, caller: &User) -> Result<ListJobsResponse, JobError> {
    let jobs = self.job_service.list_employer_jobs(caller).await?;
    Ok(ListJobsResponse { jobs })
  }
}
