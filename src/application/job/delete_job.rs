use std::sync::Arc;
use uuid::Uuid;

use super::parse_job_id;
use crate::domain::auth::entities::User;
use crate::domain::job::{JobError, JobService};

#[derive(Debug, Clone)]
pub struct DeleteJobCommand {
  pub caller: User,
  pub job_id: String,
}

#[derive(Debug, Clone)]
pub struct DeleteJobResponse {
  pub job_id: Uuid,
  pub applications_removed: u64,
}

/// Deletes a job and, as a second write, all of its applications
pub struct DeleteJobUseCase {
  job_service: Arc<JobService>,
}

impl DeleteJobUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(&self, command: DeleteJobCommand) -> Result<DeleteJobResponse, JobError> {
    let job_id = parse_job_id(&command.job_id)?;
    let applications_removed = self.job_service.delete_job(&command.caller, job_id).await?;

    Ok(DeleteJobResponse {
      job_id,
      applications_removed,
    })
  }
}
