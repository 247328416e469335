use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::User;
use crate::domain::job::{JobError, JobFields, JobService};

#[derive(Debug, Clone)]
pub struct CreateJobCommand {
  pub caller: User,
  pub fields: JobFields,
}

#[derive(Debug, Clone)]
pub struct CreateJobResponse {
  pub job_id: Uuid,
}

pub struct CreateJobUseCase {
  job_service: Arc<JobService>,
}

impl CreateJobUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(&self, command: CreateJobCommand) -> Result<CreateJobResponse, JobError> {
    let job = self
      .job_service
      .create_job(&command.caller, command.fields)
      .await?;

    Ok(CreateJobResponse { job_id: job.id })
  }
}
