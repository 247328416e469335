use std::sync::Arc;

use super::parse_job_id;
use crate::domain::auth::entities::User;
use crate::domain::job::{Job, JobError, JobFields, JobService};

#[derive(Debug, Clone)]
pub struct UpdateJobCommand {
  pub caller: User,
  pub job_id: String,
  /// Only the fields present are written
  pub fields: JobFields,
}

pub struct UpdateJobUseCase {
  job_service: Arc<JobService>,
}

impl UpdateJobUseCase {
  pub fn new(job_service: Arc<JobService>) -> Self {
    Self { job_service }
  }

  pub async fn execute(&self, command: UpdateJobCommand) -> Result<Job, JobError> {
    let job_id = parse_job_id(&command.job_id)?;
    self
      .job_service
      .update_job(&command.caller, job_id, command.fields)
      .await
  }
}
