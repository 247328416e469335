use std::sync::Arc;
use uuid::Uuid;

use crate::application::job::parse_job_id;
use crate::domain::auth::entities::User;
use crate::domain::job::{JobApplicationService, JobError};

#[derive(Debug, Clone)]
pub struct ApplyForJobCommand {
  pub caller: User,
  pub job_id: String,
  pub resume_url: String,
  pub cover_letter: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApplyForJobResponse {
  pub application_id: Uuid,
}

pub struct ApplyForJobUseCase {
  application_service: Arc<JobApplicationService>,
}

impl ApplyForJobUseCase {
  pub fn new(application_service: Arc<JobApplicationService>) -> Self {
    Self {
      application_service,
    }
  }

  pub async fn execute(
    &self,
    command: ApplyForJobCommand,
  ) -> Result<ApplyForJobResponse, JobError> {
    let job_id = parse_job_id(&command.job_id)?;
    let application = self
      .application_service
      .apply(
        &command.caller,
        job_id,
        command.resume_url,
        command.cover_letter,
      )
      .await?;

    Ok(ApplyForJobResponse {
      application_id: application.id,
    })
  }
}
