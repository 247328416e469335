use std::sync::Arc;

use crate::application::job::parse_job_id;
use crate::domain::auth::entities::User;
use crate::domain::job::{JobApplication, JobApplicationService, JobError};

#[derive(Debug, Clone)]
pub struct ListJobApplicationsCommand {
  pub caller: User,
  pub job_id: String,
}

pub struct ListJobApplicationsUseCase {
  application_service: Arc<JobApplicationService>,
}

impl ListJobApplicationsUseCase {
  pub fn new(application_service: Arc<JobApplicationService>) -> Self {
    Self {
      application_service,
    }
  }

  pub async fn execute(
    &self,
    command: ListJobApplicationsCommand,
  ) -> Result<Vec<JobApplication>, JobError> {
    let job_id = parse_job_id(&command.job_id)?;
    self
      .application_service
      .list_job_applications(&command.caller, job_id)
      .await
  }
}
