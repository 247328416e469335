use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::User;
use crate::domain::job::{ApplicationStatus, JobApplication, JobApplicationService, JobError};

#[derive(Debug, Clone)]
pub struct UpdateApplicationStatusCommand {
  pub caller: User,
  pub application_id: String,
  pub status: String,
}

pub struct UpdateApplicationStatusUseCase {
  application_service: Arc<JobApplicationService>,
}

impl UpdateApplicationStatusUseCase {
  pub fn new(application_service: Arc<JobApplicationService>) -> Self {
    Self {
      application_service,
    }
  }

  /// Validates the status before touching storage, so a bad status is
  /// reported even for an unknown application.
  pub async fn execute(
    &self,
    command: UpdateApplicationStatusCommand,
  ) -> Result<JobApplication, JobError> {
    let status: ApplicationStatus = command.status.parse()?;
    let application_id =
      Uuid::parse_str(&command.application_id).map_err(|_| JobError::ApplicationNotFound)?;

    self
      .application_service
      .update_status(&command.caller, application_id, status)
      .await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::value_objects::UserRole;
  use crate::domain::job::services::tests::user;
  use crate::infrastructure::persistence::memory::{
    InMemoryJobApplicationRepository, InMemoryJobRepository,
  };

  fn use_case() -> UpdateApplicationStatusUseCase {
    UpdateApplicationStatusUseCase::new(Arc::new(JobApplicationService::new(
      Arc::new(InMemoryJobRepository::new()),
      Arc::new(InMemoryJobApplicationRepository::new()),
    )))
  }

  #[tokio::test]
  async fn test_status_checked_before_lookup() {
    let result = use_case()
      .execute(UpdateApplicationStatusCommand {
        caller: user(UserRole::Employer, "Boss"),
        application_id: "missing".to_string(),
        status: "hired".to_string(),
      })
      .await;
    assert!(matches!(result, Err(JobError::Validation(_))));
  }

  #[tokio::test]
  async fn test_malformed_id_is_not_found() {
    let result = use_case()
      .execute(UpdateApplicationStatusCommand {
        caller: user(UserRole::Employer, "Boss"),
        application_id: "missing".to_string(),
        status: "accepted".to_string(),
      })
      .await;
    assert!(matches!(result, Err(JobError::ApplicationNotFound)));
  }
}
