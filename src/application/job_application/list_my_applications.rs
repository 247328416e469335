use std::sync::Arc;

use crate::domain::auth::entities::User;
use crate::domain::job::{ApplicationWithJob, JobApplicationService, JobError};

/// The caller's applications with their jobs' current title and company
pub struct ListMyApplicationsUseCase {
  application_service: Arc<JobApplicationService>,
}

impl ListMyApplicationsUseCase {
  pub fn new(application_service: Arc<JobApplicationService>) -> Self {
    Self {
      application_service,
    }
  }

  pub async fn execute(&self, caller: &User) -> Result<Vec<ApplicationWithJob>, JobError> {
    self.application_service.list_my_applications(caller).await
  }
}
