use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{lock, newest_first};
use crate::domain::job::{
  entities::JobApplication, errors::JobError, ports::JobApplicationRepository,
  value_objects::ApplicationStatus,
};

#[derive(Default)]
pub struct InMemoryJobApplicationRepository {
  applications: Mutex<Vec<JobApplication>>,
}

impl InMemoryJobApplicationRepository {
  pub fn new() -> Self {
    Self::default()
  }

  fn select(
    &self,
    predicate: impl Fn(&JobApplication) -> bool,
  ) -> Result<Vec<JobApplication>, JobError> {
    let applications = lock(&self.applications)?;
    Ok(newest_first(
      applications.iter().filter(|&a| predicate(a)).cloned(),
      |a| a.applied_at,
    ))
  }
}

#[async_trait]
impl JobApplicationRepository for InMemoryJobApplicationRepository {
  async fn create(&self, application: JobApplication) -> Result<JobApplication, JobError> {
    lock(&self.applications)?.push(application.clone());
    Ok(application)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<JobApplication>, JobError> {
    Ok(
      lock(&self.applications)?
        .iter()
        .find(|a| a.id == id)
        .cloned(),
    )
  }

  async fn find_by_job_and_applicant(
    &self,
    job_id: Uuid,
    applicant_id: Uuid,
  ) -> Result<Option<JobApplication>, JobError> {
    Ok(
      lock(&self.applications)?
        .iter()
        .find(|a| a.job_id == job_id && a.applicant_id == applicant_id)
        .cloned(),
    )
  }

  async fn find_by_applicant_id(
    &self,
    applicant_id: Uuid,
  ) -> Result<Vec<JobApplication>, JobError> {
    self.select(|a| a.applicant_id == applicant_id)
  }

  async fn find_by_job_id(&self, job_id: Uuid) -> Result<Vec<JobApplication>, JobError> {
    self.select(|a| a.job_id == job_id)
  }

  async fn update_status(&self, id: Uuid, status: ApplicationStatus) -> Result<(), JobError> {
    let mut applications = lock(&self.applications)?;
    let application = applications
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or(JobError::ApplicationNotFound)?;
    application.status = status;
    Ok(())
  }

  async fn delete_by_job_id(&self, job_id: Uuid) -> Result<u64, JobError> {
    let mut applications = lock(&self.applications)?;
    let before = applications.len();
    applications.retain(|a| a.job_id != job_id);
    Ok((before - applications.len()) as u64)
  }
}
