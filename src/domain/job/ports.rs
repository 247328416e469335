use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Job, JobApplication, JobFilter};
use super::errors::JobError;
use super::value_objects::ApplicationStatus;

/// Job persistence. Every listing is ordered newest first.
#[async_trait]
pub trait JobRepository: Send + Sync {
  async fn create(&self, job: Job) -> Result<Job, JobError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobError>;
  async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, JobError>;
  async fn find_by_employer_id(&self, employer_id: Uuid) -> Result<Vec<Job>, JobError>;
  async fn update(&self, job: Job) -> Result<Job, JobError>;
  async fn delete(&self, id: Uuid) -> Result<(), JobError>;

  /// Bumps the denormalized application counter by one
  async fn increment_applications_count(&self, id: Uuid) -> Result<(), JobError>;
}

/// Application persistence. Every listing is ordered by `applied_at`, newest first.
#[async_trait]
pub trait JobApplicationRepository: Send + Sync {
  async fn create(&self, application: JobApplication) -> Result<JobApplication, JobError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<JobApplication>, JobError>;
  async fn find_by_job_and_applicant(
    &self,
    job_id: Uuid,
    applicant_id: Uuid,
  ) -> Result<Option<JobApplication>, JobError>;
  async fn find_by_applicant_id(&self, applicant_id: Uuid)
  -> Result<Vec<JobApplication>, JobError>;
  async fn find_by_job_id(&self, job_id: Uuid) -> Result<Vec<JobApplication>, JobError>;
  async fn update_status(&self, id: Uuid, status: ApplicationStatus) -> Result<(), JobError>;

  /// Removes every application for the job, returning how many were deleted
  async fn delete_by_job_id(&self, job_id: Uuid) -> Result<u64, JobError>;
}
