use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{lock, newest_first};
use crate::domain::job::{
  entities::{Job, JobFilter},
  errors::JobError,
  ports::JobRepository,
};

#[derive(Default)]
pub struct InMemoryJobRepository {
  jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
  async fn create(&self, job: Job) -> Result<Job, JobError> {
    lock(&self.jobs)?.push(job.clone());
    Ok(job)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobError> {
    Ok(lock(&self.jobs)?.iter().find(|j| j.id == id).cloned())
  }

  async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, JobError> {
    let jobs = lock(&self.jobs)?;
    Ok(newest_first(
      jobs.iter().filter(|j| filter.matches(j)).cloned(),
      |j| j.created_at,
    ))
  }

  async fn find_by_employer_id(&self, employer_id: Uuid) -> Result<Vec<Job>, JobError> {
    let jobs = lock(&self.jobs)?;
    Ok(newest_first(
      jobs.iter().filter(|j| j.employer_id == employer_id).cloned(),
      |j| j.created_at,
    ))
  }

  async fn update(&self, job: Job) -> Result<Job, JobError> {
    let mut jobs = lock(&self.jobs)?;
    let slot = jobs
      .iter_mut()
      .find(|j| j.id == job.id)
      .ok_or(JobError::JobNotFound)?;

    // Ownership, company and the counter are never rewritten by an edit
    slot.title = job.title;
    slot.description = job.description;
    slot.requirements = job.requirements;
    slot.location = job.location;
    slot.salary_min = job.salary_min;
    slot.salary_max = job.salary_max;
    slot.job_type = job.job_type;
    slot.deadline = job.deadline;
    Ok(slot.clone())
  }

  async fn delete(&self, id: Uuid) -> Result<(), JobError> {
    let mut jobs = lock(&self.jobs)?;
    let before = jobs.len();
    jobs.retain(|j| j.id != id);
    if jobs.len() == before {
      return Err(JobError::JobNotFound);
    }
    Ok(())
  }

  async fn increment_applications_count(&self, id: Uuid) -> Result<(), JobError> {
    let mut jobs = lock(&self.jobs)?;
    let job = jobs
      .iter_mut()
      .find(|j| j.id == id)
      .ok_or(JobError::JobNotFound)?;
    job.applications_count += 1;
    Ok(())
  }
}
