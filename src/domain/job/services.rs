use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::User;
use crate::domain::auth::value_objects::UserRole;

use super::entities::{Job, JobFields, JobFilter};
use super::errors::JobError;
use super::ports::{JobApplicationRepository, JobRepository};

/// Job postings: creation, public reads, and owner-only mutation
pub struct JobService {
  job_repo: Arc<dyn JobRepository>,
  application_repo: Arc<dyn JobApplicationRepository>,
}

impl JobService {
  pub fn new(
    job_repo: Arc<dyn JobRepository>,
    application_repo: Arc<dyn JobApplicationRepository>,
  ) -> Self {
    Self {
      job_repo,
      application_repo,
    }
  }

  /// Posts a new job owned by `caller`
  pub async fn create_job(&self, caller: &User, fields: JobFields) -> Result<Job, JobError> {
    if !caller.has_role(UserRole::Employer) {
      return Err(JobError::PermissionDenied(
        "Only employers can post jobs".to_string(),
      ));
    }

    let job = Job::create(caller, fields)?;
    let created = self.job_repo.create(job).await?;

    tracing::info!(job_id = %created.id, employer_id = %caller.id, "Job posted");

    Ok(created)
  }

  pub async fn get_job(&self, job_id: Uuid) -> Result<Job, JobError> {
    self
      .job_repo
      .find_by_id(job_id)
      .await?
      .ok_or(JobError::JobNotFound)
  }

  pub async fn list_jobs(&self, filter: JobFilter) -> Result<Vec<Job>, JobError> {
    self.job_repo.list(&filter.normalized()).await
  }

  pub async fn list_employer_jobs(&self, caller: &User) -> Result<Vec<Job>, JobError> {
    self.job_repo.find_by_employer_id(caller.id).await
  }

  /// Applies a partial update; only the owning employer may do this
  pub async fn update_job(
    &self,
    caller: &User,
    job_id: Uuid,
    fields: JobFields,
  ) -> Result<Job, JobError> {
    let mut job = self.load_owned_job(caller, job_id).await?;
    job.apply_update(fields)?;
    self.job_repo.update(job).await
  }

  /// Deletes the job, then every application to it.
  ///
  /// The two deletes are independent writes. If the second fails the job is
  /// already gone and its applications are orphaned.
  pub async fn delete_job(&self, caller: &User, job_id: Uuid) -> Result<u64, JobError> {
    let job = self.load_owned_job(caller, job_id).await?;

    self.job_repo.delete(job.id).await?;

    let removed = self
      .application_repo
      .delete_by_job_id(job.id)
      .await
      .inspect_err(|e| {
        tracing::error!(job_id = %job.id, error = %e, "Job deleted but its applications were not");
      })?;

    tracing::info!(job_id = %job.id, applications_removed = removed, "Job deleted");

    Ok(removed)
  }

  /// Loads a job and checks that `caller` owns it
  pub async fn load_owned_job(&self, caller: &User, job_id: Uuid) -> Result<Job, JobError> {
    let job = self.get_job(job_id).await?;

    if !job.is_owned_by(caller.id) {
      tracing::warn!(job_id = %job.id, caller_id = %caller.id, "Rejected access to job owned by another employer");
      return Err(JobError::PermissionDenied(
        "You do not own this job".to_string(),
      ));
    }

    Ok(job)
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;
  use crate::domain::auth::entities::UserProfile;
  use crate::domain::job::entities::JobApplication;
  use crate::domain::job::value_objects::SalaryInput;
  use crate::infrastructure::persistence::memory::{
    InMemoryJobApplicationRepository, InMemoryJobRepository,
  };

  pub(crate) fn user(role: UserRole, name: &str) -> User {
    User::new(
      format!("{}@example.com", name.to_lowercase()),
      "hash".to_string(),
      name.to_string(),
      role,
      UserProfile {
        company: Some(format!("{} Inc", name)),
        ..Default::default()
      },
    )
  }

  pub(crate) fn fields(title: &str, location: &str, job_type: &str) -> JobFields {
    JobFields {
      title: Some(title.to_string()),
      description: Some(format!("{} wanted", title)),
      requirements: Some("Rust".to_string()),
      location: Some(location.to_string()),
      salary_min: Some(SalaryInput::Number(1000.0)),
      salary_max: Some(SalaryInput::Number(2000.0)),
      job_type: Some(job_type.to_string()),
      deadline: Some("2026-12-31".to_string()),
    }
  }

  struct Fixture {
    service: JobService,
    jobs: Arc<InMemoryJobRepository>,
    applications: Arc<InMemoryJobApplicationRepository>,
  }

  fn fixture() -> Fixture {
    let jobs = Arc::new(InMemoryJobRepository::new());
    let applications = Arc::new(InMemoryJobApplicationRepository::new());
    Fixture {
      service: JobService::new(jobs.clone(), applications.clone()),
      jobs,
      applications,
    }
  }

  #[tokio::test]
  async fn test_create_requires_employer() {
    let f = fixture();
    let applicant = user(UserRole::Applicant, "Ann");

    let result = f
      .service
      .create_job(&applicant, fields("Engineer", "Remote", "full-time"))
      .await;

    assert!(matches!(result, Err(JobError::PermissionDenied(_))));
  }

  #[tokio::test]
  async fn test_get_unknown_job() {
    let f = fixture();
    let result = f.service.get_job(Uuid::new_v4()).await;
    assert!(matches!(result, Err(JobError::JobNotFound)));
  }

  #[tokio::test]
  async fn test_filter_composition_newest_first() {
    let f = fixture();
    let boss = user(UserRole::Employer, "Boss");

    let backend = f
      .service
      .create_job(&boss, fields("Backend Engineer", "Remote", "full-time"))
      .await
      .unwrap();
    let sales = f
      .service
      .create_job(&boss, fields("Sales Rep", "NYC", "full-time"))
      .await
      .unwrap();
    f.service
      .create_job(&boss, fields("Barista", "NYC", "part-time"))
      .await
      .unwrap();

    let search = f
      .service
      .list_jobs(JobFilter {
        search: Some("engineer".to_string()),
        ..Default::default()
      })
      .await
      .unwrap();
    assert_eq!(search.len(), 1);
    assert_eq!(search[0].id, backend.id);

    let remote = f
      .service
      .list_jobs(JobFilter {
        location: Some("remote".to_string()),
        ..Default::default()
      })
      .await
      .unwrap();
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].id, backend.id);

    let full_time = f
      .service
      .list_jobs(JobFilter {
        job_type: Some("full-time".to_string()),
        ..Default::default()
      })
      .await
      .unwrap();
    let ids: Vec<Uuid> = full_time.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![sales.id, backend.id]);

    let everything = f
      .service
      .list_jobs(JobFilter {
        search: Some(String::new()),
        ..Default::default()
      })
      .await
      .unwrap();
    assert_eq!(everything.len(), 3);
  }

  #[tokio::test]
  async fn test_update_requires_owner() {
    let f = fixture();
    let owner = user(UserRole::Employer, "Owner");
    let rival = user(UserRole::Employer, "Rival");
    let job = f
      .service
      .create_job(&owner, fields("Engineer", "Remote", "full-time"))
      .await
      .unwrap();

    let update = JobFields {
      title: Some("Hijacked".to_string()),
      ..Default::default()
    };
    let denied = f.service.update_job(&rival, job.id, update.clone()).await;
    assert!(matches!(denied, Err(JobError::PermissionDenied(_))));

    let updated = f.service.update_job(&owner, job.id, update).await.unwrap();
    assert_eq!(updated.title, "Hijacked");
    assert_eq!(f.service.get_job(job.id).await.unwrap().title, "Hijacked");
  }

  #[tokio::test]
  async fn test_update_unknown_job() {
    let f = fixture();
    let owner = user(UserRole::Employer, "Owner");
    let result = f
      .service
      .update_job(&owner, Uuid::new_v4(), JobFields::default())
      .await;
    assert!(matches!(result, Err(JobError::JobNotFound)));
  }

  #[tokio::test]
  async fn test_delete_cascades_to_applications() {
    let f = fixture();
    let owner = user(UserRole::Employer, "Owner");
    let job = f
      .service
      .create_job(&owner, fields("Engineer", "Remote", "full-time"))
      .await
      .unwrap();
    let other_job = f
      .service
      .create_job(&owner, fields("Designer", "Remote", "full-time"))
      .await
      .unwrap();

    for i in 0..3 {
      let applicant = user(UserRole::Applicant, &format!("Applicant{}", i));
      f.applications
        .create(JobApplication::submit(&job, &applicant, "cv".to_string(), None))
        .await
        .unwrap();
    }
    let survivor = user(UserRole::Applicant, "Survivor");
    f.applications
      .create(JobApplication::submit(&other_job, &survivor, "cv".to_string(), None))
      .await
      .unwrap();

    let rival = user(UserRole::Employer, "Rival");
    assert!(matches!(
      f.service.delete_job(&rival, job.id).await,
      Err(JobError::PermissionDenied(_))
    ));

    let removed = f.service.delete_job(&owner, job.id).await.unwrap();

    assert_eq!(removed, 3);
    assert!(f.jobs.find_by_id(job.id).await.unwrap().is_none());
    assert!(f.applications.find_by_job_id(job.id).await.unwrap().is_empty());
    assert_eq!(f.applications.find_by_job_id(other_job.id).await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_list_employer_jobs_only_returns_own() {
    let f = fixture();
    let owner = user(UserRole::Employer, "Owner");
    let rival = user(UserRole::Employer, "Rival");
    let first = f
      .service
      .create_job(&owner, fields("First", "Remote", "full-time"))
      .await
      .unwrap();
    f.service
      .create_job(&rival, fields("Theirs", "Remote", "full-time"))
      .await
      .unwrap();
    let second = f
      .service
      .create_job(&owner, fields("Second", "Remote", "full-time"))
      .await
      .unwrap();

    let mine = f.service.list_employer_jobs(&owner).await.unwrap();
    let ids: Vec<Uuid> = mine.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
  }
}
