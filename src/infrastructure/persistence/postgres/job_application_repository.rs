use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::auth::errors::RepositoryError;
use crate::domain::job::{ApplicationStatus, JobApplication, JobApplicationRepository, JobError};

pub struct PostgresJobApplicationRepository {
  pool: PgPool,
}

impl PostgresJobApplicationRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  async fn fetch_where(
    &self,
    condition: &str,
    id: Uuid,
  ) -> Result<Vec<JobApplication>, JobError> {
    let rows = sqlx::query_as::<_, ApplicationRow>(&format!(
      "SELECT {APPLICATION_COLUMNS} FROM applications WHERE {condition} ORDER BY applied_at DESC"
    ))
    .bind(id)
    .fetch_all(&self.pool)
    .await?;

    rows.into_iter().map(JobApplication::try_from).collect()
  }
}

#[derive(Debug, FromRow)]
struct ApplicationRow {
  id: Uuid,
  job_id: Uuid,
  applicant_id: Uuid,
  applicant_name: String,
  applicant_email: String,
  resume_url: String,
  cover_letter: String,
  status: String,
  employer_id: Uuid,
  applied_at: DateTime<Utc>,
}

impl TryFrom<ApplicationRow> for JobApplication {
  type Error = JobError;

  fn try_from(row: ApplicationRow) -> Result<Self, Self::Error> {
    let status: ApplicationStatus = row.status.parse().map_err(|_| {
      RepositoryError::CorruptRecord(format!("applications.status = {}", row.status))
    })?;

    Ok(JobApplication {
      id: row.id,
      job_id: row.job_id,
      applicant_id: row.applicant_id,
      applicant_name: row.applicant_name,
      applicant_email: row.applicant_email,
      resume_url: row.resume_url,
      cover_letter: row.cover_letter,
      status,
      employer_id: row.employer_id,
      applied_at: row.applied_at,
    })
  }
}

const APPLICATION_COLUMNS: &str = "id, job_id, applicant_id, applicant_name, applicant_email, \
   resume_url, cover_letter, status, employer_id, applied_at";

#[async_trait]
impl JobApplicationRepository for PostgresJobApplicationRepository {
  async fn create(&self, application: JobApplication) -> Result<JobApplication, JobError> {
    let row = sqlx::query_as::<_, ApplicationRow>(&format!(
      r#"
      INSERT INTO applications ({APPLICATION_COLUMNS})
      VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
      RETURNING {APPLICATION_COLUMNS}
      "#
    ))
    .bind(application.id)
    .bind(application.job_id)
    .bind(application.applicant_id)
    .bind(&application.applicant_name)
    .bind(&application.applicant_email)
    .bind(&application.resume_url)
    .bind(&application.cover_letter)
    .bind(application.status.as_str())
    .bind(application.employer_id)
    .bind(application.applied_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<JobApplication>, JobError> {
    let row = sqlx::query_as::<_, ApplicationRow>(&format!(
      "SELECT {APPLICATION_COLUMNS} FROM applications WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(JobApplication::try_from).transpose()
  }

  async fn find_by_job_and_applicant(
    &self,
    job_id: Uuid,
    applicant_id: Uuid,
  ) -> Result<Option<JobApplication>, JobError> {
    let row = sqlx::query_as::<_, ApplicationRow>(&format!(
      "SELECT {APPLICATION_COLUMNS} FROM applications WHERE job_id = $1 AND applicant_id = $2 LIMIT 1"
    ))
    .bind(job_id)
    .bind(applicant_id)
    .fetch_optional(&self.pool)
    .await?;

    row.map(JobApplication::try_from).transpose()
  }

  async fn find_by_applicant_id(
    &self,
    applicant_id: Uuid,
  ) -> Result<Vec<JobApplication>, JobError> {
    self.fetch_where("applicant_id = $1", applicant_id).await
  }

  async fn find_by_job_id(&self, job_id: Uuid) -> Result<Vec<JobApplication>, JobError> {
    self.fetch_where("job_id = $1", job_id).await
  }

  async fn update_status(&self, id: Uuid, status: ApplicationStatus) -> Result<(), JobError> {
    let result = sqlx::query("UPDATE applications SET status = $2 WHERE id = $1")
      .bind(id)
      .bind(status.as_str())
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      return Err(JobError::ApplicationNotFound);
    }
    Ok(())
  }

  async fn delete_by_job_id(&self, job_id: Uuid) -> Result<u64, JobError> {
    let result = sqlx::query("DELETE FROM applications WHERE job_id = $1")
      .bind(job_id)
      .execute(&self.pool)
      .await?;

    Ok(result.rows_affected())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::UserRepository;
  use crate::domain::auth::value_objects::UserRole;
  use crate::domain::job::services::tests::fields;
  use crate::domain::job::{Job, JobRepository};
  use crate::infrastructure::persistence::postgres::user_repository::tests::{
    setup_test_db, user,
  };
  use crate::infrastructure::persistence::postgres::{
    PostgresJobRepository, PostgresUserRepository,
  };

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_application_lifecycle() {
    let (pool, _container) = setup_test_db().await;
    let users = PostgresUserRepository::new(pool.clone());
    let jobs = PostgresJobRepository::new(pool.clone());
    let repo = PostgresJobApplicationRepository::new(pool);

    let boss = users
      .create(user("boss@example.com", UserRole::Employer))
      .await
      .unwrap();
    let ann = users
      .create(user("ann@example.com", UserRole::Applicant))
      .await
      .unwrap();
    let job = jobs
      .create(Job::create(&boss, fields("Engineer", "Remote", "full-time")).unwrap())
      .await
      .unwrap();

    let created = repo
      .create(JobApplication::submit(&job, &ann, "https://cv".to_string(), None))
      .await
      .unwrap();
    assert_eq!(created.status, ApplicationStatus::Pending);

    let found = repo
      .find_by_job_and_applicant(job.id, ann.id)
      .await
      .unwrap()
      .unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(repo.find_by_applicant_id(ann.id).await.unwrap().len(), 1);

    repo
      .update_status(created.id, ApplicationStatus::Accepted)
      .await
      .unwrap();
    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ApplicationStatus::Accepted);

    assert!(matches!(
      repo
        .update_status(Uuid::new_v4(), ApplicationStatus::Rejected)
        .await,
      Err(JobError::ApplicationNotFound)
    ));

    assert_eq!(repo.delete_by_job_id(job.id).await.unwrap(), 1);
    assert!(repo.find_by_job_id(job.id).await.unwrap().is_empty());
  }
}
