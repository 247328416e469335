use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::job::{Job, JobError, JobFilter, JobRepository};

pub struct PostgresJobRepository {
  pool: PgPool,
}

impl PostgresJobRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[derive(Debug, FromRow)]
struct JobRow {
  id: Uuid,
  title: String,
  description: String,
  requirements: String,
  location: String,
  salary_min: f64,
  salary_max: f64,
  job_type: String,
  deadline: String,
  employer_id: Uuid,
  company_name: String,
  applications_count: i64,
  created_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
  fn from(row: JobRow) -> Self {
    Job {
      id: row.id,
      title: row.title,
      description: row.description,
      requirements: row.requirements,
      location: row.location,
      salary_min: row.salary_min,
      salary_max: row.salary_max,
      job_type: row.job_type,
      deadline: row.deadline,
      employer_id: row.employer_id,
      company_name: row.company_name,
      applications_count: row.applications_count,
      created_at: row.created_at,
    }
  }
}

const JOB_COLUMNS: &str = "id, title, description, requirements, location, salary_min, \
   salary_max, job_type, deadline, employer_id, company_name, applications_count, created_at";

#[async_trait]
impl JobRepository for PostgresJobRepository {
  async fn create(&self, job: Job) -> Result<Job, JobError> {
    let row = sqlx::query_as::<_, JobRow>(&format!(
      r#"
      INSERT INTO jobs ({JOB_COLUMNS})
      VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
      RETURNING {JOB_COLUMNS}
      "#
    ))
    .bind(job.id)
    .bind(&job.title)
    .bind(&job.description)
    .bind(&job.requirements)
    .bind(&job.location)
    .bind(job.salary_min)
    .bind(job.salary_max)
    .bind(&job.job_type)
    .bind(&job.deadline)
    .bind(job.employer_id)
    .bind(&job.company_name)
    .bind(job.applications_count)
    .bind(job.created_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, JobError> {
    let row = sqlx::query_as::<_, JobRow>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;

    Ok(row.map(Into::into))
  }

  async fn list(&self, filter: &JobFilter) -> Result<Vec<Job>, JobError> {
    // position() keeps the search literal; LIKE would treat % and _ as wildcards
    let rows = sqlx::query_as::<_, JobRow>(&format!(
      r#"
      SELECT {JOB_COLUMNS}
      FROM jobs
      WHERE ($1::TEXT IS NULL
             OR position(lower($1::TEXT) IN lower(title)) > 0
             OR position(lower($1::TEXT) IN lower(description)) > 0)
        AND ($2::TEXT IS NULL OR position(lower($2::TEXT) IN lower(location)) > 0)
        AND ($3::TEXT IS NULL OR job_type = $3::TEXT)
      ORDER BY created_at DESC
      "#
    ))
    .bind(&filter.search)
    .bind(&filter.location)
    .bind(&filter.job_type)
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
  }

  async fn find_by_employer_id(&self, employer_id: Uuid) -> Result<Vec<Job>, JobError> {
    let rows = sqlx::query_as::<_, JobRow>(&format!(
      "SELECT {JOB_COLUMNS} FROM jobs WHERE employer_id = $1 ORDER BY created_at DESC"
    ))
    .bind(employer_id)
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
  }

  async fn update(&self, job: Job) -> Result<Job, JobError> {
    let row = sqlx::query_as::<_, JobRow>(&format!(
      r#"
      UPDATE jobs
      SET
        title = $2,
        description = $3,
        requirements = $4,
        location = $5,
        salary_min = $6,
        salary_max = $7,
        job_type = $8,
        deadline = $9
      WHERE id = $1
      RETURNING {JOB_COLUMNS}
      "#
    ))
    .bind(job.id)
    .bind(&job.title)
    .bind(&job.description)
    .bind(&job.requirements)
    .bind(&job.location)
    .bind(job.salary_min)
    .bind(job.salary_max)
    .bind(&job.job_type)
    .bind(&job.deadline)
    .fetch_optional(&self.pool)
    .await?;

    row.map(Into::into).ok_or(JobError::JobNotFound)
  }

  async fn delete(&self, id: Uuid) -> Result<(), JobError> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      return Err(JobError::JobNotFound);
    }
    Ok(())
  }

  async fn increment_applications_count(&self, id: Uuid) -> Result<(), JobError> {
    let result =
      sqlx::query("UPDATE jobs SET applications_count = applications_count + 1 WHERE id = $1")
        .bind(id)
        .execute(&self.pool)
        .await?;

    if result.rows_affected() == 0 {
      return Err(JobError::JobNotFound);
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::UserRepository;
  use crate::domain::auth::value_objects::UserRole;
  use crate::domain::job::services::tests::fields;
  use crate::infrastructure::persistence::postgres::PostgresUserRepository;
  use crate::infrastructure::persistence::postgres::user_repository::tests::{
    setup_test_db, user,
  };

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_filters_and_ordering() {
    let (pool, _container) = setup_test_db().await;
    let users = PostgresUserRepository::new(pool.clone());
    let repo = PostgresJobRepository::new(pool);

    let boss = users
      .create(user("boss@example.com", UserRole::Employer))
      .await
      .unwrap();

    let mut backend = Job::create(&boss, fields("Backend 100% Rust", "Remote", "full-time")).unwrap();
    backend.created_at = Utc::now() - chrono::Duration::hours(1);
    let backend = repo.create(backend).await.unwrap();
    let sales = repo
      .create(Job::create(&boss, fields("Sales Rep", "NYC", "full-time")).unwrap())
      .await
      .unwrap();

    let all = repo.list(&JobFilter::default()).await.unwrap();
    let ids: Vec<Uuid> = all.iter().map(|j| j.id).collect();
    assert_eq!(ids, vec![sales.id, backend.id]);

    let literal = repo
      .list(&JobFilter {
        search: Some("100%".to_string()),
        ..Default::default()
      })
      .await
      .unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].id, backend.id);

    let wildcard = repo
      .list(&JobFilter {
        search: Some("_".to_string()),
        ..Default::default()
      })
      .await
      .unwrap();
    assert!(wildcard.is_empty());

    let nyc = repo
      .list(&JobFilter {
        location: Some("nyc".to_string()),
        job_type: Some("full-time".to_string()),
        ..Default::default()
      })
      .await
      .unwrap();
    assert_eq!(nyc.len(), 1);
    assert_eq!(nyc[0].id, sales.id);
  }

  #[tokio::test]
  #[ignore = "requires docker"]
  async fn test_update_delete_and_counter() {
    let (pool, _container) = setup_test_db().await;
    let users = PostgresUserRepository::new(pool.clone());
    let repo = PostgresJobRepository::new(pool);

    let boss = users
      .create(user("boss@example.com", UserRole::Employer))
      .await
      .unwrap();
    let mut job = repo
      .create(Job::create(&boss, fields("Engineer", "Remote", "full-time")).unwrap())
      .await
      .unwrap();

    repo.increment_applications_count(job.id).await.unwrap();
    repo.increment_applications_count(job.id).await.unwrap();

    job.title = "Staff Engineer".to_string();
    let updated = repo.update(job.clone()).await.unwrap();
    assert_eq!(updated.title, "Staff Engineer");
    assert_eq!(updated.applications_count, 2);

    assert_eq!(repo.find_by_employer_id(boss.id).await.unwrap().len(), 1);

    repo.delete(job.id).await.unwrap();
    assert!(repo.find_by_id(job.id).await.unwrap().is_none());
    assert!(matches!(repo.delete(job.id).await, Err(JobError::JobNotFound)));
    assert!(matches!(repo.update(job).await, Err(JobError::JobNotFound)));
  }
}
