use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::JobError;
use super::value_objects::{ApplicationStatus, SalaryInput};
use crate::domain::auth::entities::User;

/// Job posting owned by the employer who created it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
  pub id: Uuid,
  pub title: String,
  pub description: String,
  pub requirements: String,
  pub location: String,
  pub salary_min: f64,
  pub salary_max: f64,
  pub job_type: String,
  /// Free-form deadline as entered by the employer
  pub deadline: String,
  pub employer_id: Uuid,
  /// Employer's company at posting time; not re-synced afterwards
  pub company_name: String,
  pub applications_count: i64,
  pub created_at: DateTime<Utc>,
}

/// Job fields as submitted by a client, each optional.
///
/// Creation requires every field except `requirements`; updates apply
/// whichever fields are present.
#[derive(Debug, Clone, Default)]
pub struct JobFields {
  pub title: Option<String>,
  pub description: Option<String>,
  pub requirements: Option<String>,
  pub location: Option<String>,
  pub salary_min: Option<SalaryInput>,
  pub salary_max: Option<SalaryInput>,
  pub job_type: Option<String>,
  pub deadline: Option<String>,
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, JobError> {
  value.ok_or_else(|| JobError::Validation(format!("Missing required field: {}", field)))
}

impl Job {
  /// Builds a new posting for `employer`, validating the submitted fields
  pub fn create(employer: &User, fields: JobFields) -> Result<Self, JobError> {
    let title = require(fields.title, "title")?;
    let description = require(fields.description, "description")?;
    let location = require(fields.location, "location")?;
    let salary_min = require(fields.salary_min, "salary_min")?.to_amount("salary_min")?;
    let salary_max = require(fields.salary_max, "salary_max")?.to_amount("salary_max")?;
    let job_type = require(fields.job_type, "job_type")?;
    let deadline = require(fields.deadline, "deadline")?;

    Ok(Self {
      id: Uuid::new_v4(),
      title,
      description,
      requirements: fields.requirements.unwrap_or_default(),
      location,
      salary_min,
      salary_max,
      job_type,
      deadline,
      employer_id: employer.id,
      company_name: employer.company_name(),
      applications_count: 0,
      created_at: Utc::now(),
    })
  }

  pub fn is_owned_by(&self, user_id: Uuid) -> bool {
    self.employer_id == user_id
  }

  /// Applies the present fields. Nothing is written if any salary fails to parse.
  pub fn apply_update(&mut self, fields: JobFields) -> Result<(), JobError> {
    let salary_min = fields
      .salary_min
      .map(|s| s.to_amount("salary_min"))
      .transpose()?;
    let salary_max = fields
      .salary_max
      .map(|s| s.to_amount("salary_max"))
      .transpose()?;

    if let Some(title) = fields.title {
      self.title = title;
    }
    if let Some(description) = fields.description {
      self.description = description;
    }
    if let Some(requirements) = fields.requirements {
      self.requirements = requirements;
    }
    if let Some(location) = fields.location {
      self.location = location;
    }
    if let Some(amount) = salary_min {
      self.salary_min = amount;
    }
    if let Some(amount) = salary_max {
      self.salary_max = amount;
    }
    if let Some(job_type) = fields.job_type {
      self.job_type = job_type;
    }
    if let Some(deadline) = fields.deadline {
      self.deadline = deadline;
    }

    Ok(())
  }
}

/// Filters for the public job listing. Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
  /// Case-insensitive substring of title or description
  pub search: Option<String>,
  /// Case-insensitive substring of location
  pub location: Option<String>,
  /// Exact match
  pub job_type: Option<String>,
}

impl JobFilter {
  /// Drops empty filter values
  pub fn normalized(self) -> Self {
    fn keep(value: Option<String>) -> Option<String> {
      value.filter(|v| !v.is_empty())
    }
    Self {
      search: keep(self.search),
      location: keep(self.location),
      job_type: keep(self.job_type),
    }
  }

  pub fn matches(&self, job: &Job) -> bool {
    fn contains_ci(haystack: &str, needle: &str) -> bool {
      haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    let search_ok = self.search.as_deref().is_none_or(|s| {
      contains_ci(&job.title, s) || contains_ci(&job.description, s)
    });
    let location_ok = self
      .location
      .as_deref()
      .is_none_or(|l| contains_ci(&job.location, l));
    let type_ok = self.job_type.as_deref().is_none_or(|t| job.job_type == t);

    search_ok && location_ok && type_ok
  }
}

/// An applicant's application to a job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
  pub id: Uuid,
  pub job_id: Uuid,
  pub applicant_id: Uuid,
  /// Applicant name at apply time
  pub applicant_name: String,
  /// Applicant email at apply time
  pub applicant_email: String,
  pub resume_url: String,
  pub cover_letter: String,
  pub status: ApplicationStatus,
  /// Copied from the job so status checks need not load it
  pub employer_id: Uuid,
  pub applied_at: DateTime<Utc>,
}

impl JobApplication {
  /// New pending application by `applicant` to `job`
  pub fn submit(
    job: &Job,
    applicant: &User,
    resume_url: String,
    cover_letter: Option<String>,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      job_id: job.id,
      applicant_id: applicant.id,
      applicant_name: applicant.name.clone(),
      applicant_email: applicant.email.clone(),
      resume_url,
      cover_letter: cover_letter.unwrap_or_default(),
      status: ApplicationStatus::Pending,
      employer_id: job.employer_id,
      applied_at: Utc::now(),
    }
  }
}

/// Application annotated with its job's current title and company
#[derive(Debug, Clone)]
pub struct ApplicationWithJob {
  pub application: JobApplication,
  pub job_title: Option<String>,
  pub company_name: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::UserProfile;
  use crate::domain::auth::value_objects::UserRole;

  fn employer() -> User {
    User::new(
      "hr@acme.test".to_string(),
      "hash".to_string(),
      "HR".to_string(),
      UserRole::Employer,
      UserProfile {
        company: Some("Acme".to_string()),
        ..Default::default()
      },
    )
  }

  fn complete_fields() -> JobFields {
    JobFields {
      title: Some("Backend Engineer".to_string()),
      description: Some("Build APIs".to_string()),
      requirements: None,
      location: Some("Remote".to_string()),
      salary_min: Some(SalaryInput::Text("90000".to_string())),
      salary_max: Some(SalaryInput::Number(120000.0)),
      job_type: Some("full-time".to_string()),
      deadline: Some("2026-12-31".to_string()),
    }
  }

  #[test]
  fn test_create_stamps_ownership_and_defaults() {
    let employer = employer();
    let job = Job::create(&employer, complete_fields()).unwrap();

    assert_eq!(job.employer_id, employer.id);
    assert_eq!(job.company_name, "Acme");
    assert_eq!(job.applications_count, 0);
    assert_eq!(job.requirements, "");
    assert_eq!(job.salary_min, 90000.0);
    assert!(job.is_owned_by(employer.id));
    assert!(!job.is_owned_by(Uuid::new_v4()));
  }

  #[test]
  fn test_create_reports_each_missing_field() {
    for field in [
      "title",
      "description",
      "location",
      "salary_min",
      "salary_max",
      "job_type",
      "deadline",
    ] {
      let mut fields = complete_fields();
      match field {
        "title" => fields.title = None,
        "description" => fields.description = None,
        "location" => fields.location = None,
        "salary_min" => fields.salary_min = None,
        "salary_max" => fields.salary_max = None,
        "job_type" => fields.job_type = None,
        _ => fields.deadline = None,
      }

      let err = Job::create(&employer(), fields).unwrap_err();
      assert!(
        matches!(&err, JobError::Validation(msg) if msg.contains(field)),
        "expected validation error for {}, got {:?}",
        field,
        err
      );
    }
  }

  #[test]
  fn test_salary_min_above_max_is_accepted() {
    let mut fields = complete_fields();
    fields.salary_min = Some(SalaryInput::Number(200000.0));
    assert!(Job::create(&employer(), fields).is_ok());
  }

  #[test]
  fn test_apply_update_is_partial() {
    let mut job = Job::create(&employer(), complete_fields()).unwrap();

    job
      .apply_update(JobFields {
        title: Some("Senior Backend Engineer".to_string()),
        salary_max: Some(SalaryInput::Text("150000".to_string())),
        ..Default::default()
      })
      .unwrap();

    assert_eq!(job.title, "Senior Backend Engineer");
    assert_eq!(job.salary_max, 150000.0);
    assert_eq!(job.description, "Build APIs");
    assert_eq!(job.company_name, "Acme");
  }

  #[test]
  fn test_apply_update_with_bad_salary_changes_nothing() {
    let mut job = Job::create(&employer(), complete_fields()).unwrap();

    let result = job.apply_update(JobFields {
      title: Some("Changed".to_string()),
      salary_min: Some(SalaryInput::Text("a lot".to_string())),
      ..Default::default()
    });

    assert!(result.is_err());
    assert_eq!(job.title, "Backend Engineer");
  }

  #[test]
  fn test_filter_matching() {
    let job = Job::create(&employer(), complete_fields()).unwrap();

    let by_search = JobFilter {
      search: Some("ENGINEER".to_string()),
      ..Default::default()
    };
    let by_description = JobFilter {
      search: Some("apis".to_string()),
      ..Default::default()
    };
    let by_location = JobFilter {
      location: Some("mot".to_string()),
      ..Default::default()
    };
    let wrong_type = JobFilter {
      job_type: Some("Full-Time".to_string()),
      ..Default::default()
    };

    assert!(by_search.matches(&job));
    assert!(by_description.matches(&job));
    assert!(by_location.matches(&job));
    assert!(!wrong_type.matches(&job));
    assert!(JobFilter::default().matches(&job));
  }

  #[test]
  fn test_filter_normalization_drops_empty_values() {
    let filter = JobFilter {
      search: Some(String::new()),
      location: Some("NYC".to_string()),
      job_type: Some(String::new()),
    }
    .normalized();

    assert!(filter.search.is_none());
    assert_eq!(filter.location.as_deref(), Some("NYC"));
    assert!(filter.job_type.is_none());
  }

  #[test]
  fn test_submit_snapshots_applicant_and_employer() {
    let employer = employer();
    let job = Job::create(&employer, complete_fields()).unwrap();
    let applicant = User::new(
      "ann@example.com".to_string(),
      "hash".to_string(),
      "Ann".to_string(),
      UserRole::Applicant,
      UserProfile::default(),
    );

    let application = JobApplication::submit(&job, &applicant, "https://cv".to_string(), None);

    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.employer_id, employer.id);
    assert_eq!(application.applicant_name, "Ann");
    assert_eq!(application.applicant_email, "ann@example.com");
    assert_eq!(application.cover_letter, "");
  }
}
