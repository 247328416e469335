use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::application::auth::UserProfileResponse;
use crate::domain::auth::value_objects::UserRole;
use crate::domain::job::{
  ApplicationStatus, ApplicationWithJob, Job, JobApplication, JobFields, SalaryInput,
};

// ============================================================================
// Auth
// ============================================================================

/// Request for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  #[validate(length(
    min = 8,
    max = 128,
    message = "Password must be between 8 and 128 characters"
  ))]
  pub password: String,

  #[validate(length(
    min = 1,
    max = 255,
    message = "Name must be between 1 and 255 characters"
  ))]
  pub name: String,

  /// "employer" or "applicant"; checked by the use case
  pub role: String,

  pub company: Option<String>,
  pub phone: Option<String>,
  pub location: Option<String>,
}

/// Request for user login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  #[validate(length(min = 1, message = "Email is required"))]
  pub email: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
  pub message: String,
  pub user_id: Uuid,
}

/// Public user profile
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
  pub id: Uuid,
  pub email: String,
  pub name: String,
  pub role: UserRole,
  /// Empty when the user has no company
  pub company: String,
}

impl From<UserProfileResponse> for UserDto {
  fn from(profile: UserProfileResponse) -> Self {
    Self {
      id: profile.user_id,
      email: profile.email,
      name: profile.name,
      role: profile.role,
      company: profile.company.unwrap_or_default(),
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
  pub message: String,
  pub token: String,
  pub expires_at: DateTime<Utc>,
  pub user: UserDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
  pub user: UserDto,
}

// ============================================================================
// Jobs
// ============================================================================

/// Job creation payload. Every field is optional here so that a missing one
/// is reported by name by the domain.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateJobRequest {
  pub title: Option<String>,
  pub description: Option<String>,
  pub requirements: Option<String>,
  pub location: Option<String>,
  /// Number or numeric string
  pub salary_min: Option<SalaryInput>,
  pub salary_max: Option<SalaryInput>,
  pub job_type: Option<String>,
  pub deadline: Option<String>,
}

impl From<CreateJobRequest> for JobFields {
  fn from(request: CreateJobRequest) -> Self {
    JobFields {
      title: request.title,
      description: request.description,
      requirements: request.requirements,
      location: request.location,
      salary_min: request.salary_min,
      salary_max: request.salary_max,
      job_type: request.job_type,
      deadline: request.deadline,
    }
  }
}

/// Partial job update. Keys outside the editable set are rejected, except the
/// server-managed ones a client echoes back from a fetched job, which are
/// accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateJobRequest {
  pub title: Option<String>,
  pub description: Option<String>,
  pub requirements: Option<String>,
  pub location: Option<String>,
  pub salary_min: Option<SalaryInput>,
  pub salary_max: Option<SalaryInput>,
  pub job_type: Option<String>,
  pub deadline: Option<String>,

  #[serde(default, rename = "_id")]
  pub echoed_id: Option<IgnoredAny>,
  #[serde(default, rename = "employer_id")]
  pub echoed_employer_id: Option<IgnoredAny>,
  #[serde(default, rename = "company_name")]
  pub echoed_company_name: Option<IgnoredAny>,
  #[serde(default, rename = "applications_count")]
  pub echoed_applications_count: Option<IgnoredAny>,
  #[serde(default, rename = "created_at")]
  pub echoed_created_at: Option<IgnoredAny>,
}

impl From<UpdateJobRequest> for JobFields {
  fn from(request: UpdateJobRequest) -> Self {
    JobFields {
      title: request.title,
      description: request.description,
      requirements: request.requirements,
      location: request.location,
      salary_min: request.salary_min,
      salary_max: request.salary_max,
      job_type: request.job_type,
      deadline: request.deadline,
    }
  }
}

/// Query string of the public job listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobsQuery {
  pub search: Option<String>,
  pub location: Option<String>,
  pub job_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobDto {
  #[serde(rename = "_id")]
  pub id: Uuid,
  pub title: String,
  pub description: String,
  pub requirements: String,
  pub location: String,
  pub salary_min: f64,
  pub salary_max: f64,
  pub job_type: String,
  pub deadline: String,
  pub employer_id: Uuid,
  pub company_name: String,
  pub applications_count: i64,
  pub created_at: DateTime<Utc>,
}

impl From<Job> for JobDto {
  fn from(job: Job) -> Self {
    Self {
      id: job.id,
      title: job.title,
      description: job.description,
      requirements: job.requirements,
      location: job.location,
      salary_min: job.salary_min,
      salary_max: job.salary_max,
      job_type: job.job_type,
      deadline: job.deadline,
      employer_id: job.employer_id,
      company_name: job.company_name,
      applications_count: job.applications_count,
      created_at: job.created_at,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateJobResponse {
  pub message: String,
  pub job_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobResponse {
  pub job: JobDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobListResponse {
  pub jobs: Vec<JobDto>,
}

// ============================================================================
// Applications
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApplyRequest {
  #[validate(length(min = 1, message = "job_id is required"))]
  pub job_id: String,

  #[validate(length(min = 1, message = "resume_url is required"))]
  pub resume_url: String,

  pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusRequest {
  pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationDto {
  #[serde(rename = "_id")]
  pub id: Uuid,
  pub job_id: Uuid,
  pub applicant_id: Uuid,
  pub applicant_name: String,
  pub applicant_email: String,
  pub resume_url: String,
  pub cover_letter: String,
  pub status: ApplicationStatus,
  pub employer_id: Uuid,
  pub applied_at: DateTime<Utc>,
  /// Only on the applicant's own listing, and only while the job exists
  #[serde(skip_serializing_if = "Option::is_none")]
  pub job_title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub company_name: Option<String>,
}

impl From<JobApplication> for ApplicationDto {
  fn from(application: JobApplication) -> Self {
    Self {
      id: application.id,
      job_id: application.job_id,
      applicant_id: application.applicant_id,
      applicant_name: application.applicant_name,
      applicant_email: application.applicant_email,
      resume_url: application.resume_url,
      cover_letter: application.cover_letter,
      status: application.status,
      employer_id: application.employer_id,
      applied_at: application.applied_at,
      job_title: None,
      company_name: None,
    }
  }
}

impl From<ApplicationWithJob> for ApplicationDto {
  fn from(annotated: ApplicationWithJob) -> Self {
    Self {
      job_title: annotated.job_title,
      company_name: annotated.company_name,
      ..annotated.application.into()
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplyResponse {
  pub message: String,
  pub application_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationListResponse {
  pub applications: Vec<ApplicationDto>,
}

// ============================================================================
// Common
// ============================================================================

/// Standard success response for operations without data
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
  pub message: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,

  /// Optional detailed error information
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use validator::Validate;

  fn register_request() -> RegisterRequest {
    RegisterRequest {
      email: "test@example.com".to_string(),
      password: "SecureP@ss123".to_string(),
      name: "Test User".to_string(),
      role: "applicant".to_string(),
      company: None,
      phone: None,
      location: None,
    }
  }

  #[test]
  fn test_register_request_validation() {
    assert!(register_request().validate().is_ok());

    let mut bad_email = register_request();
    bad_email.email = "invalid-email".to_string();
    assert!(bad_email.validate().is_err());

    let mut short_password = register_request();
    short_password.password = "short".to_string();
    assert!(short_password.validate().is_err());

    let mut no_name = register_request();
    no_name.name = String::new();
    assert!(no_name.validate().is_err());
  }

  #[test]
  fn test_update_job_request_rejects_unknown_keys() {
    let result = serde_json::from_str::<UpdateJobRequest>(r#"{"title": "x", "owner": "me"}"#);
    assert!(result.is_err());
  }

  #[test]
  fn test_update_job_request_ignores_echoed_fields() {
    let json = r#"{
      "_id": "abc",
      "employer_id": "someone-else",
      "applications_count": 99,
      "company_name": "Other",
      "created_at": "2024-01-01T00:00:00Z",
      "salary_min": "1500"
    }"#;
    let request: UpdateJobRequest = serde_json::from_str(json).unwrap();
    let fields: JobFields = request.into();

    assert!(fields.title.is_none());
    assert!(matches!(fields.salary_min, Some(SalaryInput::Text(ref s)) if s == "1500"));
  }

  #[test]
  fn test_job_dto_uses_underscore_id() {
    let dto = JobDto {
      id: Uuid::nil(),
      title: "t".to_string(),
      description: "d".to_string(),
      requirements: String::new(),
      location: "l".to_string(),
      salary_min: 1.0,
      salary_max: 2.0,
      job_type: "full-time".to_string(),
      deadline: "soon".to_string(),
      employer_id: Uuid::nil(),
      company_name: String::new(),
      applications_count: 0,
      created_at: Utc::now(),
    };

    let value = serde_json::to_value(&dto).unwrap();
    assert!(value.get("_id").is_some());
    assert!(value.get("id").is_none());
  }
}
