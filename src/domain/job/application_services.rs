use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::User;
use crate::domain::auth::value_objects::UserRole;

use super::entities::{ApplicationWithJob, JobApplication};
use super::errors::JobError;
use super::ports::{JobApplicationRepository, JobRepository};
use super::value_objects::ApplicationStatus;

/// Applications: submission by applicants, triage by the owning employer
pub struct JobApplicationService {
  job_repo: Arc<dyn JobRepository>,
  application_repo: Arc<dyn JobApplicationRepository>,
}

impl JobApplicationService {
  pub fn new(
    job_repo: Arc<dyn JobRepository>,
    application_repo: Arc<dyn JobApplicationRepository>,
  ) -> Self {
    Self {
      job_repo,
      application_repo,
    }
  }

  /// Submits `caller`'s application to a job.
  ///
  /// At most one application may exist per (job, applicant). The check and
  /// the insert are separate steps, so two simultaneous submissions can both
  /// pass. The insert and the counter increment are likewise separate writes.
  pub async fn apply(
    &self,
    caller: &User,
    job_id: Uuid,
    resume_url: String,
    cover_letter: Option<String>,
  ) -> Result<JobApplication, JobError> {
    if !caller.has_role(UserRole::Applicant) {
      return Err(JobError::PermissionDenied(
        "Only applicants can apply to jobs".to_string(),
      ));
    }

    let job = self
      .job_repo
      .find_by_id(job_id)
      .await?
      .ok_or(JobError::JobNotFound)?;

    if self
      .application_repo
      .find_by_job_and_applicant(job.id, caller.id)
      .await?
      .is_some()
    {
      return Err(JobError::AlreadyApplied);
    }

    let application = JobApplication::submit(&job, caller, resume_url, cover_letter);
    let created = self.application_repo.create(application).await?;

    self
      .job_repo
      .increment_applications_count(job.id)
      .await
      .inspect_err(|e| {
        tracing::error!(
          job_id = %job.id,
          application_id = %created.id,
          error = %e,
          "Application stored but job counter not incremented"
        );
      })?;

    tracing::info!(application_id = %created.id, job_id = %job.id, applicant_id = %caller.id, "Application submitted");

    Ok(created)
  }

  /// The caller's applications, each joined with its job's current title and company
  pub async fn list_my_applications(
    &self,
    caller: &User,
  ) -> Result<Vec<ApplicationWithJob>, JobError> {
    let applications = self.application_repo.find_by_applicant_id(caller.id).await?;

    let mut annotated = Vec::with_capacity(applications.len());
    for application in applications {
      let job = self.job_repo.find_by_id(application.job_id).await?;
      annotated.push(ApplicationWithJob {
        job_title: job.as_ref().map(|j| j.title.clone()),
        company_name: job.map(|j| j.company_name),
        application,
      });
    }

    Ok(annotated)
  }

  /// All applications for a job; only its owning employer may look
  pub async fn list_job_applications(
    &self,
    caller: &User,
    job_id: Uuid,
  ) -> Result<Vec<JobApplication>, JobError> {
    let job = self
      .job_repo
      .find_by_id(job_id)
      .await?
      .ok_or(JobError::JobNotFound)?;

    if !job.is_owned_by(caller.id) {
      tracing::warn!(job_id = %job.id, caller_id = %caller.id, "Rejected listing of another employer's applications");
      return Err(JobError::PermissionDenied(
        "You do not own this job".to_string(),
      ));
    }

    self.application_repo.find_by_job_id(job.id).await
  }

  /// Sets an application's status. Any status may replace any other.
  pub async fn update_status(
    &self,
    caller: &User,
    application_id: Uuid,
    status: ApplicationStatus,
  ) -> Result<JobApplication, JobError> {
    let mut application = self
      .application_repo
      .find_by_id(application_id)
      .await?
      .ok_or(JobError::ApplicationNotFound)?;

    if application.employer_id != caller.id {
      tracing::warn!(application_id = %application.id, caller_id = %caller.id, "Rejected status change by non-owner");
      return Err(JobError::PermissionDenied(
        "You do not own this application's job".to_string(),
      ));
    }

    self
      .application_repo
      .update_status(application.id, status)
      .await?;
    application.status = status;

    Ok(application)
  }
}
