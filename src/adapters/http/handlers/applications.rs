use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{
    ApplicationListResponse, ApplyRequest, ApplyResponse, SuccessResponse, UpdateStatusRequest,
  },
  errors::ApiError,
  middleware::AuthUser,
};
use crate::application::job_application::{
  ApplyForJobCommand, ApplyForJobUseCase, ListJobApplicationsCommand, ListJobApplicationsUseCase,
  ListMyApplicationsUseCase, UpdateApplicationStatusCommand, UpdateApplicationStatusUseCase,
};

/// Handler for applying to a job
///
/// POST /api/applications (applicant)
/// Body: ApplyRequest (JSON)
/// Response: ApplyResponse (JSON) with status 201
pub async fn apply_handler(
  request: web::Json<ApplyRequest>,
  use_case: web::Data<Arc<ApplyForJobUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let caller = http_req.authenticated_user()?;
  let request = request.into_inner();

  let response = use_case
    .execute(ApplyForJobCommand {
      caller,
      job_id: request.job_id,
      resume_url: request.resume_url,
      cover_letter: request.cover_letter,
    })
    .await?;

  Ok(HttpResponse::Created().json(ApplyResponse {
    message: "Applied".to_string(),
    application_id: response.application_id,
  }))
}

/// Handler for the caller's own applications, each annotated with its job
///
/// GET /api/applications/my-applications (applicant)
pub async fn my_applications_handler(
  use_case: web::Data<Arc<ListMyApplicationsUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let caller = http_req.authenticated_user()?;

  let applications = use_case.execute(&caller).await?;

  Ok(HttpResponse::Ok().json(ApplicationListResponse {
    applications: applications.into_iter().map(Into::into).collect(),
  }))
}

/// Handler for the applications received by one of the caller's jobs
///
/// GET /api/applications/job/{id}/applications (owning employer)
pub async fn job_applications_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<ListJobApplicationsUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let caller = http_req.authenticated_user()?;

  let applications = use_case
    .execute(ListJobApplicationsCommand {
      caller,
      job_id: path.into_inner(),
    })
    .await?;

  Ok(HttpResponse::Ok().json(ApplicationListResponse {
    applications: applications.into_iter().map(Into::into).collect(),
  }))
}

/// Handler for moving an application to a new status
///
/// PUT /api/applications/{id}/status (owning employer)
/// Body: UpdateStatusRequest (JSON)
pub async fn update_status_handler(
  path: web::Path<String>,
  request: web::Json<UpdateStatusRequest>,
  use_case: web::Data<Arc<UpdateApplicationStatusUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let caller = http_req.authenticated_user()?;

  use_case
    .execute(UpdateApplicationStatusCommand {
      caller,
      application_id: path.into_inner(),
      status: request.into_inner().status,
    })
    .await?;

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "Updated".to_string(),
  }))
}
