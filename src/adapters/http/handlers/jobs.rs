use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{
    CreateJobRequest, CreateJobResponse, JobListResponse, JobResponse, JobsQuery,
    SuccessResponse, UpdateJobRequest,
  },
  errors::ApiError,
  middleware::AuthUser,
};
use crate::application::job::{
  CreateJobCommand, CreateJobUseCase, DeleteJobCommand, DeleteJobUseCase, GetJobUseCase,
  ListEmployerJobsUseCase, ListJobsCommand, ListJobsResponse, ListJobsUseCase, UpdateJobCommand,
  UpdateJobUseCase,
};

fn job_list(response: ListJobsResponse) -> JobListResponse {
  JobListResponse {
    jobs: response.jobs.into_iter().map(Into::into).collect(),
  }
}

/// POST /api/jobs (employer)
pub async fn create_job_handler(
  request: web::Json<CreateJobRequest>,
  use_case: web::Data<Arc<CreateJobUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let caller = http_req.authenticated_user()?;

  let response = use_case
    .execute(CreateJobCommand {
      caller,
      fields: request.into_inner().into(),
    })
    .await?;

  Ok(HttpResponse::Created().json(CreateJobResponse {
    message: "Job posted".to_string(),
    job_id: response.job_id,
  }))
}

/// GET /api/jobs?search=&location=&job_type=
pub async fn list_jobs_handler(
  query: web::Query<JobsQuery>,
  use_case: web::Data<Arc<ListJobsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let query = query.into_inner();

  let response = use_case
    .execute(ListJobsCommand {
      search: query.search,
      location: query.location,
      job_type: query.job_type,
    })
    .await?;

  Ok(HttpResponse::Ok().json(job_list(response)))
}

/// GET /api/jobs/{id}
pub async fn get_job_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<GetJobUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let job = use_case.execute(&path).await?;

  Ok(HttpResponse::Ok().json(JobResponse { job: job.into() }))
}

/// PUT /api/jobs/{id} (owning employer)
pub async fn update_job_handler(
  path: web::Path<String>,
  request: web::Json<UpdateJobRequest>,
  use_case: web::Data<Arc<UpdateJobUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let caller = http_req.authenticated_user()?;

  use_case
    .execute(UpdateJobCommand {
      caller,
      job_id: path.into_inner(),
      fields: request.into_inner().into(),
    })
    .await?;

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "Updated".to_string(),
  }))
}

/// DELETE /api/jobs/{id} (owning employer); removes the job's applications too
pub async fn delete_job_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<DeleteJobUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let caller = http_req.authenticated_user()?;

  use_case
    .execute(DeleteJobCommand {
      caller,
      job_id: path.into_inner(),
    })
    .await?;

  Ok(HttpResponse::Ok().json(SuccessResponse {
    message: "Deleted".to_string(),
  }))
}

/// GET /api/jobs/employer/my-jobs (employer)
pub async fn my_jobs_handler(
  use_case: web::Data<Arc<ListEmployerJobsUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let caller = http_req.authenticated_user()?;

  let response = use_case.execute(&caller).await?;

  Ok(HttpResponse::Ok().json(job_list(response)))
}
