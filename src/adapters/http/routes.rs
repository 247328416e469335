use actix_web::{error, web};
use std::sync::Arc;

use crate::application::auth::{GetCurrentUserUseCase, LoginUserUseCase, RegisterUserUseCase};
use crate::application::job::{
  CreateJobUseCase, DeleteJobUseCase, GetJobUseCase, ListEmployerJobsUseCase, ListJobsUseCase,
  UpdateJobUseCase,
};
use crate::application::job_application::{
  ApplyForJobUseCase, ListJobApplicationsUseCase, ListMyApplicationsUseCase,
  UpdateApplicationStatusUseCase,
};
use crate::domain::auth::{AuthService, RoleRequirement};
use crate::domain::job::{JobApplicationService, JobService};

use super::errors::ApiError;
use super::handlers::applications::{
  apply_handler, job_applications_handler, my_applications_handler, update_status_handler,
};
use super::handlers::auth::{login_handler, profile_handler, register_handler};
use super::handlers::health_handler;
use super::handlers::jobs::{
  create_job_handler, delete_job_handler, get_job_handler, list_jobs_handler, my_jobs_handler,
  update_job_handler,
};
use super::middleware::AuthMiddleware;

const JSON_BODY_LIMIT: usize = 256 * 1024;

/// Everything the API routes need, wired once at startup and cloned into
/// each worker
#[derive(Clone)]
pub struct ApiRouteDependencies {
  pub auth_service: Arc<AuthService>,
  pub register_user: Arc<RegisterUserUseCase>,
  pub login_user: Arc<LoginUserUseCase>,
  pub get_current_user: Arc<GetCurrentUserUseCase>,
  pub create_job: Arc<CreateJobUseCase>,
  pub list_jobs: Arc<ListJobsUseCase>,
  pub get_job: Arc<GetJobUseCase>,
  pub update_job: Arc<UpdateJobUseCase>,
  pub delete_job: Arc<DeleteJobUseCase>,
  pub list_employer_jobs: Arc<ListEmployerJobsUseCase>,
  pub apply_for_job: Arc<ApplyForJobUseCase>,
  pub list_my_applications: Arc<ListMyApplicationsUseCase>,
  pub list_job_applications: Arc<ListJobApplicationsUseCase>,
  pub update_application_status: Arc<UpdateApplicationStatusUseCase>,
}

impl ApiRouteDependencies {
  /// Builds every use case on top of the three domain services
  pub fn new(
    auth_service: Arc<AuthService>,
    job_service: Arc<JobService>,
    application_service: Arc<JobApplicationService>,
  ) -> Self {
    Self {
      register_user: Arc::new(RegisterUserUseCase::new(auth_service.clone())),
      login_user: Arc::new(LoginUserUseCase::new(auth_service.clone())),
      get_current_user: Arc::new(GetCurrentUserUseCase::new(auth_service.clone())),
      create_job: Arc::new(CreateJobUseCase::new(job_service.clone())),
      list_jobs: Arc::new(ListJobsUseCase::new(job_service.clone())),
      get_job: Arc::new(GetJobUseCase::new(job_service.clone())),
      update_job: Arc::new(UpdateJobUseCase::new(job_service.clone())),
      delete_job: Arc::new(DeleteJobUseCase::new(job_service.clone())),
      list_employer_jobs: Arc::new(ListEmployerJobsUseCase::new(job_service)),
      apply_for_job: Arc::new(ApplyForJobUseCase::new(application_service.clone())),
      list_my_applications: Arc::new(ListMyApplicationsUseCase::new(application_service.clone())),
      list_job_applications: Arc::new(ListJobApplicationsUseCase::new(
        application_service.clone(),
      )),
      update_application_status: Arc::new(UpdateApplicationStatusUseCase::new(
        application_service,
      )),
      auth_service,
    }
  }

  fn guard(&self, requirement: RoleRequirement) -> AuthMiddleware {
    AuthMiddleware::new(self.auth_service.clone(), requirement)
  }
}

/// JSON body settings: malformed or mistyped bodies become 400 with the
/// standard error shape
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default()
    .limit(JSON_BODY_LIMIT)
    .error_handler(|err, _req| {
      tracing::debug!(error = %err, "Rejected JSON body");
      ApiError::Validation(format!("Invalid request body: {}", err)).into()
    })
}

fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _req| {
    ApiError::Validation(format!("Invalid query string: {}", err)).into()
  })
}

/// Mounts the whole API under the provided scope (e.g. `/api`)
///
/// # Routes
///
/// - GET /health
/// - /auth: register, login, profile
/// - /jobs: public listing and lookup, employer CRUD
/// - /applications: apply and list (applicant), review (owning employer)
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// # use jobboard::adapters::http::routes::{ApiRouteDependencies, configure_api_routes};
///
/// # fn example(deps: ApiRouteDependencies) {
/// let app = App::new().service(
///   web::scope("/api").configure(|cfg| configure_api_routes(cfg, deps.clone())),
/// );
/// # }
/// ```
pub fn configure_api_routes(cfg: &mut web::ServiceConfig, deps: ApiRouteDependencies) {
  cfg
    .app_data(json_config())
    .app_data(query_config())
    .route("/health", web::get().to(health_handler))
    .service(web::scope("/auth").configure(|cfg| configure_auth_routes(cfg, &deps)))
    .service(web::scope("/jobs").configure(|cfg| configure_job_routes(cfg, &deps)))
    .service(web::scope("/applications").configure(|cfg| configure_application_routes(cfg, &deps)));
}

/// POST /register, POST /login, GET /profile
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig, deps: &ApiRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.register_user.clone()))
    .app_data(web::Data::new(deps.login_user.clone()))
    .app_data(web::Data::new(deps.get_current_user.clone()))
    .route("/register", web::post().to(register_handler))
    .route("/login", web::post().to(login_handler))
    .route(
      "/profile",
      web::get()
        .to(profile_handler)
        .wrap(deps.guard(RoleRequirement::Authenticated)),
    );
}

/// Job postings. Reads are public; writes need an employer token and, for
/// existing jobs, ownership (checked by the use case).
pub fn configure_job_routes(cfg: &mut web::ServiceConfig, deps: &ApiRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.create_job.clone()))
    .app_data(web::Data::new(deps.list_jobs.clone()))
    .app_data(web::Data::new(deps.get_job.clone()))
    .app_data(web::Data::new(deps.update_job.clone()))
    .app_data(web::Data::new(deps.delete_job.clone()))
    .app_data(web::Data::new(deps.list_employer_jobs.clone()))
    .service(
      web::resource("")
        .route(web::get().to(list_jobs_handler))
        .route(
          web::post()
            .to(create_job_handler)
            .wrap(deps.guard(RoleRequirement::Employer)),
        ),
    )
    .service(
      web::resource("/employer/my-jobs").route(
        web::get()
          .to(my_jobs_handler)
          .wrap(deps.guard(RoleRequirement::Employer)),
      ),
    )
    .service(
      web::resource("/{id}")
        .route(web::get().to(get_job_handler))
        .route(
          web::put()
            .to(update_job_handler)
            .wrap(deps.guard(RoleRequirement::Employer)),
        )
        .route(
          web::delete()
            .to(delete_job_handler)
            .wrap(deps.guard(RoleRequirement::Employer)),
        ),
    );
}

/// Applications. Applicants apply and list their own; employers review the
/// applications to their jobs.
pub fn configure_application_routes(cfg: &mut web::ServiceConfig, deps: &ApiRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.apply_for_job.clone()))
    .app_data(web::Data::new(deps.list_my_applications.clone()))
    .app_data(web::Data::new(deps.list_job_applications.clone()))
    .app_data(web::Data::new(deps.update_application_status.clone()))
    .route(
      "",
      web::post()
        .to(apply_handler)
        .wrap(deps.guard(RoleRequirement::Applicant)),
    )
    .route(
      "/my-applications",
      web::get()
        .to(my_applications_handler)
        .wrap(deps.guard(RoleRequirement::Applicant)),
    )
    .route(
      "/job/{id}/applications",
      web::get()
        .to(job_applications_handler)
        .wrap(deps.guard(RoleRequirement::Employer)),
    )
    .route(
      "/{id}/status",
      web::put()
        .to(update_status_handler)
        .wrap(deps.guard(RoleRequirement::Employer)),
    );
}
