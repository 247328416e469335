pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{ErrorResponse, SuccessResponse};
pub use errors::{ApiError, AuthErrorKind};
pub use middleware::{AuthMiddleware, AuthUser, RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{
  ApiRouteDependencies, configure_api_routes, configure_application_routes,
  configure_auth_routes, configure_job_routes, json_config,
};
