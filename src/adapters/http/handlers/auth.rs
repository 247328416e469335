use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse},
  errors::ApiError,
  middleware::AuthUser,
};
use crate::application::auth::{
  GetCurrentUserUseCase, LoginUserCommand, LoginUserUseCase, RegisterUserCommand,
  RegisterUserUseCase,
};

/// Handler for user registration
///
/// POST /api/auth/register
/// Body: RegisterRequest (JSON)
/// Response: RegisterResponse (JSON) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let command = RegisterUserCommand {
    email: request.email,
    password: request.password,
    name: request.name,
    role: request.role,
    company: request.company,
    phone: request.phone,
    location: request.location,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(RegisterResponse {
    message: "Registered".to_string(),
    user_id: response.user_id,
  }))
}

/// Handler for user login
///
/// POST /api/auth/login
/// Body: LoginRequest (JSON)
/// Response: LoginResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let command = LoginUserCommand {
    email: request.email,
    password: request.password,
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(LoginResponse {
    message: "Login successful".to_string(),
    token: response.token,
    expires_at: response.expires_at,
    user: response.user.into(),
  }))
}

/// Handler for the caller's own profile
///
/// GET /api/auth/profile
/// Headers: Authorization: Bearer <token>
/// Response: ProfileResponse (JSON) with status 200
pub async fn profile_handler(
  use_case: web::Data<Arc<GetCurrentUserUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let caller = http_req.authenticated_user()?;

  let profile = use_case.execute(caller.id).await?;

  Ok(HttpResponse::Ok().json(ProfileResponse {
    user: profile.into(),
  }))
}
