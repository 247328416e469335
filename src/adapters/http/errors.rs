use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use serde::Serialize;
use std::fmt;

use crate::domain::auth::errors::{AuthError, RepositoryError};
use crate::domain::job::JobError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum ApiError {
  /// Validation error (400 Bad Request)
  Validation(String),

  /// Authentication error (401 Unauthorized, 403 Forbidden or 409 Conflict)
  Auth(AuthErrorKind),

  /// Caller lacks rights over the resource (403 Forbidden)
  Forbidden(String),

  /// Resource not found (404 Not Found)
  NotFound(String),

  /// Resource already exists (409 Conflict)
  Conflict(String),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

/// Authentication error kinds
#[derive(Debug, Serialize)]
pub enum AuthErrorKind {
  /// Invalid credentials (401)
  InvalidCredentials,

  /// No bearer token supplied (401)
  TokenMissing,

  /// Token past its expiry (401)
  TokenExpired,

  /// Token failed verification (401)
  TokenInvalid,

  /// Token subject no longer resolves (401)
  UserNotFound,

  /// Caller's role does not permit the operation (403)
  RoleRequired(&'static str),

  /// Email already exists (409)
  EmailAlreadyExists,
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Auth(kind) => write!(f, "Authentication error: {:?}", kind),
      ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidCredentials
        | AuthErrorKind::TokenMissing
        | AuthErrorKind::TokenExpired
        | AuthErrorKind::TokenInvalid
        | AuthErrorKind::UserNotFound => StatusCode::UNAUTHORIZED,
        AuthErrorKind::RoleRequired(_) => StatusCode::FORBIDDEN,
        AuthErrorKind::EmailAlreadyExists => StatusCode::CONFLICT,
      },
      ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidCredentials => (
          "invalid_credentials",
          "Invalid email or password".to_string(),
        ),
        AuthErrorKind::TokenMissing => ("token_missing", "Token missing".to_string()),
        AuthErrorKind::TokenExpired => ("token_expired", "Token expired".to_string()),
        AuthErrorKind::TokenInvalid => ("token_invalid", "Invalid token".to_string()),
        AuthErrorKind::UserNotFound => ("user_not_found", "User not found".to_string()),
        AuthErrorKind::RoleRequired(role) => {
          ("forbidden", format!("Only {} accounts allowed", role))
        }
        AuthErrorKind::EmailAlreadyExists => (
          "email_already_exists",
          "An account with this email already exists".to_string(),
        ),
      },
      ApiError::Forbidden(msg) => ("forbidden", msg.clone()),
      ApiError::NotFound(msg) => ("not_found", msg.clone()),
      ApiError::Conflict(msg) => ("conflict", msg.clone()),
      ApiError::Internal(msg) => {
        // Don't expose internal error details
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
      details: None,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

/// Convert AuthError to ApiError
impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidCredentials => ApiError::Auth(AuthErrorKind::InvalidCredentials),
      AuthError::EmailAlreadyExists => ApiError::Auth(AuthErrorKind::EmailAlreadyExists),
      AuthError::TokenMissing => ApiError::Auth(AuthErrorKind::TokenMissing),
      AuthError::TokenExpired => ApiError::Auth(AuthErrorKind::TokenExpired),
      AuthError::TokenInvalid => ApiError::Auth(AuthErrorKind::TokenInvalid),
      AuthError::UserNotFound => ApiError::Auth(AuthErrorKind::UserNotFound),
      AuthError::Forbidden { required } => ApiError::Auth(AuthErrorKind::RoleRequired(required)),
      AuthError::Validation(err) => ApiError::Validation(err.to_string()),
      AuthError::ValueObject(err) => ApiError::Validation(err.to_string()),
      AuthError::Repository(err) => match err {
        RepositoryError::DuplicateKey(_) => ApiError::Auth(AuthErrorKind::EmailAlreadyExists),
        _ => ApiError::Internal(err.to_string()),
      },
      AuthError::Hash(err) => ApiError::Internal(err.to_string()),
      AuthError::TokenSigning(msg) => ApiError::Internal(msg),
    }
  }
}

/// Convert JobError to ApiError
impl From<JobError> for ApiError {
  fn from(error: JobError) -> Self {
    match error {
      JobError::Validation(msg) => ApiError::Validation(msg),
      JobError::JobNotFound => ApiError::NotFound("Job not found".to_string()),
      JobError::ApplicationNotFound => ApiError::NotFound("Application not found".to_string()),
      JobError::PermissionDenied(msg) => ApiError::Forbidden(msg),
      JobError::AlreadyApplied => ApiError::Conflict("Already applied".to_string()),
      JobError::Repository(err) => ApiError::Internal(format!("Repository error: {}", err)),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();
    // field_errors() is a map; keep the output stable
    messages.sort();

    ApiError::Validation(messages.join(", "))
  }
}
