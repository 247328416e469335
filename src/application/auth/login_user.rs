use chrono::{DateTime, Utc};
use std::sync::Arc;

use super::get_current_user::UserProfileResponse;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

/// Command for logging in a user
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
  pub email: String,
  pub password: String,
}

/// Response after successful login
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
  /// Bearer token for subsequent requests
  pub token: String,
  pub expires_at: DateTime<Utc>,
  pub user: UserProfileResponse,
}

/// Use case for logging in a user
pub struct LoginUserUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email or wrong password
  pub async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserResponse, AuthError> {
    // A malformed email can't belong to anyone; report it like any other miss
    let email = Email::new(command.email).map_err(|_| AuthError::InvalidCredentials)?;
    let password = Password::for_verification(command.password)?;

    let (user, issued) = self.auth_service.login(email, password).await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(LoginUserResponse {
      token: issued.token,
      expires_at: issued.expires_at,
      user: user.into(),
    })
  }
}
