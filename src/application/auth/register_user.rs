use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::UserProfile;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password, UserRole};

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  pub email: String,
  /// Plain text, hashed before storage
  pub password: String,
  pub name: String,
  /// "employer" or "applicant"
  pub role: String,
  pub company: Option<String>,
  pub phone: Option<String>,
  pub location: Option<String>,
}

/// Response after successful user registration
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
  pub user_id: Uuid,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  auth_service: Arc<AuthService>,
}

impl RegisterUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// # Errors
  /// Returns `AuthError` if registration fails (e.g., email already exists, validation errors)
  pub async fn execute(
    &self,
    command: RegisterUserCommand,
  ) -> Result<RegisterUserResponse, AuthError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;
    let role: UserRole = command.role.parse()?;

    let user = self
      .auth_service
      .register(
        email,
        password,
        command.name,
        role,
        UserProfile {
          company: command.company,
          phone: command.phone,
          location: command.location,
        },
      )
      .await?;

    Ok(RegisterUserResponse { user_id: user.id })
  }
}
