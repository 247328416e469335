use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::UserRole;

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone)]
pub struct UserProfileResponse {
  pub user_id: Uuid,
  pub email: String,
  pub name: String,
  pub role: UserRole,
  pub company: Option<String>,
  pub phone: Option<String>,
  pub location: Option<String>,
  pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfileResponse {
  fn from(user: User) -> Self {
    Self {
      user_id: user.id,
      email: user.email,
      name: user.name,
      role: user.role,
      company: user.company,
      phone: user.phone,
      location: user.location,
      created_at: user.created_at,
    }
  }
}

/// Use case for getting the current authenticated user
pub struct GetCurrentUserUseCase {
  auth_service: Arc<AuthService>,
}

impl GetCurrentUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  pub async fn execute(&self, user_id: Uuid) -> Result<UserProfileResponse, AuthError> {
    let user = self.auth_service.get_user(user_id).await?;
    Ok(user.into())
  }
}
