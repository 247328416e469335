use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::lock;
use crate::domain::auth::{
  entities::User,
  errors::{AuthError, RepositoryError},
  ports::UserRepository,
  value_objects::Email,
};

/// In-memory [`UserRepository`] enforcing email uniqueness
#[derive(Default)]
pub struct InMemoryUserRepository {
  users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, user: User) -> Result<User, AuthError> {
    let mut users = lock(&self.users)?;
    if users.iter().any(|u| u.email == user.email) {
      return Err(RepositoryError::DuplicateKey(format!("users.email = {}", user.email)).into());
    }
    users.push(user.clone());
    Ok(user)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    let users = lock(&self.users)?;
    Ok(users.iter().find(|u| u.id == id).cloned())
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
    let users = lock(&self.users)?;
    Ok(users.iter().find(|u| u.email == email.as_str()).cloned())
  }
}
