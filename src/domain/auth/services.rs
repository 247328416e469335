use std::sync::Arc;
use uuid::Uuid;

use super::entities::{User, UserProfile};
use super::errors::{AuthError, RepositoryError, ValidationError};
use super::ports::{IssuedToken, PasswordHasher, TokenService, UserRepository};
use super::value_objects::{Email, Password, PasswordHash, UserRole};

/// Capability a protected operation demands of its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
  /// Any caller with a valid token
  Authenticated,
  Employer,
  Applicant,
}

impl RoleRequirement {
  pub fn permits(&self, role: UserRole) -> bool {
    match self {
      RoleRequirement::Authenticated => true,
      RoleRequirement::Employer => role == UserRole::Employer,
      RoleRequirement::Applicant => role == UserRole::Applicant,
    }
  }

  fn label(&self) -> &'static str {
    match self {
      RoleRequirement::Authenticated => "authenticated",
      RoleRequirement::Employer => UserRole::Employer.as_str(),
      RoleRequirement::Applicant => UserRole::Applicant.as_str(),
    }
  }
}

/// Pulls the token out of a `Bearer <token>` header value
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
  header
    .and_then(|value| value.strip_prefix("Bearer "))
    .map(str::trim)
    .filter(|token| !token.is_empty())
    .ok_or(AuthError::TokenMissing)
}

/// Authentication service: credentials, token issuance and caller resolution
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  token_service: Arc<dyn TokenService>,
}

impl AuthService {
  /// Creates a new instance of AuthService
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_service: Arc<dyn TokenService>,
  ) -> Self {
    Self {
      user_repo,
      password_hasher,
      token_service,
    }
  }

  /// Registers a new user
  ///
  /// # Errors
  /// Returns `AuthError::EmailAlreadyExists` if email is already registered
  pub async fn register(
    &self,
    email: Email,
    password: Password,
    name: String,
    role: UserRole,
    profile: UserProfile,
  ) -> Result<User, AuthError> {
    let name = name.trim().to_string();
    if name.is_empty() {
      return Err(
        ValidationError::MissingField {
          field: "name".to_string(),
        }
        .into(),
      );
    }

    if self.user_repo.find_by_email(&email).await?.is_some() {
      return Err(AuthError::EmailAlreadyExists);
    }

    let password_hash = self.password_hasher.hash(&password).await?;

    let user = User::new(
      email.into_inner(),
      password_hash.into_inner(),
      name,
      role,
      profile,
    );

    // The lookup above races with concurrent registrations; the unique index
    // has the final word.
    let created = match self.user_repo.create(user).await {
      Ok(user) => user,
      Err(AuthError::Repository(RepositoryError::DuplicateKey(_))) => {
        return Err(AuthError::EmailAlreadyExists);
      }
      Err(e) => return Err(e),
    };

    tracing::info!(user_id = %created.id, role = %created.role, "User registered");

    Ok(created)
  }

  /// Verifies credentials and issues an identity token
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` for an unknown email or a wrong
  /// password, without telling the two apart
  pub async fn login(
    &self,
    email: Email,
    password: Password,
  ) -> Result<(User, IssuedToken), AuthError> {
    let user = self
      .user_repo
      .find_by_email(&email)
      .await?
      .ok_or(AuthError::InvalidCredentials)?;

    let stored_hash = PasswordHash::from_hash(&user.password_hash)?;
    if !self.password_hasher.verify(&password, &stored_hash).await? {
      tracing::debug!(user_id = %user.id, "Rejected login with wrong password");
      return Err(AuthError::InvalidCredentials);
    }

    let token = self.token_service.issue(user.id)?;

    Ok((user, token))
  }

  /// Loads a user by id
  pub async fn get_user(&self, user_id: Uuid) -> Result<User, AuthError> {
    self
      .user_repo
      .find_by_id(user_id)
      .await?
      .ok_or(AuthError::UserNotFound)
  }

  /// Resolves the caller behind a raw `Authorization` header value.
  ///
  /// Checks run in a fixed order and stop at the first failure: header shape,
  /// token signature and expiry, user existence, then role.
  pub async fn authorize(
    &self,
    authorization: Option<&str>,
    requirement: RoleRequirement,
  ) -> Result<User, AuthError> {
    let token = extract_bearer_token(authorization)?;
    let user_id = self.token_service.validate(token)?;
    let user = self.get_user(user_id).await?;

    if !requirement.permits(user.role) {
      return Err(AuthError::Forbidden {
        required: requirement.label(),
      });
    }

    Ok(user)
  }
}
