use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::entities::User;
use super::errors::AuthError;
use super::value_objects::{Email, Password, PasswordHash};

/// Repository trait for user persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Creates a new user in the repository
  async fn create(&self, user: User) -> Result<User, AuthError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError>;

  /// Verifies a plain text password against a hashed password
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError>;
}

/// A freshly signed identity token
#[derive(Debug, Clone)]
pub struct IssuedToken {
  pub token: String,
  pub expires_at: DateTime<Utc>,
}

/// Issues and validates signed, time-limited identity tokens.
///
/// Implementations are stateless; validation never touches storage.
pub trait TokenService: Send + Sync {
  /// Signs a token whose subject is `user_id`
  fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AuthError>;

  /// Returns the subject of a valid token.
  ///
  /// Fails with `AuthError::TokenExpired` once the expiry has passed and
  /// `AuthError::TokenInvalid` for anything that does not verify.
  fn validate(&self, token: &str) -> Result<Uuid, AuthError>;
}
