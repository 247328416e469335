use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::UserRole;

/// User entity representing a registered employer or applicant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// User's email address (unique, lowercase)
  pub email: String,
  /// Hashed password using Argon2
  pub password_hash: String,
  /// Display name
  pub name: String,
  /// Role chosen at registration; never changes
  pub role: UserRole,
  /// Company name, copied onto jobs the user posts
  pub company: Option<String>,
  pub phone: Option<String>,
  pub location: Option<String>,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
}

/// Optional profile fields supplied at registration
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
  pub company: Option<String>,
  pub phone: Option<String>,
  pub location: Option<String>,
}

impl User {
  /// Creates a new user with the given details
  pub fn new(
    email: String,
    password_hash: String,
    name: String,
    role: UserRole,
    profile: UserProfile,
  ) -> Self {
    Self {
      id: Uuid::new_v4(),
      email,
      password_hash,
      name,
      role,
      company: profile.company,
      phone: profile.phone,
      location: profile.location,
      created_at: Utc::now(),
    }
  }

  /// Creates a user from database fields (for reconstruction)
  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    email: String,
    password_hash: String,
    name: String,
    role: UserRole,
    company: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      email,
      password_hash,
      name,
      role,
      company,
      phone,
      location,
      created_at,
    }
  }

  pub fn has_role(&self, role: UserRole) -> bool {
    self.role == role
  }

  /// Company name as stamped onto new job postings; empty when unset
  pub fn company_name(&self) -> String {
    self.company.clone().unwrap_or_default()
  }
}
