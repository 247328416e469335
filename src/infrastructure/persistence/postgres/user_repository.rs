use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::{
  entities::User,
  errors::{AuthError, RepositoryError},
  ports::UserRepository,
  value_objects::{Email, UserRole},
};

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: Uuid,
  email: String,
  password_hash: String,
  name: String,
  role: String,
  company: Option<String>,
  phone: Option<String>,
  location: Option<String>,
  created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
  type Error = RepositoryError;

  fn try_from(row: UserRow) -> Result<Self, Self::Error> {
    let role: UserRole = row
      .role
      .parse()
      .map_err(|_| RepositoryError::CorruptRecord(format!("users.role = {}", row.role)))?;

    Ok(User::from_db(
      row.id,
      row.email,
      row.password_hash,
      row.name,
      role,
      row.company,
      row.phone,
      row.location,
      row.created_at,
    ))
  }
}

const USER_COLUMNS: &str =
  "id, email, password_hash, name, role, company, phone, location, created_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn create(&self, user: User) -> Result<User, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
      r#"
            INSERT INTO users ({USER_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {USER_COLUMNS}
            "#
    ))
    .bind(user.id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.name)
    .bind(user.role.as_str())
    .bind(&user.company)
    .bind(&user.phone)
    .bind(&user.location)
    .bind(user.created_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(User::try_from(row)?)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
      "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(User::try_from).transpose()?)
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
      "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(User::try_from).transpose()?)
  }
}
