use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::{AuthError, HashError};
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::{Password, PasswordHash};

/// Memory cost in KiB (19 MiB)
const MEMORY_COST_KIB: u32 = 19_456;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;
const OUTPUT_LEN: usize = 32;

/// Argon2id password hasher producing PHC-format strings
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  pub fn new() -> Result<Self, AuthError> {
    Self::with_params(MEMORY_COST_KIB, TIME_COST, PARALLELISM)
  }

  /// Builds a hasher with explicit cost parameters
  pub fn with_params(
    memory_cost_kib: u32,
    time_cost: u32,
    parallelism: u32,
  ) -> Result<Self, AuthError> {
    let params = Params::new(memory_cost_kib, time_cost, parallelism, Some(OUTPUT_LEN))
      .map_err(|e| {
        HashError::HashingFailed(format!("Failed to create Argon2 params: {}", e))
      })?;

    Ok(Self {
      argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
    })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AuthError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_str().as_bytes(), &salt)
      .map_err(|e| HashError::HashingFailed(format!("Failed to hash password: {}", e)))?;

    Ok(PasswordHash::from_hash(hash.to_string())?)
  }

  /// Constant-time check of `password` against a stored hash.
  ///
  /// A mismatch is `Ok(false)`; only an unparseable hash is an error.
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AuthError> {
    let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str())
      .map_err(|e| HashError::VerificationFailed(format!("Invalid hash format: {}", e)))?;

    match self
      .argon2
      .verify_password(password.as_str().as_bytes(), &parsed_hash)
    {
      Ok(()) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(
        HashError::VerificationFailed(format!("Password verification failed: {}", e)).into(),
      ),
    }
  }
}
