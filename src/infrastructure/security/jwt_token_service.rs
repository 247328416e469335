use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::{IssuedToken, TokenService};

/// Lifetime of an identity token: 24 hours
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86_400;

/// Signing parameters for identity tokens
#[derive(Clone)]
pub struct TokenConfig {
  pub secret: String,
  pub ttl_seconds: i64,
}

impl TokenConfig {
  pub fn new(secret: impl Into<String>) -> Self {
    Self {
      secret: secret.into(),
      ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
    }
  }

  pub fn with_ttl_seconds(mut self, ttl_seconds: i64) -> Self {
    self.ttl_seconds = ttl_seconds;
    self
  }
}

/// Claims carried by an identity token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
  /// User id
  sub: String,
  exp: i64,
  iat: i64,
}

/// HS256 JWT implementation of [`TokenService`]
pub struct JwtTokenService {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  ttl: Duration,
}

impl JwtTokenService {
  pub fn new(config: TokenConfig) -> Self {
    Self {
      encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
      ttl: Duration::seconds(config.ttl_seconds),
    }
  }

  /// Signs a token as if issued at `now`
  pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<IssuedToken, AuthError> {
    let expires_at = now + self.ttl;
    let claims = Claims {
      sub: user_id.to_string(),
      exp: expires_at.timestamp(),
      iat: now.timestamp(),
    };

    let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
      .map_err(|e| AuthError::TokenSigning(e.to_string()))?;

    Ok(IssuedToken { token, expires_at })
  }

  /// Validates a token as seen at `now`.
  ///
  /// Expiry is checked here instead of by the decoder so that it can be
  /// evaluated against an arbitrary clock, with no leeway.
  pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;

    let claims = decode::<Claims>(token, &self.decoding_key, &validation)
      .map_err(|e| {
        tracing::debug!(error = %e, "Rejected identity token");
        AuthError::TokenInvalid
      })?
      .claims;

    if now.timestamp() >= claims.exp {
      return Err(AuthError::TokenExpired);
    }

    Uuid::parse_str(&claims.sub).map_err(|_| AuthError::TokenInvalid)
  }
}

impl TokenService for JwtTokenService {
  fn issue(&self, user_id: Uuid) -> Result<IssuedToken, AuthError> {
    self.issue_at(user_id, Utc::now())
  }

  fn validate(&self, token: &str) -> Result<Uuid, AuthError> {
    self.validate_at(token, Utc::now())
  }
}
