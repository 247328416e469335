use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::infrastructure::security::{DEFAULT_TOKEN_TTL_SECONDS, TokenConfig};

fn default_db_connect_timeout() -> u64 {
  5
}

fn default_db_acquire_timeout() -> u64 {
  3
}

fn default_token_ttl() -> i64 {
  DEFAULT_TOKEN_TTL_SECONDS
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub database: DatabaseConfig,
  pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  pub url: String,
  pub max_connections: u32,
  #[serde(default = "default_db_connect_timeout")]
  pub connect_timeout_seconds: u64,
  #[serde(default = "default_db_acquire_timeout")]
  pub acquire_timeout_seconds: u64,
}

/// Token signing configuration
#[derive(Clone, Deserialize)]
pub struct SecurityConfig {
  /// HMAC secret for identity tokens. Override in every deployment.
  pub jwt_secret: String,
  #[serde(default = "default_token_ttl")]
  pub token_ttl_seconds: i64,
}

impl std::fmt::Debug for SecurityConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SecurityConfig")
      .field("jwt_secret", &"********")
      .field("token_ttl_seconds", &self.token_ttl_seconds)
      .finish()
  }
}

impl SecurityConfig {
  pub fn token_config(&self) -> TokenConfig {
    TokenConfig::new(self.jwt_secret.clone()).with_ttl_seconds(self.token_ttl_seconds)
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Sources, later ones overriding earlier ones:
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists, RUN_MODE defaults to "development")
  /// 4. Environment variables with the JOBBOARD_ prefix, using double
  ///    underscores between keys: `JOBBOARD_SERVER__PORT=8080`,
  ///    `JOBBOARD_SECURITY__JWT_SECRET=...`
  ///
  /// # Example
  ///
  /// ```no_run
  /// use jobboard::infrastructure::config::Config;
  ///
  /// let config = Config::load().expect("Failed to load configuration");
  /// println!("Server running on {}:{}", config.server.host, config.server.port);
  /// ```
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("JOBBOARD")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}
