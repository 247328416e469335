use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jobboard::{
  adapters::http::{
    ApiRouteDependencies, RequestIdMiddleware, configure_api_routes, handlers::not_found_handler,
  },
  domain::auth::AuthService,
  domain::job::{JobApplicationService, JobService},
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresJobApplicationRepository, PostgresJobRepository, PostgresUserRepository,
    },
    security::{Argon2PasswordHasher, JwtTokenService},
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jobboard=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting job board backend");

  let config = Config::load().expect("Failed to load configuration");
  tracing::info!(security = ?config.security, "Configuration loaded");

  tracing::info!(
    max_connections = config.database.max_connections,
    "Connecting to database"
  );

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "Could not connect to database. Is PostgreSQL running?",
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Repositories
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let job_repo = Arc::new(PostgresJobRepository::new(db_pool.clone()));
  let application_repo = Arc::new(PostgresJobApplicationRepository::new(db_pool));

  // Domain services
  let password_hasher =
    Arc::new(Argon2PasswordHasher::new().expect("Failed to initialize password hasher"));
  let token_service = Arc::new(JwtTokenService::new(config.security.token_config()));

  let auth_service = Arc::new(AuthService::new(user_repo, password_hasher, token_service));
  let job_service = Arc::new(JobService::new(
    job_repo.clone(),
    application_repo.clone(),
  ));
  let application_service = Arc::new(JobApplicationService::new(job_repo, application_repo));

  let dependencies = ApiRouteDependencies::new(auth_service, job_service, application_service);

  let server_host = config.server.host.clone();
  let server_port = config.server.port;
  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    let dependencies = dependencies.clone();
    App::new()
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      .service(web::scope("/api").configure(|cfg| configure_api_routes(cfg, dependencies)))
      .default_service(web::to(not_found_handler))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}
