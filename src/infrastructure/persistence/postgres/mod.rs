pub mod job_application_repository;
pub mod job_repository;
pub mod user_repository;

pub use job_application_repository::PostgresJobApplicationRepository;
pub use job_repository::PostgresJobRepository;
pub use user_repository::PostgresUserRepository;
