pub mod application_services;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use application_services::JobApplicationService;
pub use entities::{ApplicationWithJob, Job, JobApplication, JobFields, JobFilter};
pub use errors::JobError;
pub use ports::{JobApplicationRepository, JobRepository};
pub use services::JobService;
pub use value_objects::{ApplicationStatus, SalaryInput};
