//! Job application use cases

mod apply_for_job;
mod list_job_applications;
mod list_my_applications;
mod update_application_status;

pub use apply_for_job::{ApplyForJobCommand, ApplyForJobResponse, ApplyForJobUseCase};
pub use list_job_applications::{ListJobApplicationsCommand, ListJobApplicationsUseCase};
pub use list_my_applications::ListMyApplicationsUseCase;
pub use update_application_status::{
  UpdateApplicationStatusCommand, UpdateApplicationStatusUseCase,
};
