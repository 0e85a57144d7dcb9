//! func-ci: generate a GitHub Actions workflow that deploys a function on push.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::memory_workflow_writer::BufferWorkflowWriter;
pub use app::AppContext;
pub use app::api::{ConfigCiOutcome, config_ci, config_ci_with};
pub use domain::workflow::FORCE_OVERWRITE_WARNING;
pub use domain::{AppError, CiConfig, CiInputs, CiPlatform, GitHubWorkflow};
