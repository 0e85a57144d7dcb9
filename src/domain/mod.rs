pub mod ci;
pub mod error;
pub mod workflow;

pub use ci::{CiConfig, CiInputs, CiPlatform};
pub use error::AppError;
pub use workflow::{GitHubWorkflow, Job, Step};
