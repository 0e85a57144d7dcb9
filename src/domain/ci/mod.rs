mod config;
mod inputs;
mod platform;
pub mod reference;
mod resolve;

pub use config::{
    CiConfig, DEFAULT_GITHUB_WORKFLOW_DIR, DEFAULT_GITHUB_WORKFLOW_FILENAME,
    DEFAULT_KUBECONFIG_SECRET_NAME, DEFAULT_REGISTRY_LOGIN_URL_VARIABLE_NAME,
    DEFAULT_REGISTRY_PASS_SECRET_NAME, DEFAULT_REGISTRY_URL_VARIABLE_NAME,
    DEFAULT_REGISTRY_USER_VARIABLE_NAME, DEFAULT_REMOTE_BUILD_WORKFLOW_NAME,
    DEFAULT_WORKFLOW_NAME,
};
pub use inputs::CiInputs;
pub use platform::{CiPlatform, DEFAULT_PLATFORM};
