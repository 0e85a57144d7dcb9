//! Raw configuration inputs, before resolution.

use std::path::PathBuf;

use super::config::{
    DEFAULT_KUBECONFIG_SECRET_NAME, DEFAULT_REGISTRY_LOGIN_URL_VARIABLE_NAME,
    DEFAULT_REGISTRY_PASS_SECRET_NAME, DEFAULT_REGISTRY_URL_VARIABLE_NAME,
    DEFAULT_REGISTRY_USER_VARIABLE_NAME, DEFAULT_WORKFLOW_NAME,
};
use super::platform::DEFAULT_PLATFORM;

/// Values gathered from flags, environment or defaults by the caller.
///
/// The resolver never reads any configuration source itself; everything it
/// needs arrives through this record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiInputs {
    pub platform: String,
    /// Function project path. `None`, empty or `.` means the working directory.
    pub path: Option<PathBuf>,
    /// Branch to trigger on. `None` or empty means the current git branch.
    pub branch: Option<String>,
    pub workflow_name: String,
    /// Whether `workflow_name` came from the user rather than a default.
    pub workflow_name_explicit: bool,
    pub kubeconfig_secret: String,
    pub registry_login_url_var: String,
    pub registry_user_var: String,
    pub registry_pass_secret: String,
    pub registry_url_var: String,
    pub use_registry_login: bool,
    pub use_self_hosted_runner: bool,
    pub use_remote_build: bool,
    pub use_workflow_dispatch: bool,
    pub force: bool,
    pub verbose: bool,
}

impl Default for CiInputs {
    fn default() -> Self {
        Self {
            platform: DEFAULT_PLATFORM.to_string(),
            path: None,
            branch: None,
            workflow_name: DEFAULT_WORKFLOW_NAME.to_string(),
            workflow_name_explicit: false,
            kubeconfig_secret: DEFAULT_KUBECONFIG_SECRET_NAME.to_string(),
            registry_login_url_var: DEFAULT_REGISTRY_LOGIN_URL_VARIABLE_NAME.to_string(),
            registry_user_var: DEFAULT_REGISTRY_USER_VARIABLE_NAME.to_string(),
            registry_pass_secret: DEFAULT_REGISTRY_PASS_SECRET_NAME.to_string(),
            registry_url_var: DEFAULT_REGISTRY_URL_VARIABLE_NAME.to_string(),
            use_registry_login: true,
            use_self_hosted_runner: false,
            use_remote_build: false,
            use_workflow_dispatch: false,
            force: false,
            verbose: false,
        }
    }
}
