//! Resolved, read-only CI workflow configuration.

use std::path::{Path, PathBuf};

use super::inputs::CiInputs;
use super::platform::CiPlatform;
use super::resolve::{resolve_branch, resolve_path, resolve_platform, resolve_workflow_name};
use crate::domain::AppError;
use crate::ports::{Git, WorkingDir};

pub const DEFAULT_GITHUB_WORKFLOW_DIR: &str = ".github/workflows";
pub const DEFAULT_GITHUB_WORKFLOW_FILENAME: &str = "func-deploy.yaml";

pub const DEFAULT_WORKFLOW_NAME: &str = "Func Deploy";
pub const DEFAULT_REMOTE_BUILD_WORKFLOW_NAME: &str = "Remote Func Deploy";

pub const DEFAULT_KUBECONFIG_SECRET_NAME: &str = "KUBECONFIG";
pub const DEFAULT_REGISTRY_LOGIN_URL_VARIABLE_NAME: &str = "REGISTRY_LOGIN_URL";
pub const DEFAULT_REGISTRY_USER_VARIABLE_NAME: &str = "REGISTRY_USERNAME";
pub const DEFAULT_REGISTRY_PASS_SECRET_NAME: &str = "REGISTRY_PASSWORD";
pub const DEFAULT_REGISTRY_URL_VARIABLE_NAME: &str = "REGISTRY_URL";

/// Snapshot of every value the workflow generator needs.
///
/// Built once per invocation by [`CiConfig::resolve`]; all accessors are plain reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiConfig {
    platform: CiPlatform,
    github_workflow_dir: String,
    github_workflow_filename: String,
    path: PathBuf,
    branch: String,
    workflow_name: String,
    kubeconfig_secret: String,
    registry_login_url_var: String,
    registry_user_var: String,
    registry_pass_secret: String,
    registry_url_var: String,
    use_registry_login: bool,
    use_self_hosted_runner: bool,
    use_remote_build: bool,
    use_workflow_dispatch: bool,
    force: bool,
    verbose: bool,
}

impl CiConfig {
    /// Resolve inputs into a configuration.
    ///
    /// The platform check runs first; path resolution precedes branch
    /// resolution because the branch lookup needs the resolved path.
    pub fn resolve(
        inputs: CiInputs,
        git: &impl Git,
        working_dir: &impl WorkingDir,
    ) -> Result<Self, AppError> {
        let platform = resolve_platform(&inputs.platform)?;
        let path = resolve_path(inputs.path.as_deref(), working_dir)?;
        let branch = resolve_branch(inputs.branch.as_deref(), &path, git)?;
        let workflow_name = resolve_workflow_name(
            &inputs.workflow_name,
            inputs.workflow_name_explicit,
            inputs.use_remote_build,
        );

        Ok(Self {
            platform,
            github_workflow_dir: DEFAULT_GITHUB_WORKFLOW_DIR.to_string(),
            github_workflow_filename: DEFAULT_GITHUB_WORKFLOW_FILENAME.to_string(),
            path,
            branch,
            workflow_name,
            kubeconfig_secret: inputs.kubeconfig_secret,
            registry_login_url_var: inputs.registry_login_url_var,
            registry_user_var: inputs.registry_user_var,
            registry_pass_secret: inputs.registry_pass_secret,
            registry_url_var: inputs.registry_url_var,
            use_registry_login: inputs.use_registry_login,
            use_self_hosted_runner: inputs.use_self_hosted_runner,
            use_remote_build: inputs.use_remote_build,
            use_workflow_dispatch: inputs.use_workflow_dispatch,
            force: inputs.force,
            verbose: inputs.verbose,
        })
    }

    /// Workflow file location relative to a function root.
    pub fn output_path(&self) -> PathBuf {
        Path::new(&self.github_workflow_dir).join(&self.github_workflow_filename)
    }

    /// Workflow file location under the resolved function path.
    pub fn workflow_filepath(&self) -> PathBuf {
        self.path.join(self.output_path())
    }

    pub fn platform(&self) -> CiPlatform {
        self.platform
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    pub fn kubeconfig_secret(&self) -> &str {
        &self.kubeconfig_secret
    }

    pub fn registry_login_url_var(&self) -> &str {
        &self.registry_login_url_var
    }

    pub fn registry_user_var(&self) -> &str {
        &self.registry_user_var
    }

    pub fn registry_pass_secret(&self) -> &str {
        &self.registry_pass_secret
    }

    pub fn registry_url_var(&self) -> &str {
        &self.registry_url_var
    }

    pub fn use_registry_login(&self) -> bool {
        self.use_registry_login
    }

    pub fn use_self_hosted_runner(&self) -> bool {
        self.use_self_hosted_runner
    }

    pub fn use_remote_build(&self) -> bool {
        self.use_remote_build
    }

    pub fn use_workflow_dispatch(&self) -> bool {
        self.use_workflow_dispatch
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
