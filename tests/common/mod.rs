//! Shared testing harness for `func-ci` integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ISSUE_BRANCH: &str = "issue-778-current-branch";
pub const WORKFLOW_RELATIVE_PATH: &str = ".github/workflows/func-deploy.yaml";

/// Configuration variables that must not leak from the developer's shell into tests.
const FUNC_ENV_VARS: &[&str] = &[
    "FUNC_ENABLE_CI_CONFIG",
    "FUNC_PLATFORM",
    "FUNC_PATH",
    "FUNC_BRANCH",
    "FUNC_WORKFLOW_NAME",
    "FUNC_KUBECONFIG_SECRET_NAME",
    "FUNC_REGISTRY_LOGIN_URL_VARIABLE_NAME",
    "FUNC_REGISTRY_USER_VARIABLE_NAME",
    "FUNC_REGISTRY_PASS_SECRET_NAME",
    "FUNC_REGISTRY_URL_VARIABLE_NAME",
    "FUNC_USE_REGISTRY_LOGIN",
    "FUNC_SELF_HOSTED_RUNNER",
    "FUNC_WORKFLOW_DISPATCH",
    "FUNC_REMOTE",
    "FUNC_FORCE",
    "FUNC_VERBOSE",
];

/// Testing harness providing an isolated function project inside a git repository.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment checked out on [`ISSUE_BRANCH`].
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let ctx = Self { root, work_dir };
        ctx.git(&["init", "--initial-branch=main"]);
        ctx.git(&["checkout", "-b", ISSUE_BRANCH]);
        ctx
    }

    fn git(&self, args: &[&str]) {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Path to the function project used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// A directory outside the git repository.
    pub fn outside_repo(&self) -> PathBuf {
        let dir = self.root.path().join("outside");
        fs::create_dir_all(&dir).expect("Failed to create directory outside the repository");
        dir
    }

    /// Build a `config ci` command with the feature gate enabled.
    pub fn config_ci(&self) -> Command {
        let mut cmd = self.cli_in(self.work_dir());
        cmd.env("FUNC_ENABLE_CI_CONFIG", "true").args(["config", "ci"]);
        cmd
    }

    /// Build a command for invoking the compiled binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("func-ci").expect("Failed to locate func-ci binary");
        cmd.current_dir(dir.as_ref());
        for var in FUNC_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Path of the generated workflow in the work directory.
    pub fn workflow_path(&self) -> PathBuf {
        self.work_dir.join(WORKFLOW_RELATIVE_PATH)
    }

    /// Read the generated workflow file.
    pub fn read_workflow(&self) -> String {
        fs::read_to_string(self.workflow_path()).expect("workflow file should exist")
    }

    /// Parse the generated workflow file.
    pub fn workflow_yaml(&self) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read_workflow()).expect("workflow should be valid YAML")
    }
}
