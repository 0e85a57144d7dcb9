use std::path::Path;
use std::process::{Command, Output};

use crate::domain::AppError;
use crate::ports::Git;

/// Git adapter backed by the `git` executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCommandAdapter;

impl GitCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn run_output(&self, args: &[&str], cwd: &Path) -> Result<Output, AppError> {
        let mut command = Command::new("git");
        command.args(args);
        command.current_dir(cwd);

        let output = command.output().map_err(|e| AppError::Git {
            command: format!("git {}", args.join(" ")),
            details: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::Git {
                command: format!("git {}", args.join(" ")),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(output)
    }

    fn run(&self, args: &[&str], cwd: &Path) -> Result<String, AppError> {
        let output = self.run_output(args, cwd)?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Git for GitCommandAdapter {
    fn current_branch(&self, path: &Path) -> Result<String, AppError> {
        let args = ["branch", "--show-current"];
        let branch = self.run(&args, path)?;
        if branch.is_empty() {
            return Err(AppError::Git {
                command: format!("git {}", args.join(" ")),
                details: "HEAD is detached; pass --branch explicitly".to_string(),
            });
        }
        Ok(branch)
    }
}
