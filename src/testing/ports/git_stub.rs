use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Git;

/// Git double returning a fixed branch or failure and recording lookups.
pub struct StubGit {
    result: Result<String, String>,
    paths: Mutex<Vec<PathBuf>>,
}

impl StubGit {
    pub fn ok(branch: &str) -> Self {
        Self { result: Ok(branch.to_string()), paths: Mutex::new(Vec::new()) }
    }

    pub fn failing(details: &str) -> Self {
        Self { result: Err(details.to_string()), paths: Mutex::new(Vec::new()) }
    }

    /// Paths passed to `current_branch`, in call order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.paths.lock().unwrap().clone()
    }
}

impl Git for StubGit {
    fn current_branch(&self, path: &Path) -> Result<String, AppError> {
        self.paths.lock().unwrap().push(path.to_path_buf());
        self.result.clone().map_err(|details| AppError::Git {
            command: "git branch --show-current".to_string(),
            details,
        })
    }
}
