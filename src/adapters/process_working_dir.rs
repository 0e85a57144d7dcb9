use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::WorkingDir;

/// Working directory of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDir;

impl WorkingDir for ProcessWorkingDir {
    fn working_dir(&self) -> Result<PathBuf, AppError> {
        std::env::current_dir().map_err(|e| AppError::WorkingDirectory(e.to_string()))
    }
}
