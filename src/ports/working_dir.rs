use std::path::PathBuf;

use crate::domain::AppError;

/// Port for discovering the directory the tool was invoked from.
pub trait WorkingDir {
    fn working_dir(&self) -> Result<PathBuf, AppError>;
}
