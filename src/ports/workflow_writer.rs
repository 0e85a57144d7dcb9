use std::path::Path;

use crate::domain::AppError;

/// Port for persisting a generated workflow file.
pub trait WorkflowWriter {
    /// Whether something is already stored at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Store `raw` at `path`, creating missing parent directories.
    fn write(&self, path: &Path, raw: &[u8]) -> Result<(), AppError>;
}
