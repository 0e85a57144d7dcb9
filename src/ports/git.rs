use std::path::Path;

use crate::domain::AppError;

/// Port for reading repository state.
pub trait Git {
    /// Get the branch currently checked out in the repository at `path`.
    fn current_branch(&self, path: &Path) -> Result<String, AppError>;
}
