use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::WorkflowWriter;

#[cfg_attr(not(unix), allow(dead_code))]
const DIR_MODE: u32 = 0o755;
#[cfg_attr(not(unix), allow(dead_code))]
const FILE_MODE: u32 = 0o644;

/// Filesystem-based workflow writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemWorkflowWriter;

impl FilesystemWorkflowWriter {
    pub fn new() -> Self {
        Self
    }
}

impl WorkflowWriter for FilesystemWorkflowWriter {
    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    fn write(&self, path: &Path, raw: &[u8]) -> Result<(), AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }

        let mut file = open_for_write(path)?;
        file.write_all(raw)?;
        Ok(())
    }
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new().recursive(true).mode(DIR_MODE).create(path).map_err(AppError::from)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path).map_err(AppError::from)
}

#[cfg(unix)]
fn open_for_write(path: &Path) -> Result<fs::File, AppError> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(FILE_MODE)
        .open(path)
        .map_err(AppError::from)
}

#[cfg(not(unix))]
fn open_for_write(path: &Path) -> Result<fs::File, AppError> {
    OpenOptions::new().write(true).create(true).truncate(true).open(path).map_err(AppError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".github/workflows/func-deploy.yaml");
        let writer = FilesystemWorkflowWriter::new();

        assert!(!writer.exists(&path));
        writer.write(&path, b"name: Func Deploy\n").unwrap();

        assert!(writer.exists(&path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "name: Func Deploy\n");
    }

    #[test]
    fn write_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("func-deploy.yaml");
        let writer = FilesystemWorkflowWriter::new();

        writer.write(&path, b"a much longer first version\n").unwrap();
        writer.write(&path, b"second\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second\n");
    }

    #[cfg(unix)]
    #[test]
    fn write_applies_fixed_modes() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let workflows = dir.path().join(".github/workflows");
        let path = workflows.join("func-deploy.yaml");

        FilesystemWorkflowWriter::new().write(&path, b"x").unwrap();

        let file_mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        let dir_mode = fs::metadata(&workflows).unwrap().permissions().mode() & 0o777;
        // umask can only clear bits
        assert_eq!(file_mode & !FILE_MODE, 0);
        assert_eq!(dir_mode & !DIR_MODE, 0);
    }

    #[test]
    fn write_into_file_parent_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join(".github");
        fs::write(&blocker, "not a directory").unwrap();

        let result = FilesystemWorkflowWriter::new()
            .write(&blocker.join("workflows/func-deploy.yaml"), b"x");

        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
