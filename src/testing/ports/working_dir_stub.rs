use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::AppError;
use crate::ports::WorkingDir;

/// Working-directory double returning a fixed path or failure.
pub struct StubWorkingDir {
    result: Result<PathBuf, String>,
    calls: AtomicUsize,
}

impl StubWorkingDir {
    pub fn ok(dir: &str) -> Self {
        Self { result: Ok(PathBuf::from(dir)), calls: AtomicUsize::new(0) }
    }

    pub fn failing(message: &str) -> Self {
        Self { result: Err(message.to_string()), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl WorkingDir for StubWorkingDir {
    fn working_dir(&self) -> Result<PathBuf, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map_err(AppError::WorkingDirectory)
    }
}
