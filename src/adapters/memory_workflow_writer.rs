use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::WorkflowWriter;

#[derive(Debug, Default)]
struct Buffer {
    path: Option<PathBuf>,
    content: Vec<u8>,
}

/// In-memory workflow writer.
///
/// Holds a single buffer: every write replaces it, and any path "exists"
/// once the buffer has content. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferWorkflowWriter {
    buffer: Arc<Mutex<Buffer>>,
}

impl BufferWorkflowWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the last write.
    pub fn path(&self) -> Option<PathBuf> {
        self.lock().path.clone()
    }

    /// Buffer content as text.
    pub fn content(&self) -> String {
        String::from_utf8_lossy(&self.lock().content).into_owned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Buffer> {
        // A poisoned buffer is still a valid buffer.
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl WorkflowWriter for BufferWorkflowWriter {
    fn exists(&self, _path: &Path) -> bool {
        !self.lock().content.is_empty()
    }

    fn write(&self, path: &Path, raw: &[u8]) -> Result<(), AppError> {
        let mut buffer = self.lock();
        buffer.path = Some(path.to_path_buf());
        buffer.content.clear();
        buffer.content.extend_from_slice(raw);
        Ok(())
    }
}
