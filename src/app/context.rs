use crate::ports::{Git, WorkflowWriter, WorkingDir};

/// Application context holding dependencies for command execution.
pub struct AppContext<W: WorkflowWriter, G: Git, D: WorkingDir> {
    writer: W,
    git: G,
    working_dir: D,
}

impl<W: WorkflowWriter, G: Git, D: WorkingDir> AppContext<W, G, D> {
    /// Create a new application context.
    pub fn new(writer: W, git: G, working_dir: D) -> Self {
        Self { writer, git, working_dir }
    }

    /// Get a reference to the workflow writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Get a reference to the git port.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Get a reference to the working-directory port.
    pub fn working_dir(&self) -> &D {
        &self.working_dir
    }
}
