mod git;
mod workflow_writer;
mod working_dir;

pub use git::Git;
pub use workflow_writer::WorkflowWriter;
pub use working_dir::WorkingDir;
