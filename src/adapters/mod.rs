pub mod git_command;
pub mod memory_workflow_writer;
pub mod process_working_dir;
pub mod workflow_filesystem;
