//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::io::Write;

use crate::adapters::git_command::GitCommandAdapter;
use crate::adapters::process_working_dir::ProcessWorkingDir;
use crate::adapters::workflow_filesystem::FilesystemWorkflowWriter;
use crate::app::{AppContext, commands::config_ci};
use crate::ports::{Git, WorkflowWriter, WorkingDir};

pub use crate::app::commands::config_ci::ConfigCiOutcome;
pub use crate::domain::{AppError, CiConfig, CiInputs};

/// Create an `AppContext` backed by the filesystem, `git` and the process working directory.
fn create_context() -> AppContext<FilesystemWorkflowWriter, GitCommandAdapter, ProcessWorkingDir> {
    AppContext::new(FilesystemWorkflowWriter::new(), GitCommandAdapter::new(), ProcessWorkingDir)
}

/// Generate the function deploy workflow and report to `out`.
pub fn config_ci(inputs: CiInputs, out: &mut impl Write) -> Result<ConfigCiOutcome, AppError> {
    config_ci::execute(&create_context(), inputs, out)
}

/// Generate the function deploy workflow with caller-supplied collaborators.
pub fn config_ci_with<W, G, D>(
    ctx: &AppContext<W, G, D>,
    inputs: CiInputs,
    out: &mut impl Write,
) -> Result<ConfigCiOutcome, AppError>
where
    W: WorkflowWriter,
    G: Git,
    D: WorkingDir,
{
    config_ci::execute(ctx, inputs, out)
}
