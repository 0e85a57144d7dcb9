//! `config ci`: generate the function deploy workflow.

pub mod printer;

use std::io::Write;
use std::path::PathBuf;

use log::debug;

use crate::app::AppContext;
use crate::domain::{AppError, CiConfig, CiInputs, GitHubWorkflow};
use crate::ports::{Git, WorkflowWriter, WorkingDir};

/// Result of a successful `config ci` run.
#[derive(Debug, Clone)]
pub struct ConfigCiOutcome {
    /// Where the workflow file was written.
    pub workflow_path: PathBuf,
    pub config: CiConfig,
}

/// Resolve configuration, build the workflow and write it.
///
/// Verbose runs print the configuration summary before exporting; other
/// runs print the post-export instructions after it.
pub fn execute<W, G, D>(
    ctx: &AppContext<W, G, D>,
    inputs: CiInputs,
    out: &mut impl Write,
) -> Result<ConfigCiOutcome, AppError>
where
    W: WorkflowWriter,
    G: Git,
    D: WorkingDir,
{
    let config = CiConfig::resolve(inputs, ctx.git(), ctx.working_dir())?;
    debug!("Resolved CI configuration: {:?}", config);

    let workflow = GitHubWorkflow::new(&config);

    if config.verbose() {
        printer::print_configuration(out, &config)?;
    }

    let workflow_path = config.workflow_filepath();
    workflow.export(&workflow_path, ctx.writer(), config.force(), out)?;

    if !config.verbose() {
        printer::print_post_export_message(out, &config)?;
    }

    Ok(ConfigCiOutcome { workflow_path, config })
}
