use std::io::Write;
use std::path::Path;

use log::{info, warn};

use super::GitHubWorkflow;
use crate::domain::AppError;
use crate::ports::WorkflowWriter;

pub const FORCE_OVERWRITE_WARNING: &str =
    "WARNING: --force flag is set, overwriting existing GitHub Workflow file";

impl GitHubWorkflow {
    /// Render the workflow as YAML with two-space indentation.
    pub fn to_yaml(&self) -> Result<Vec<u8>, AppError> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml.into_bytes())
    }

    /// Write the workflow to `path` unless a file exists and `force` is unset.
    ///
    /// The overwrite warning on `messages` is advisory; failing to print it
    /// does not abort the export.
    pub fn export(
        &self,
        path: &Path,
        writer: &impl WorkflowWriter,
        force: bool,
        messages: &mut impl Write,
    ) -> Result<(), AppError> {
        let exists = writer.exists(path);
        if exists && !force {
            return Err(AppError::WorkflowExists);
        }

        if exists {
            warn!("Overwriting existing workflow at {}", path.display());
            let _ = writeln!(messages, "{}", FORCE_OVERWRITE_WARNING);
        }

        let raw = self.to_yaml()?;
        writer.write(path, &raw)?;
        info!("Wrote GitHub workflow to {}", path.display());
        Ok(())
    }
}
