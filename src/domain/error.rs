use std::io;

use thiserror::Error;

/// Library-wide error type for func-ci operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Requested CI/CD platform has no workflow generator.
    #[error("{0} support is not implemented")]
    UnsupportedPlatform(String),

    /// Workflow file already exists and overwriting was not forced.
    #[error("existing GitHub workflow detected, overwrite using the --force option")]
    WorkflowExists,

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    Git { command: String, details: String },

    /// Working directory could not be determined.
    #[error("Failed to determine working directory: {0}")]
    WorkingDirectory(String),

    /// YAML encoding failure.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Command is behind a feature gate that is not enabled.
    #[error("This command is disabled. Set {0}=true to enable it.")]
    FeatureDisabled(String),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers that branch on error classes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::UnsupportedPlatform(_) | AppError::FeatureDisabled(_) => {
                io::ErrorKind::Unsupported
            }
            AppError::WorkflowExists => io::ErrorKind::AlreadyExists,
            AppError::Yaml(_) => io::ErrorKind::InvalidData,
            AppError::WorkingDirectory(_) => io::ErrorKind::NotFound,
            AppError::Git { .. } => io::ErrorKind::Other,
        }
    }

    /// Whether the error is the overwrite-protection sentinel.
    pub fn is_workflow_exists(&self) -> bool {
        matches!(self, AppError::WorkflowExists)
    }
}
