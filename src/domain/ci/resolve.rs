//! Value resolution: explicit input first, computed fallback second.

use std::path::{Path, PathBuf};

use log::debug;

use super::config::{DEFAULT_REMOTE_BUILD_WORKFLOW_NAME, DEFAULT_WORKFLOW_NAME};
use super::platform::CiPlatform;
use crate::domain::AppError;
use crate::ports::{Git, WorkingDir};

pub(crate) fn resolve_platform(raw: &str) -> Result<CiPlatform, AppError> {
    raw.parse()
}

pub(crate) fn resolve_path(
    explicit: Option<&Path>,
    working_dir: &impl WorkingDir,
) -> Result<PathBuf, AppError> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty() && *p != Path::new(".")) {
        debug!("Using explicit function path {}", path.display());
        return Ok(path.to_path_buf());
    }

    let cwd = working_dir.working_dir()?;
    debug!("Using working directory {} as function path", cwd.display());
    Ok(cwd)
}

pub(crate) fn resolve_branch(
    explicit: Option<&str>,
    path: &Path,
    git: &impl Git,
) -> Result<String, AppError> {
    if let Some(branch) = explicit.filter(|b| !b.is_empty()) {
        debug!("Using explicit branch '{}'", branch);
        return Ok(branch.to_string());
    }

    let branch = git.current_branch(path)?;
    debug!("Using current git branch '{}'", branch);
    Ok(branch)
}

/// An explicit name is used verbatim, even when it equals a default.
pub(crate) fn resolve_workflow_name(raw: &str, explicit: bool, remote_build: bool) -> String {
    if explicit {
        return raw.to_string();
    }

    if remote_build {
        return DEFAULT_REMOTE_BUILD_WORKFLOW_NAME.to_string();
    }

    DEFAULT_WORKFLOW_NAME.to_string()
}
