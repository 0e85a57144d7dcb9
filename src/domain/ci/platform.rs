use std::str::FromStr;

use crate::domain::AppError;

/// Identifier of the only CI/CD platform with a workflow generator.
pub const DEFAULT_PLATFORM: &str = "github";

/// CI/CD platform a workflow is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiPlatform {
    GitHub,
}

impl FromStr for CiPlatform {
    type Err = AppError;

    /// Matching is case-insensitive; anything else is rejected with the raw value.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            DEFAULT_PLATFORM => Ok(CiPlatform::GitHub),
            _ => Err(AppError::UnsupportedPlatform(raw.to_string())),
        }
    }
}
