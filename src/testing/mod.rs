pub mod ports;

pub use ports::{FailingSink, StubGit, StubWorkingDir};

use crate::domain::{CiConfig, CiInputs};

pub const STUB_BRANCH: &str = "issue-778-current-branch";
pub const STUB_WORKING_DIR: &str = "/work/fn";

/// Resolve inputs against collaborators that always succeed.
pub fn resolve_config(inputs: CiInputs) -> CiConfig {
    CiConfig::resolve(inputs, &StubGit::ok(STUB_BRANCH), &StubWorkingDir::ok(STUB_WORKING_DIR))
        .expect("stub collaborators never fail")
}
