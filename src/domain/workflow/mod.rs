//! GitHub Actions workflow document for deploying a function.

mod export;
mod steps;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::CiConfig;

pub use export::FORCE_OVERWRITE_WARNING;

/// Key of the single job in the generated workflow.
pub const DEPLOY_JOB: &str = "deploy";
pub const SELF_HOSTED_RUNNER: &str = "self-hosted";
pub const HOSTED_RUNNER: &str = "ubuntu-latest";

/// Workflow document. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitHubWorkflow {
    pub name: String,
    pub on: WorkflowTriggers,
    pub jobs: BTreeMap<String, Job>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowTriggers {
    pub push: PushTrigger,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_dispatch: Option<WorkflowDispatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushTrigger {
    pub branches: Vec<String>,
}

/// Manual trigger; carries no settings and renders as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowDispatch {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    #[serde(rename = "runs-on")]
    pub runs_on: String,
    pub steps: Vec<Step>,
}

/// A job step: either an action reference (`uses`, optional `with`) or a
/// shell command (`run`). The constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    #[serde(skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    uses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    run: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    with: Option<BTreeMap<String, String>>,
}

impl Step {
    /// Action step. An empty parameter list omits `with` entirely.
    pub fn action<I, K, V>(name: &str, uses: &str, with: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let with: BTreeMap<String, String> =
            with.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            name: name.to_string(),
            uses: Some(uses.to_string()),
            run: None,
            with: if with.is_empty() { None } else { Some(with) },
        }
    }

    pub fn shell(name: &str, run: impl Into<String>) -> Self {
        Self { name: name.to_string(), uses: None, run: Some(run.into()), with: None }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uses(&self) -> Option<&str> {
        self.uses.as_deref()
    }

    pub fn run(&self) -> Option<&str> {
        self.run.as_deref()
    }

    pub fn with(&self) -> Option<&BTreeMap<String, String>> {
        self.with.as_ref()
    }
}

impl GitHubWorkflow {
    /// Build the deploy workflow for a resolved configuration.
    pub fn new(config: &CiConfig) -> Self {
        let mut jobs = BTreeMap::new();
        jobs.insert(
            DEPLOY_JOB.to_string(),
            Job { runs_on: runner_label(config).to_string(), steps: steps::deploy_steps(config) },
        );

        Self { name: config.workflow_name().to_string(), on: triggers(config), jobs }
    }

    pub fn deploy_job(&self) -> Option<&Job> {
        self.jobs.get(DEPLOY_JOB)
    }
}

fn triggers(config: &CiConfig) -> WorkflowTriggers {
    WorkflowTriggers {
        push: PushTrigger { branches: vec![config.branch().to_string()] },
        workflow_dispatch: config.use_workflow_dispatch().then(WorkflowDispatch::default),
    }
}

/// `runs-on` label for the deploy job.
pub fn runner_label(config: &CiConfig) -> &'static str {
    if config.use_self_hosted_runner() { SELF_HOSTED_RUNNER } else { HOSTED_RUNNER }
}
