//! Config command implementation.

use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;

use clap::builder::{BoolishValueParser, OsStringValueParser, TypedValueParser};
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, ArgMatches, Args, Command, Subcommand};

use crate::domain::AppError;
use crate::domain::ci::{
    CiInputs, DEFAULT_KUBECONFIG_SECRET_NAME, DEFAULT_PLATFORM,
    DEFAULT_REGISTRY_LOGIN_URL_VARIABLE_NAME, DEFAULT_REGISTRY_PASS_SECRET_NAME,
    DEFAULT_REGISTRY_URL_VARIABLE_NAME, DEFAULT_REGISTRY_USER_VARIABLE_NAME, DEFAULT_WORKFLOW_NAME,
};

/// Environment variable gating the `config ci` subcommand.
pub const CI_CONFIG_FEATURE_FLAG: &str = "FUNC_ENABLE_CI_CONFIG";

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate a GitHub Actions workflow that deploys the function on push
    Ci(CiArgs),
}

#[derive(Debug, Args)]
pub struct CiArgs {
    /// CI/CD platform to generate the workflow for
    #[arg(long, env = "FUNC_PLATFORM", default_value = DEFAULT_PLATFORM)]
    platform: String,

    /// Path to the function project (defaults to the current directory)
    #[arg(
        short,
        long,
        env = "FUNC_PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    path: Option<PathBuf>,

    /// Branch that triggers the workflow (defaults to the current git branch)
    #[arg(long, env = "FUNC_BRANCH")]
    branch: Option<String>,

    /// Display name of the workflow
    #[arg(long, env = "FUNC_WORKFLOW_NAME", default_value = DEFAULT_WORKFLOW_NAME)]
    workflow_name: String,

    /// Secret holding the cluster kubeconfig
    #[arg(long, env = "FUNC_KUBECONFIG_SECRET_NAME", default_value = DEFAULT_KUBECONFIG_SECRET_NAME)]
    kubeconfig_secret_name: String,

    /// Variable holding the registry login URL
    #[arg(
        long,
        env = "FUNC_REGISTRY_LOGIN_URL_VARIABLE_NAME",
        default_value = DEFAULT_REGISTRY_LOGIN_URL_VARIABLE_NAME
    )]
    registry_login_url_variable_name: String,

    /// Variable holding the registry username
    #[arg(
        long,
        env = "FUNC_REGISTRY_USER_VARIABLE_NAME",
        default_value = DEFAULT_REGISTRY_USER_VARIABLE_NAME
    )]
    registry_user_variable_name: String,

    /// Secret holding the registry password
    #[arg(
        long,
        env = "FUNC_REGISTRY_PASS_SECRET_NAME",
        default_value = DEFAULT_REGISTRY_PASS_SECRET_NAME
    )]
    registry_pass_secret_name: String,

    /// Variable holding the registry URL used without registry login
    #[arg(
        long,
        env = "FUNC_REGISTRY_URL_VARIABLE_NAME",
        default_value = DEFAULT_REGISTRY_URL_VARIABLE_NAME
    )]
    registry_url_variable_name: String,

    /// Log in to the container registry before deploying
    #[arg(
        long,
        env = "FUNC_USE_REGISTRY_LOGIN",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = true,
        default_missing_value = "true",
        value_parser = BoolishOrDefault(true)
    )]
    use_registry_login: bool,

    /// Run the workflow on a self-hosted runner
    #[arg(
        long,
        visible_alias = "use-self-hosted-runner",
        env = "FUNC_SELF_HOSTED_RUNNER",
        value_parser = BoolishOrDefault(false)
    )]
    self_hosted_runner: bool,

    /// Allow triggering the workflow manually
    #[arg(long, env = "FUNC_WORKFLOW_DISPATCH", value_parser = BoolishOrDefault(false))]
    workflow_dispatch: bool,

    /// Build the function on the cluster instead of the runner
    #[arg(long, env = "FUNC_REMOTE", value_parser = BoolishOrDefault(false))]
    remote: bool,

    /// Overwrite an existing workflow file
    #[arg(short, long, env = "FUNC_FORCE", value_parser = BoolishOrDefault(false))]
    force: bool,

    /// Print the workflow configuration instead of the post-export message
    #[arg(short, long, env = "FUNC_VERBOSE", value_parser = BoolishOrDefault(false))]
    verbose: bool,
}

impl CiArgs {
    /// Convert parsed arguments into domain inputs. Variables that are set
    /// but empty count as unset and fall back to the defaults.
    fn into_inputs(self, matches: Option<&ArgMatches>) -> CiInputs {
        let workflow_name_explicit = workflow_name_explicit(matches)
            && !empty_env_value(matches, "workflow_name", &self.workflow_name);

        CiInputs {
            platform: or_default(matches, "platform", self.platform, DEFAULT_PLATFORM),
            path: self.path,
            branch: self.branch,
            workflow_name: or_default(
                matches,
                "workflow_name",
                self.workflow_name,
                DEFAULT_WORKFLOW_NAME,
            ),
            workflow_name_explicit,
            kubeconfig_secret: or_default(
                matches,
                "kubeconfig_secret_name",
                self.kubeconfig_secret_name,
                DEFAULT_KUBECONFIG_SECRET_NAME,
            ),
            registry_login_url_var: or_default(
                matches,
                "registry_login_url_variable_name",
                self.registry_login_url_variable_name,
                DEFAULT_REGISTRY_LOGIN_URL_VARIABLE_NAME,
            ),
            registry_user_var: or_default(
                matches,
                "registry_user_variable_name",
                self.registry_user_variable_name,
                DEFAULT_REGISTRY_USER_VARIABLE_NAME,
            ),
            registry_pass_secret: or_default(
                matches,
                "registry_pass_secret_name",
                self.registry_pass_secret_name,
                DEFAULT_REGISTRY_PASS_SECRET_NAME,
            ),
            registry_url_var: or_default(
                matches,
                "registry_url_variable_name",
                self.registry_url_variable_name,
                DEFAULT_REGISTRY_URL_VARIABLE_NAME,
            ),
            use_registry_login: self.use_registry_login,
            use_self_hosted_runner: self.self_hosted_runner,
            use_remote_build: self.remote,
            use_workflow_dispatch: self.workflow_dispatch,
            force: self.force,
            verbose: self.verbose,
        }
    }
}

/// Boolean spellings accepted by `BoolishValueParser`; an empty value means the default.
#[derive(Clone, Copy)]
struct BoolishOrDefault(bool);

impl TypedValueParser for BoolishOrDefault {
    type Value = bool;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        if value.is_empty() {
            return Ok(self.0);
        }
        BoolishValueParser::new().parse_ref(cmd, arg, value)
    }
}

fn empty_env_value(matches: Option<&ArgMatches>, id: &str, value: &str) -> bool {
    value.is_empty()
        && matches!(matches.and_then(|m| m.value_source(id)), Some(ValueSource::EnvVariable))
}

fn or_default(matches: Option<&ArgMatches>, id: &str, value: String, default: &str) -> String {
    if empty_env_value(matches, id, &value) { default.to_string() } else { value }
}

/// Whether the `config ci` feature gate is switched on in the environment.
pub fn ci_config_enabled() -> bool {
    std::env::var(CI_CONFIG_FEATURE_FLAG).is_ok_and(|value| is_truthy(&value))
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// A workflow name counts as explicit when it came from a flag or the environment.
fn workflow_name_explicit(matches: Option<&ArgMatches>) -> bool {
    matches!(
        matches.and_then(|m| m.value_source("workflow_name")),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

pub fn run_config(
    command: ConfigCommands,
    matches: Option<&ArgMatches>,
    enabled: bool,
) -> Result<(), AppError> {
    match command {
        ConfigCommands::Ci(args) => {
            if !enabled {
                return Err(AppError::FeatureDisabled(CI_CONFIG_FEATURE_FLAG.to_string()));
            }
            let inputs = args.into_inputs(matches.and_then(|m| m.subcommand_matches("ci")));

            let stdout = io::stdout();
            let mut out = stdout.lock();
            crate::app::api::config_ci(inputs, &mut out)?;
            Ok(())
        }
    }
}
