//! Ordered step composition for the deploy job.

use super::Step;
use crate::domain::CiConfig;
use crate::domain::ci::reference::{secret_ref, variable_ref};

const CHECKOUT_ACTION: &str = "actions/checkout@v4";
const K8S_CONTEXT_ACTION: &str = "azure/k8s-set-context@v4";
const K8S_CONTEXT_METHOD: &str = "kubeconfig";
const REGISTRY_LOGIN_ACTION: &str = "docker/login-action@v3";
const FUNC_CLI_INSTALL_ACTION: &str = "functions-dev/action@main";
const FUNC_CLI_NAME: &str = "func";
pub(crate) const DEFAULT_FUNC_CLI_VERSION: &str = "knative-v1.21.0";

/// checkout, cluster context, registry login (optional), CLI install, deploy.
pub(crate) fn deploy_steps(config: &CiConfig) -> Vec<Step> {
    let mut steps = vec![checkout_step(), k8s_context_step(config)];
    if config.use_registry_login() {
        steps.push(registry_login_step(config));
    }
    steps.push(func_cli_install_step());
    steps.push(func_deploy_step(config));
    steps
}

fn checkout_step() -> Step {
    Step::action("Checkout code", CHECKOUT_ACTION, Vec::<(&str, String)>::new())
}

fn k8s_context_step(config: &CiConfig) -> Step {
    Step::action(
        "Setup Kubernetes context",
        K8S_CONTEXT_ACTION,
        [
            ("method", K8S_CONTEXT_METHOD.to_string()),
            ("kubeconfig", secret_ref(config.kubeconfig_secret())),
        ],
    )
}

fn registry_login_step(config: &CiConfig) -> Step {
    Step::action(
        "Login to container registry",
        REGISTRY_LOGIN_ACTION,
        [
            ("registry", variable_ref(config.registry_login_url_var())),
            ("username", variable_ref(config.registry_user_var())),
            ("password", secret_ref(config.registry_pass_secret())),
        ],
    )
}

fn func_cli_install_step() -> Step {
    Step::action(
        "Install func cli",
        FUNC_CLI_INSTALL_ACTION,
        [("version", DEFAULT_FUNC_CLI_VERSION), ("name", FUNC_CLI_NAME)],
    )
}

fn func_deploy_step(config: &CiConfig) -> Step {
    let mut command = String::from("func deploy");
    if config.use_remote_build() {
        command.push_str(" --remote");
    }

    let registry = if config.use_registry_login() {
        format!(
            "{}/{}",
            variable_ref(config.registry_login_url_var()),
            variable_ref(config.registry_user_var())
        )
    } else {
        variable_ref(config.registry_url_var())
    };
    command.push_str(&format!(" --registry={} -v", registry));

    Step::shell("Deploy function", command)
}
