//! Plain-text reports for `config ci`.
//!
//! Every block is formatted up front and handed to the sink in one write, so
//! the first failing write stops the report.

use std::io::{self, Write};

use crate::domain::CiConfig;
use crate::domain::ci::reference::{secrets_prefix, vars_prefix};
use crate::domain::workflow::runner_label;

/// Configuration summary shown before export in verbose mode.
pub fn print_configuration(w: &mut impl Write, config: &CiConfig) -> io::Result<()> {
    let main = format!(
        "
GitHub Workflow Configuration
  Workflow filepath:  {}
  Workflow name:      {}
  Branch:             {}
  Build:              {}
  Runner:             {}
  Registry login:     {}
  Manual dispatch:    {}
  Workflow overwrite: {}
",
        config.output_path().display(),
        config.workflow_name(),
        config.branch(),
        build_label(config),
        runner_label(config),
        enabled_or_disabled(config.use_registry_login()),
        enabled_or_disabled(config.use_workflow_dispatch()),
        enabled_or_disabled(config.force()),
    );
    w.write_all(main.as_bytes())?;

    let required = if config.use_registry_login() {
        let [a, b, c, d, e] = required_references(config);
        format!(
            "
  Required Secrets & Variables:
    {a}
    {b}
    {c}
    {d}
    {e}
"
        )
    } else {
        format!("  Required secret:    {}\n", secrets_prefix(config.kubeconfig_secret()))
    };
    w.write_all(required.as_bytes())
}

/// Follow-up instructions shown after a successful export.
pub fn print_post_export_message(w: &mut impl Write, config: &CiConfig) -> io::Result<()> {
    let path = config.output_path();
    let message = if config.use_registry_login() {
        let [a, b, c, d, e] = required_references(config);
        format!(
            "
GitHub Workflow created at: {}

Create the following Secrets & Variables on github.com:
  {a}
  {b}
  {c}
  {d}
  {e}
",
            path.display()
        )
    } else {
        format!(
            "
GitHub Workflow created at: {}

Create the following Secret on github.com: {}
",
            path.display(),
            secrets_prefix(config.kubeconfig_secret())
        )
    };
    w.write_all(message.as_bytes())
}

/// Secrets first, then variables.
fn required_references(config: &CiConfig) -> [String; 5] {
    [
        secrets_prefix(config.kubeconfig_secret()),
        secrets_prefix(config.registry_pass_secret()),
        vars_prefix(config.registry_login_url_var()),
        vars_prefix(config.registry_user_var()),
        vars_prefix(config.registry_url_var()),
    ]
}

fn build_label(config: &CiConfig) -> &'static str {
    if config.use_remote_build() { "remote" } else { "host" }
}

fn enabled_or_disabled(value: bool) -> &'static str {
    if value { "enabled" } else { "disabled" }
}
