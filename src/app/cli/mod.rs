//! CLI Adapter.

mod config;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use crate::domain::AppError;

pub use config::CI_CONFIG_FEATURE_FLAG;

#[derive(Parser)]
#[command(name = "func-ci")]
#[command(version)]
#[command(about = "Generate CI/CD workflows that deploy functions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure function deployment
    #[clap(visible_alias = "c")]
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let enabled = config::ci_config_enabled();
    let matches = Cli::command()
        .mut_subcommand("config", |cmd| cmd.mut_subcommand("ci", |ci| ci.hide(!enabled)))
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let result: Result<(), AppError> = match cli.command {
        Commands::Config { command } => {
            config::run_config(command, matches.subcommand_matches("config"), enabled)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
