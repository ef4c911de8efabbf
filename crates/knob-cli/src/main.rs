//! Knob - scoped configuration
//!
//! Usage:
//!   knob config get <key>              # Read a merged value
//!   knob config set <key>=<value>      # Write to the project store
//!   knob config list --config user     # List the user store
//!   knob config location               # Print the project store path

mod render;

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use knob_core::commands::{ConfigCommand, ConfigOptions};
use knob_core::error::ConfigError;
use knob_core::types::ConfigScope;

#[derive(Parser)]
#[command(name = "knob")]
#[command(about = "Scoped key/value configuration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read and write user and project configuration
    ///
    /// Subcommands: get, pick, set, delete (del, rm), list (ls), edit, location
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    /// Subcommand followed by its arguments
    #[arg(value_name = "SUBCOMMAND")]
    args: Vec<String>,

    /// Configuration scope
    ///
    /// - all (default): project values overlaid on user values
    /// - user: the user store only
    /// - project: the project store only
    #[arg(
        long = "config",
        value_name = "SCOPE",
        value_parser = ConfigScope::from_str,
        default_value_t = ConfigScope::All
    )]
    scope: ConfigScope,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
enum OutputFormat {
    /// Plain values and key=value lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}

fn main() -> ExitCode {
    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run_cli(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run_cli(command: Commands) -> Result<()> {
    match command {
        Commands::Config(args) => run_config(args),
    }
}

fn run_config(args: ConfigArgs) -> Result<()> {
    let cmd = ConfigCommand::with_defaults()?;
    let options = ConfigOptions::new().with_scope(args.scope);

    let output = cmd.run(&args.args, &options)?;
    if let Some(text) = render::render(&output, args.format)? {
        println!("{text}");
    }
    Ok(())
}

fn report_error(err: &anyhow::Error) {
    eprintln!("Error: {err:#}");

    if let Some(usage) = err.downcast_ref::<ConfigError>() {
        if let Some(options) = usage.valid_options() {
            eprintln!("Valid subcommands: {}", options.join(", "));
        }
        if let Some(code) = usage.code() {
            eprintln!("Code: {code}");
        }
        tracing::debug!(found = ?usage.found(), "usage error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_scope_defaults_to_all() {
        let cli = Cli::try_parse_from(["knob", "config", "get", "color"]).unwrap();
        let Commands::Config(args) = cli.command;
        assert_eq!(args.scope, ConfigScope::All);
        assert_eq!(args.args, vec!["get", "color"]);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn config_flag_selects_scope() {
        let cli =
            Cli::try_parse_from(["knob", "config", "list", "--config", "user", "-f", "json"])
                .unwrap();
        let Commands::Config(args) = cli.command;
        assert_eq!(args.scope, ConfigScope::User);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn config_flag_accepts_equals_form() {
        let cli = Cli::try_parse_from(["knob", "config", "location", "--config=project"]).unwrap();
        let Commands::Config(args) = cli.command;
        assert_eq!(args.scope, ConfigScope::Project);
    }

    #[test]
    fn missing_subcommand_reaches_the_router() {
        let cli = Cli::try_parse_from(["knob", "config"]).unwrap();
        let Commands::Config(args) = cli.command;
        assert!(args.args.is_empty());
    }

    #[test]
    fn unknown_scope_is_rejected() {
        let err = Cli::try_parse_from(["knob", "config", "get", "--config", "global"])
            .err()
            .unwrap();
        assert!(err.to_string().contains("Invalid config scope"));
    }

    #[test]
    fn config_flag_is_case_insensitive() {
        let cli = Cli::try_parse_from(["knob", "config", "list", "--config", "USER"]).unwrap();
        let Commands::Config(args) = cli.command;
        assert_eq!(args.scope, ConfigScope::User);
    }
}
