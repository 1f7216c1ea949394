//! Govalt CLI - inspect and validate filter expressions.
//!
//! This is the main entry point for the govalt CLI application.
//! It uses clap for argument parsing and dispatches to the `lex` and
//! `check` command handlers.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::traits::Command;
use commands::{CheckArgs, CheckCommand, LexArgs, LexCommand};
use config::Config;
use error::{GovaltError, Result};

/// Govalt - a scanner front end for filter expressions
///
/// Govalt tokenizes expressions such as `Order.Total >= 100 && region in ('eu')`
/// and reports lexical problems with their source location.
#[derive(Parser, Debug)]
#[command(name = "govalt")]
#[command(author = "Goval Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and validate filter expressions", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "GOVALT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GOVALT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "GOVALT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the govalt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of an expression
    ///
    /// Every token is listed with its line, column, kind and text.
    /// Diagnostics are written to stderr and do not change the exit status.
    Lex(LexArgs),

    /// Validate an expression
    ///
    /// Exits with status 1 when the scanner reports any problem.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(GovaltError::Diagnostics { count }) => {
            tracing::debug!(count, "expression has problems");
            ExitCode::from(1)
        },
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        },
    }
}

/// Parse arguments, set up logging and configuration, then run the command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| GovaltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Lex(args) => {
            tracing::debug!(command = LexCommand::name(), "running");
            LexCommand::new(args, config)?.execute()
        },
        Commands::Check(args) => {
            tracing::debug!(command = CheckCommand::name(), "running");
            CheckCommand::new(args, config)?.execute()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::common::OutputFormat;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::parse_from(["govalt", "lex", "a > 1"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.source.expression.as_deref(), Some("a > 1"));
            assert!(args.source.file.is_none());
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_with_functions() {
        let cli = Cli::parse_from(["govalt", "lex", "max(a)", "-F", "max", "--function", "min"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.options.functions, vec!["max", "min"]);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_with_format() {
        let cli = Cli::parse_from(["govalt", "lex", "a", "--format", "json"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.options.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_check_with_file() {
        let cli = Cli::parse_from(["govalt", "check", "--file", "rule.expr", "--no-validate"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.source.file, Some(PathBuf::from("rule.expr")));
            assert!(args.options.no_validate);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_rejects_expression_and_file() {
        let result = Cli::try_parse_from(["govalt", "check", "a", "--file", "rule.expr"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_source() {
        let result = Cli::try_parse_from(["govalt", "lex"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "govalt",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/govalt.toml",
            "check",
            "a",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/govalt.toml")));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["govalt", "lex", "a", "--format", "yaml"]);
        assert!(result.is_err());
    }
}
