//! Fieldcheck CLI - run the record validators from the command line.
//!
//! Provides commands for running the fixtures, checking a record file and
//! listing the validator styles.

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{check, fixtures, styles, Session};
use fieldcheck_core::config::Config;
use fieldcheck_core::telemetry;
use fieldcheck_core::FieldcheckError;
use output::OutputFormat;

/// Fieldcheck - one record, four validators
#[derive(Parser)]
#[command(
    name = "fieldcheck",
    version,
    about = "Fieldcheck - one record, four validators",
    long_about = "Runs the matching, fluent, annotated and imperative record validators over \
                  the built-in fixtures or a JSON record and prints their failures.",
    propagate_version = true
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Reference year for the date-of-birth check (defaults to the current year)
    #[arg(long, global = true, env = "FIELDCHECK_YEAR")]
    year: Option<i32>,

    /// Configuration file (toml, yaml or json)
    #[arg(short, long, global = true, env = "FIELDCHECK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run validators over the built-in fixtures
    Fixtures(fixtures::FixturesArgs),

    /// Validate a JSON record read from a file or stdin
    Check(check::CheckArgs),

    /// List the validator styles
    Styles,
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config from environment")?,
    };
    Ok(config)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = load_config(cli.config.as_ref())?;
    if let Some(year) = cli.year {
        config.validation.reference_year = Some(year);
    }

    telemetry::init_logging(&config.logging).context("Failed to initialize logging")?;

    let session = Session {
        policy: config.validation.policy(),
        format: cli.output,
    };
    tracing::debug!(
        floor_year = session.policy.floor_year,
        reference_year = session.policy.reference_year,
        "Resolved date-of-birth policy"
    );

    match cli.command {
        Commands::Fixtures(args) => fixtures::execute(args, &session),
        Commands::Check(args) => check::execute(args, &session),
        Commands::Styles => styles::execute(&session),
    }
}

/// Exit status for failures that carry no error code.
const INTERNAL_FAILURE: u8 = 70;

/// Exit status for a failed run, taken from the first `FieldcheckError` in the chain.
fn exit_status(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FieldcheckError>())
        .map(|error| {
            error.log();
            error.code().exit_code()
        })
        .and_then(|status| u8::try_from(status).ok())
        .unwrap_or(INTERNAL_FAILURE)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::from(exit_status(&e))
        }
    }
}
