//! Validate a record read from a JSON file or stdin.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tabled::Tabled;

use fieldcheck_core::{parse_record, FieldcheckError};
use fieldcheck_core::validation::FieldFailure;

use super::{Session, StyleArg};
use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct CheckArgs {
    /// JSON record file, or `-` for stdin. A literal `null` is the absent record.
    pub input: PathBuf,

    /// Only run this style
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,
}

#[derive(Debug, Serialize)]
struct StyleReport {
    style: &'static str,
    valid: bool,
    failures: Vec<FieldFailure>,
}

#[derive(Debug, Serialize, Tabled)]
struct FailureRow {
    #[tabled(rename = "Style")]
    style: &'static str,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Kind")]
    kind: String,
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(FieldcheckError::from)
            .context("Failed to read record from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .map_err(FieldcheckError::from)
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn build_reports(json: &str, args: &CheckArgs, session: &Session) -> Result<Vec<StyleReport>> {
    let record = parse_record(json).context("Failed to parse record")?;
    tracing::debug!(present = record.is_some(), "Parsed record");

    let reports = session
        .validators(args.style)
        .iter()
        .map(|validator| {
            let errors = validator.validate(record.as_ref());
            StyleReport {
                style: validator.style().as_str(),
                valid: errors.is_empty(),
                failures: errors.into_iter().collect(),
            }
        })
        .collect();
    Ok(reports)
}

fn print_table(reports: &[StyleReport]) -> Result<()> {
    let rows: Vec<FailureRow> = reports
        .iter()
        .flat_map(|report| {
            report.failures.iter().map(|failure| FailureRow {
                style: report.style,
                field: if failure.field.is_empty() {
                    "(record)".to_string()
                } else {
                    failure.field.to_string()
                },
                message: failure.error.message.to_string(),
                kind: failure.error.kind.to_string(),
            })
        })
        .collect();

    if rows.is_empty() {
        output::print_success("Record is valid");
        return Ok(());
    }

    output::print_list(&rows, OutputFormat::Table)?;
    output::print_failure("Record is invalid");
    Ok(())
}

/// The record passed only if every selected style accepted it.
fn all_valid(reports: &[StyleReport]) -> bool {
    reports.iter().all(|report| report.valid)
}

fn exit_status(reports: &[StyleReport]) -> ExitCode {
    if all_valid(reports) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

pub fn execute(args: CheckArgs, session: &Session) -> Result<ExitCode> {
    let json = read_input(&args.input)?;
    let reports = build_reports(&json, &args, session)?;

    match session.format {
        OutputFormat::Table => print_table(&reports)?,
        format => output::print_item(&reports, format)?,
    }

    Ok(exit_status(&reports))
}
