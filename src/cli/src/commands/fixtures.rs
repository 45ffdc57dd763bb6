//! Run the validators over the built-in fixtures.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::process::ExitCode;
use tabled::Tabled;

use fieldcheck_core::fixtures;

use super::{Session, StyleArg};
use crate::output;

#[derive(Args)]
pub struct FixturesArgs {
    /// Only run this style
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,
}

#[derive(Debug, Serialize, Tabled)]
struct FixtureRow {
    #[tabled(rename = "Fixture")]
    fixture: &'static str,
    #[tabled(rename = "Style")]
    style: &'static str,
    #[tabled(rename = "Valid")]
    valid: bool,
    #[tabled(rename = "Failures", display_with = "output::join_messages")]
    failures: Vec<String>,
}

fn collect_rows(args: &FixturesArgs, session: &Session) -> Vec<FixtureRow> {
    let validators = session.validators(args.style);
    let mut rows = Vec::with_capacity(validators.len() * 4);

    for fixture in fixtures::all() {
        for validator in &validators {
            let errors = validator.validate(fixture.record());
            rows.push(FixtureRow {
                fixture: fixture.name,
                style: validator.style().as_str(),
                valid: errors.is_empty(),
                failures: errors.into_messages(),
            });
        }
    }

    rows
}

pub fn execute(args: FixturesArgs, session: &Session) -> Result<ExitCode> {
    let rows = collect_rows(&args, session);
    tracing::debug!(rows = rows.len(), "Validated fixtures");
    output::print_list(&rows, session.format)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use fieldcheck_core::validation::DobPolicy;

    fn session() -> Session {
        Session {
            policy: DobPolicy::for_year(2026),
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_rows_cover_every_fixture_and_style() {
        let rows = collect_rows(&FixturesArgs { style: None }, &session());
        assert_eq!(rows.len(), 16);
        assert_eq!(rows.iter().filter(|r| r.valid).count(), 4);
    }

    #[test]
    fn test_rows_for_single_style() {
        let rows = collect_rows(
            &FixturesArgs {
                style: Some(StyleArg::Matching),
            },
            &session(),
        );
        let summary: Vec<_> = rows.iter().map(|r| (r.fixture, r.failures.len())).collect();
        assert_eq!(
            summary,
            vec![("null_model", 1), ("blank", 3), ("boundary", 2), ("valid", 0)]
        );
        assert!(rows.iter().all(|r| r.style == "matching"));
    }
}
