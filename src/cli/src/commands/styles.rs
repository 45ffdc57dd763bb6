//! List the validator styles.

use anyhow::Result;
use serde::Serialize;
use std::process::ExitCode;
use tabled::Tabled;

use fieldcheck_core::validators::ValidatorStyle;

use super::Session;
use crate::output::{self, OutputFormat};

#[derive(Debug, Serialize, Tabled)]
struct StyleRow {
    #[tabled(rename = "Style")]
    name: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

fn rows() -> Vec<StyleRow> {
    ValidatorStyle::ALL
        .into_iter()
        .map(|style| StyleRow {
            name: style.as_str(),
            description: style.description(),
        })
        .collect()
}

pub fn execute(session: &Session) -> Result<ExitCode> {
    if let OutputFormat::Table = session.format {
        output::print_header("Validator styles");
        output::print_detail("Floor year", &session.policy.floor_year.to_string());
        output::print_detail("Reference year", &session.policy.reference_year.to_string());
        println!();
    }
    output::print_list(&rows(), session.format)?;
    Ok(ExitCode::SUCCESS)
}
