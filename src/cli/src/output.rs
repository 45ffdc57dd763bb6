//! Output formatting utilities for the fieldcheck CLI.
//!
//! Supports table, JSON, and YAML output formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use fieldcheck_core::{ErrorCode, FieldcheckError};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Output format selection.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Render as a formatted table
    #[default]
    Table,
    /// Render as JSON
    Json,
    /// Render as YAML
    Yaml,
}

/// Print a success message to stdout.
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// Print an error message to stderr.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}

/// Print a failure summary to stdout.
pub fn print_failure(msg: &str) {
    println!("{} {}", "[INVALID]".yellow().bold(), msg);
}

/// Print a list of items in the requested format.
///
/// For table output, items must implement `Tabled`. For JSON/YAML, items must
/// implement `Serialize`.
pub fn print_list<T: Tabled + Serialize>(items: &[T], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", "No results found.".dimmed());
                return Ok(());
            }
            let table = Table::new(items)
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()))
                .to_string();
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::Yaml => print_item(&items, format)?,
    }
    Ok(())
}

/// Print a single item as JSON or YAML. Table output falls back to JSON.
pub fn print_item<T: Serialize + ?Sized>(item: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).map_err(|e| {
                FieldcheckError::new(ErrorCode::SerializationError, "Failed to serialize to JSON")
                    .with_source(e)
            })?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(item).map_err(|e| {
                FieldcheckError::new(ErrorCode::SerializationError, "Failed to serialize to YAML")
                    .with_source(e)
            })?;
            print!("{}", yaml);
        }
    }
    Ok(())
}

/// Print key-value details to the terminal (non-JSON/YAML output).
pub fn print_detail(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print a section header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().underline());
    println!();
}

/// Join failure messages for a table cell.
pub fn join_messages(messages: &[String]) -> String {
    if messages.is_empty() {
        "-".to_string()
    } else {
        messages.join("\n")
    }
}
