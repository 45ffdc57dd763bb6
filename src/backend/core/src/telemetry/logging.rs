//! Structured logging with JSON, pretty and compact formats.
//!
//! - JSON format for machine-readable runs
//! - Pretty and compact formats for interactive use
//! - Per-module log level configuration
//!
//! Log lines go to stderr so they never mix with command output on stdout.

use crate::error::{FieldcheckError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level or filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format
    #[serde(default)]
    pub format: LogFormat,

    /// Per-module log levels
    #[serde(default)]
    pub module_levels: BTreeMap<String, String>,

    /// Whether to include file/line information
    #[serde(default)]
    pub include_location: bool,

    /// Whether to include thread information
    #[serde(default)]
    pub include_thread: bool,

    /// Whether to include target (module path)
    #[serde(default = "default_include_target")]
    pub include_target: bool,

    /// Span event configuration
    #[serde(default)]
    pub span_events: SpanEventConfig,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            module_levels: BTreeMap::new(),
            include_location: false,
            include_thread: false,
            include_target: default_include_target(),
            span_events: SpanEventConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Build the filter for this configuration.
    ///
    /// A directive that does not parse is a configuration error.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let mut filter = EnvFilter::try_new(&self.level).map_err(|e| {
            FieldcheckError::configuration(format!("Invalid log level: {}", self.level))
                .with_source(e)
        })?;

        for (module, level) in &self.module_levels {
            let directive = format!("{}={}", module, level);
            let parsed = directive.parse::<Directive>().map_err(|e| {
                FieldcheckError::configuration(format!("Invalid log directive: {}", directive))
                    .with_source(e)
            })?;
            filter = filter.add_directive(parsed);
        }

        Ok(filter)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format for structured logging
    Json,
    /// Multi-line format for development
    Pretty,
    /// Single-line format
    #[default]
    Compact,
}

/// Configuration for span event logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanEventConfig {
    /// Log when spans are created
    #[serde(default)]
    pub on_new: bool,

    /// Log when spans are closed
    #[serde(default)]
    pub on_close: bool,
}

impl SpanEventConfig {
    fn to_fmt_span(&self) -> FmtSpan {
        let mut span = FmtSpan::NONE;
        if self.on_new {
            span |= FmtSpan::NEW;
        }
        if self.on_close {
            span |= FmtSpan::CLOSE;
        }
        span
    }
}

// Default value functions
fn default_log_level() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
}

fn default_include_target() -> bool {
    true
}

/// Initialize the logging subsystem.
///
/// Installs a global subscriber with the configured format and filters.
///
/// # Errors
///
/// Returns an error if a filter directive does not parse or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = config.env_filter()?;

    match config.format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(config.span_events.to_fmt_span())
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_thread_ids(config.include_thread)
                .with_thread_names(config.include_thread)
                .with_target(config.include_target);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_span_events(config.span_events.to_fmt_span())
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_thread_ids(config.include_thread)
                .with_thread_names(config.include_thread)
                .with_target(config.include_target);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_span_events(config.span_events.to_fmt_span())
                .with_file(config.include_location)
                .with_line_number(config.include_location)
                .with_thread_ids(config.include_thread)
                .with_thread_names(config.include_thread)
                .with_target(config.include_target);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
