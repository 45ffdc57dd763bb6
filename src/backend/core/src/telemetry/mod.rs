//! Telemetry: structured logging.
//!
//! Validators stay silent on the hot path. Construction and the CLI log
//! through `tracing`; this module installs the subscriber.
//!
//! # Example
//!
//! ```rust,no_run
//! use fieldcheck_core::telemetry::{init_logging, LoggingConfig};
//!
//! init_logging(&LoggingConfig::default()).expect("Failed to initialize logging");
//! ```

pub mod logging;

pub use logging::{init_logging, LogFormat, LoggingConfig, SpanEventConfig};
