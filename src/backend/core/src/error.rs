//! Error handling for fieldcheck.
//!
//! Validation outcomes are values ([`ValidationErrors`](crate::validation::ValidationErrors)),
//! not faults. This module covers everything around them that can actually go
//! wrong: unreadable record files, malformed JSON, bad configuration and
//! unknown validator names.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fieldcheck_core::error::{ErrorCode, ErrorContext, Result};
//!
//! fn parse(json: &str) -> Result<serde_json::Value> {
//!     serde_json::from_str(json).with_error_code(ErrorCode::DeserializationError)
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::{error, warn};

// ═══════════════════════════════════════════════════════════════════════════════
// Result Type Alias
// ═══════════════════════════════════════════════════════════════════════════════

/// A specialized Result type for fieldcheck operations.
pub type Result<T> = std::result::Result<T, FieldcheckError>;

// ═══════════════════════════════════════════════════════════════════════════════
// Error Codes
// ═══════════════════════════════════════════════════════════════════════════════

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation Errors (4100-4199)
    ValidationError,
    InvalidInput,

    // Serialization Errors (2200-2299)
    SerializationError,
    DeserializationError,

    // Configuration Errors (5000-5099)
    ConfigurationError,

    // Internal Errors (9000-9099)
    InternalError,
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub const fn numeric_code(&self) -> u32 {
        match self {
            Self::ValidationError => 4100,
            Self::InvalidInput => 4101,
            Self::SerializationError => 2200,
            Self::DeserializationError => 2201,
            Self::ConfigurationError => 5000,
            Self::InternalError => 9000,
        }
    }

    /// Get the error category for grouping.
    pub const fn category(&self) -> &'static str {
        match self.numeric_code() {
            2200..=2299 => "serialization",
            4100..=4199 => "validation",
            5000..=5099 => "configuration",
            9000..=9099 => "internal",
            _ => "unknown",
        }
    }

    /// Process exit status the CLI reports for this code.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ValidationError => 1,
            Self::InvalidInput | Self::DeserializationError => 2,
            Self::ConfigurationError => 3,
            Self::SerializationError | Self::InternalError => 70,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Error Severity
// ═══════════════════════════════════════════════════════════════════════════════

/// Severity level for errors (affects logging).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// User errors (bad input, validation failures)
    Low,
    /// Environment problems (configuration)
    Medium,
    /// Bugs
    High,
}

impl ErrorSeverity {
    /// Get severity based on error code.
    pub const fn from_code(code: &ErrorCode) -> Self {
        match code {
            ErrorCode::ValidationError
            | ErrorCode::InvalidInput
            | ErrorCode::DeserializationError => Self::Low,
            ErrorCode::ConfigurationError => Self::Medium,
            ErrorCode::SerializationError | ErrorCode::InternalError => Self::High,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Error Details
// ═══════════════════════════════════════════════════════════════════════════════

/// Additional structured details about an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Additional context key-value pairs
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Main Error Type
// ═══════════════════════════════════════════════════════════════════════════════

/// The main error type for fieldcheck.
#[derive(Error, Debug)]
pub struct FieldcheckError {
    /// Machine-readable error code
    code: ErrorCode,

    /// User-facing message
    user_message: Cow<'static, str>,

    /// Additional structured details
    details: ErrorDetails,

    /// The source error that caused this error
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl fmt::Display for FieldcheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.user_message)
    }
}

impl FieldcheckError {
    // ─────────────────────────────────────────────────────────────────────────
    // Constructors
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a new error with code and user message.
    pub fn new(code: ErrorCode, user_message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            user_message: user_message.into(),
            details: ErrorDetails::default(),
            source: None,
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorCode::ConfigurationError, message)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a source error.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Add context to details.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.details.context.insert(key.into(), v);
        }
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn details(&self) -> &ErrorDetails {
        &self.details
    }

    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::from_code(&self.code)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Logging
    // ─────────────────────────────────────────────────────────────────────────

    /// Log this error with appropriate severity.
    pub fn log(&self) {
        let code = self.code.to_string();
        let category = self.code.category();

        match self.severity() {
            ErrorSeverity::High => {
                error!(
                    error_code = %code,
                    category = category,
                    user_message = %self.user_message,
                    source = ?self.source,
                    "High severity error"
                );
            }
            ErrorSeverity::Medium => {
                warn!(
                    error_code = %code,
                    category = category,
                    user_message = %self.user_message,
                    source = ?self.source,
                    "Medium severity error"
                );
            }
            ErrorSeverity::Low => {
                tracing::debug!(
                    error_code = %code,
                    category = category,
                    user_message = %self.user_message,
                    "Low severity error"
                );
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Error Context Extension Trait
// ═══════════════════════════════════════════════════════════════════════════════

/// Extension trait for adding context to errors.
pub trait ErrorContext<T> {
    /// Attach an error code.
    fn with_error_code(self, code: ErrorCode) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_error_code(self, code: ErrorCode) -> Result<T> {
        self.map_err(|e| FieldcheckError::new(code, format!("{} error", code.category())).with_source(e))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn with_error_code(self, code: ErrorCode) -> Result<T> {
        self.ok_or_else(|| FieldcheckError::new(code, "Value missing"))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Conversions from External Errors
// ═══════════════════════════════════════════════════════════════════════════════

impl From<serde_json::Error> for FieldcheckError {
    fn from(err: serde_json::Error) -> Self {
        let code = if err.is_io() {
            ErrorCode::InternalError
        } else {
            ErrorCode::DeserializationError
        };
        FieldcheckError::new(code, "Malformed record JSON")
            .with_context("line", err.line())
            .with_context("column", err.column())
            .with_source(err)
    }
}

impl From<config::ConfigError> for FieldcheckError {
    fn from(err: config::ConfigError) -> Self {
        FieldcheckError::configuration("Invalid configuration").with_source(err)
    }
}

impl From<std::io::Error> for FieldcheckError {
    fn from(err: std::io::Error) -> Self {
        FieldcheckError::invalid_input("I/O failure").with_source(err)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
