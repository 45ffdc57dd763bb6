#![allow(clippy::result_large_err)]
//! # Fieldcheck Core
//!
//! One record, four ways to validate it.
//!
//! ## Architecture
//!
//! - **Model**: the flat `Record` (`count`, `dateOfBirth`, `name`, `numbers`)
//! - **Validation**: ordered field failures, the date-of-birth policy, rules and builders
//! - **Validators**: the matching, fluent, annotated and imperative styles behind one trait
//! - **Fixtures**: the fixed inputs shared by benches, CLI and tests
//! - **Telemetry**: structured logging
//! - **Config**: environment and file configuration

pub mod config;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod telemetry;
pub mod validation;
pub mod validators;

pub use error::{ErrorCode, ErrorContext, ErrorDetails, ErrorSeverity, FieldcheckError, Result};
pub use model::{parse_record, DateOfBirth, Record};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ValidationConfig};
    pub use crate::error::{ErrorCode, ErrorContext, FieldcheckError, Result};
    pub use crate::fixtures::Fixture;
    pub use crate::model::{parse_record, DateOfBirth, Record};
    pub use crate::validation::{
        DateDefect, DobPolicy, FieldError, FieldFailure, ValidationErrorKind, ValidationErrors,
        ValidationResult,
    };
    pub use crate::validators::{
        all_validators, validate_record, RecordValidator, ValidatorStyle,
    };
}
