//! Field-level validation framework.
//!
//! This module provides the building blocks the record validators share:
//!
//! - **Failures**: ordered, field-tagged failure lists
//!   - `ValidationErrors` keeps failures in report order
//!   - Root-level failures (an absent record) use the empty field path
//!   - Serializable for the CLI's JSON and YAML output
//!
//! - **Policy**: the date-of-birth window, with an explicit reference year
//!
//! - **Rules and builders**: `ValidationRule` implementations plus the
//!   `FieldValidator`/`RequestValidator` chain builders
//!
//! - **Macros**: `annotate!` for declarative constraint tables
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fieldcheck_core::validation::{validate_field, validate_request, NotEmpty};
//!
//! let name: Option<String> = None;
//! let result = validate_request()
//!     .field(
//!         validate_field("name", &name)
//!             .rule(NotEmpty)
//!             .with_message("Name is empty."),
//!     )
//!     .result();
//!
//! assert_eq!(result.unwrap_err().messages(), vec!["Name is empty."]);
//! ```

pub mod error;
pub mod macros;
pub mod policy;
pub mod rules;
pub mod validator;

// ═══════════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════════

pub use error::{
    FieldError, FieldFailure, ValidationErrorKind, ValidationErrors, ValidationResult, ROOT_FIELD,
};
pub use policy::{DateDefect, DobPolicy, DEFAULT_FLOOR_YEAR};
pub use rules::{NotEmpty, PlausibleBirthDate, Present, ValidationRule};
pub use validator::{validate_field, validate_request, FieldValidator, RequestValidator};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Common imports for validation.
pub mod prelude {
    pub use super::{
        // Error types
        FieldError,
        ValidationErrorKind,
        ValidationErrors,
        ValidationResult,
        // Policy
        DobPolicy,
        // Rules
        NotEmpty,
        PlausibleBirthDate,
        Present,
        ValidationRule,
        // Builders
        FieldValidator,
        RequestValidator,
        validate_field,
        validate_request,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Integration with the Crate Error System
// ═══════════════════════════════════════════════════════════════════════════════

use crate::error::FieldcheckError;

impl From<ValidationErrors> for FieldcheckError {
    fn from(errors: ValidationErrors) -> Self {
        let message = match errors.first_error() {
            Some(first) => format!("Validation failed: {}", first.error.message),
            None => "Validation failed".to_string(),
        };

        FieldcheckError::validation(message).with_context("failures", errors.to_flat_messages())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::model::DateOfBirth;

    struct Enrollment {
        tags: Option<Vec<i32>>,
        nickname: Option<String>,
        born: DateOfBirth,
    }

    fn validate_enrollment(enrollment: &Enrollment, policy: DobPolicy) -> ValidationResult<()> {
        validate_request()
            .field(validate_field("tags", &enrollment.tags).rule(NotEmpty))
            .field(validate_field("nickname", &enrollment.nickname).rule(Present))
            .field(validate_field("born", &enrollment.born).rule(PlausibleBirthDate(policy)))
            .result()
    }

    #[test]
    fn test_valid_enrollment() {
        let enrollment = Enrollment {
            tags: Some(vec![1]),
            nickname: Some(String::new()),
            born: DateOfBirth::from_ymd(2012, 3, 4).unwrap(),
        };
        assert!(validate_enrollment(&enrollment, DobPolicy::for_year(2026)).is_ok());
    }

    #[test]
    fn test_invalid_enrollment_reports_every_field() {
        let enrollment = Enrollment {
            tags: Some(vec![]),
            nickname: None,
            born: DateOfBirth::default(),
        };
        let errors = validate_enrollment(&enrollment, DobPolicy::for_year(2026)).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|f| &*f.field).collect();
        assert_eq!(fields, vec!["tags", "nickname", "born"]);
    }

    #[test]
    fn test_validation_errors_to_fieldcheck_error() {
        let mut errors = ValidationErrors::new();
        errors.add_with_message("name", ValidationErrorKind::Required, "Name is empty.");

        let error: FieldcheckError = errors.into();
        assert_eq!(error.code(), ErrorCode::ValidationError);
        assert!(error.to_string().contains("Name is empty."));
        assert!(error.details().context.contains_key("failures"));
    }

    #[test]
    fn test_prelude_imports() {
        use super::prelude::*;

        let _ = ValidationErrors::new();
        let _ = NotEmpty;
        let _ = DobPolicy::for_year(2026);
    }
}
