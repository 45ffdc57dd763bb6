//! Validation error types with field-level error support.
//!
//! Failures are kept in the order they were reported, so a validator that
//! checks `numbers`, `name` and `dateOfBirth` in that order produces its
//! messages in that order too.

use crate::validation::policy::DateDefect;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Field path used for failures that concern the record as a whole.
pub const ROOT_FIELD: &str = "";

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Error Types
// ═══════════════════════════════════════════════════════════════════════════════

/// The kind of validation error that occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// There was no record to validate.
    NullModel,
    /// Field is absent or empty.
    Required,
    /// Date is not a plausible date of birth.
    InvalidDate { defect: DateDefect },
    /// Custom validation failed.
    Custom { code: String },
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullModel => write!(f, "model is null"),
            Self::Required => write!(f, "field is required"),
            Self::InvalidDate { defect } => write!(f, "invalid date: {}", defect),
            Self::Custom { code } => write!(f, "validation failed: {}", code),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Field Error
// ═══════════════════════════════════════════════════════════════════════════════

/// A single validation error for a specific field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The kind of validation error.
    pub kind: ValidationErrorKind,
    /// Human-readable error message.
    pub message: Cow<'static, str>,
    /// Optional custom error code for client-side handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FieldError {
    /// Create a new field error with the kind's default message.
    pub fn new(kind: ValidationErrorKind) -> Self {
        let message = Cow::Owned(kind.to_string());
        Self {
            kind,
            message,
            code: None,
        }
    }

    /// Create a new field error with a custom message.
    pub fn with_message(kind: ValidationErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
        }
    }

    /// Add a custom error code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A field error tagged with the path of the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFailure {
    pub field: Cow<'static, str>,
    #[serde(flatten)]
    pub error: FieldError,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Errors Collection
// ═══════════════════════════════════════════════════════════════════════════════

/// An ordered collection of validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    failures: Vec<FieldFailure>,
}

impl ValidationErrors {
    /// Create a new empty validation errors collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            failures: Vec::with_capacity(capacity),
        }
    }

    /// The single-failure result for an absent record.
    pub fn null_model(message: impl Into<Cow<'static, str>>) -> Self {
        let mut errors = Self::with_capacity(1);
        errors.add_with_message(ROOT_FIELD, ValidationErrorKind::NullModel, message);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of failures.
    pub fn error_count(&self) -> usize {
        self.failures.len()
    }

    /// Number of distinct fields with failures.
    pub fn field_count(&self) -> usize {
        let mut seen: Vec<&str> = Vec::with_capacity(self.failures.len());
        for failure in &self.failures {
            if !seen.contains(&&*failure.field) {
                seen.push(&failure.field);
            }
        }
        seen.len()
    }

    /// Add an error for a specific field.
    pub fn add(&mut self, field: impl Into<Cow<'static, str>>, error: FieldError) {
        self.failures.push(FieldFailure {
            field: field.into(),
            error,
        });
    }

    /// Add an error with just the kind (auto-generates message).
    pub fn add_error(&mut self, field: impl Into<Cow<'static, str>>, kind: ValidationErrorKind) {
        self.add(field, FieldError::new(kind));
    }

    /// Add an error with a custom message.
    pub fn add_with_message(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        kind: ValidationErrorKind,
        message: impl Into<Cow<'static, str>>,
    ) {
        self.add(field, FieldError::with_message(kind, message));
    }

    /// Add a required field error.
    pub fn add_required(&mut self, field: impl Into<Cow<'static, str>>) {
        self.add_error(field, ValidationErrorKind::Required);
    }

    /// Errors reported for one field, in order.
    pub fn get<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.failures
            .iter()
            .filter(move |f| f.field == field)
            .map(|f| &f.error)
    }

    /// Check if a specific field has errors.
    pub fn has_errors(&self, field: &str) -> bool {
        self.failures.iter().any(|f| f.field == field)
    }

    /// Append another collection after this one.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.failures.extend(other.failures);
    }

    /// Iterate over all failures in report order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldFailure> {
        self.failures.iter()
    }

    /// The failure messages in report order.
    pub fn messages(&self) -> Vec<&str> {
        self.failures.iter().map(|f| &*f.error.message).collect()
    }

    /// Owned variant of [`messages`](Self::messages).
    pub fn into_messages(self) -> Vec<String> {
        self.failures
            .into_iter()
            .map(|f| f.error.message.into_owned())
            .collect()
    }

    /// Get the first failure, if any.
    pub fn first_error(&self) -> Option<&FieldFailure> {
        self.failures.first()
    }

    /// Messages prefixed with their field path (root failures unprefixed).
    pub fn to_flat_messages(&self) -> Vec<String> {
        self.failures
            .iter()
            .map(|f| {
                if f.field.is_empty() {
                    f.error.message.to_string()
                } else {
                    format!("{}: {}", f.field, f.error.message)
                }
            })
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_flat_messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = FieldFailure;
    type IntoIter = std::vec::IntoIter<FieldFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldFailure;
    type IntoIter = std::slice::Iter<'a, FieldFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Result Type
// ═══════════════════════════════════════════════════════════════════════════════

/// Result type for validation operations.
pub type ValidationResult<T> = std::result::Result<T, ValidationErrors>;

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let error = FieldError::new(ValidationErrorKind::Required);
        assert_eq!(error.to_string(), "field is required");

        let error = FieldError::new(ValidationErrorKind::InvalidDate {
            defect: DateDefect::NotAfterFloor { floor: 2000 },
        });
        assert_eq!(error.to_string(), "invalid date: year must be after 2000");
    }

    #[test]
    fn test_field_error_with_custom_message_and_code() {
        let error = FieldError::with_message(ValidationErrorKind::Required, "Name is empty.")
            .with_code("NAME_EMPTY");
        assert_eq!(error.to_string(), "Name is empty.");
        assert_eq!(error.code.as_deref(), Some("NAME_EMPTY"));
    }

    #[test]
    fn test_errors_preserve_insertion_order() {
        let mut errors = ValidationErrors::new();
        errors.add_with_message("numbers", ValidationErrorKind::Required, "Numbers are empty.");
        errors.add_with_message("name", ValidationErrorKind::Required, "Name is empty.");
        errors.add_with_message(
            "dateOfBirth",
            ValidationErrorKind::InvalidDate {
                defect: DateDefect::Unset,
            },
            "Dob is invalid.",
        );

        assert_eq!(
            errors.messages(),
            vec!["Numbers are empty.", "Name is empty.", "Dob is invalid."]
        );
        assert_eq!(errors.error_count(), 3);
        assert_eq!(errors.field_count(), 3);
    }

    #[test]
    fn test_null_model() {
        let errors = ValidationErrors::null_model("Null model.");
        assert_eq!(errors.messages(), vec!["Null model."]);
        let first = errors.first_error().unwrap();
        assert_eq!(first.field, ROOT_FIELD);
        assert_eq!(first.error.kind, ValidationErrorKind::NullModel);
    }

    #[test]
    fn test_get_and_has_errors() {
        let mut errors = ValidationErrors::new();
        errors.add_required("name");
        errors.add_error("name", ValidationErrorKind::Custom { code: "x".into() });
        errors.add_required("numbers");

        assert!(errors.has_errors("name"));
        assert!(!errors.has_errors("dateOfBirth"));
        assert_eq!(errors.get("name").count(), 2);
        assert_eq!(errors.field_count(), 2);
        assert_eq!(errors.error_count(), 3);
    }

    #[test]
    fn test_merge_appends() {
        let mut first = ValidationErrors::new();
        first.add_required("a");
        let mut second = ValidationErrors::new();
        second.add_required("b");
        first.merge(second);

        let fields: Vec<_> = first.iter().map(|f| &*f.field).collect();
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn test_flat_messages_and_display() {
        let mut errors = ValidationErrors::null_model("Null model.");
        errors.add_with_message("name", ValidationErrorKind::Required, "Name is empty.");
        assert_eq!(
            errors.to_flat_messages(),
            vec!["Null model.".to_string(), "name: Name is empty.".to_string()]
        );
        assert_eq!(errors.to_string(), "Null model.; name: Name is empty.");
    }

    #[test]
    fn test_into_messages() {
        let mut errors = ValidationErrors::new();
        errors.add_with_message("name", ValidationErrorKind::Required, "Name is empty.");
        assert_eq!(errors.into_messages(), vec!["Name is empty.".to_string()]);
    }

    #[test]
    fn test_serialization_shape() {
        let mut errors = ValidationErrors::new();
        errors.add_with_message(
            "dateOfBirth",
            ValidationErrorKind::InvalidDate {
                defect: DateDefect::NotBeforeReference { reference: 2026 },
            },
            "Dob is invalid.",
        );
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json[0]["field"], "dateOfBirth");
        assert_eq!(json[0]["message"], "Dob is invalid.");
        assert_eq!(json[0]["kind"]["type"], "invalid_date");
        assert_eq!(json[0]["kind"]["defect"]["reason"], "not_before_reference");
    }

    #[test]
    fn test_empty_collection() {
        let errors = ValidationErrors::new();
        assert!(errors.is_empty());
        assert!(errors.messages().is_empty());
        assert!(errors.first_error().is_none());
        assert_eq!(errors.to_string(), "");
    }
}
