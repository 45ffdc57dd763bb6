//! Rule-builder validators.
//!
//! - `FieldValidator` for building field-level validation chains
//! - `RequestValidator` for validating a whole object, field by field

use crate::validation::error::{FieldError, ValidationErrorKind, ValidationErrors, ValidationResult};
use crate::validation::rules::ValidationRule;
use std::borrow::Cow;

// ═══════════════════════════════════════════════════════════════════════════════
// Field Validator
// ═══════════════════════════════════════════════════════════════════════════════

/// A builder for validating a single field with multiple rules.
pub struct FieldValidator<'a, T: ?Sized> {
    field_name: &'static str,
    value: &'a T,
    errors: Vec<FieldError>,
    stop_on_first_error: bool,
    last_failed: bool,
}

impl<'a, T: ?Sized> FieldValidator<'a, T> {
    /// Create a new field validator.
    pub fn new(field_name: &'static str, value: &'a T) -> Self {
        Self {
            field_name,
            value,
            errors: Vec::new(),
            stop_on_first_error: false,
            last_failed: false,
        }
    }

    /// Stop validation on the first error (fail-fast mode).
    pub fn stop_on_first(mut self) -> Self {
        self.stop_on_first_error = true;
        self
    }

    fn skipping(&mut self) -> bool {
        if self.stop_on_first_error && !self.errors.is_empty() {
            self.last_failed = false;
            return true;
        }
        false
    }

    fn record(&mut self, error: Option<FieldError>) {
        self.last_failed = error.is_some();
        if let Some(error) = error {
            self.errors.push(error);
        }
    }

    /// Apply a validation rule.
    pub fn rule<R: ValidationRule<T>>(mut self, rule: R) -> Self {
        if self.skipping() {
            return self;
        }
        let error = rule.validate(self.value);
        self.record(error);
        self
    }

    /// Apply a custom validation function.
    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&T) -> Option<FieldError>,
    {
        if self.skipping() {
            return self;
        }
        let error = f(self.value);
        self.record(error);
        self
    }

    /// Apply a custom validation with a simple boolean check.
    pub fn must<F>(mut self, predicate: F, error_kind: ValidationErrorKind) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        if self.skipping() {
            return self;
        }
        let error = (!predicate(self.value)).then(|| FieldError::new(error_kind));
        self.record(error);
        self
    }

    /// Replace the message of the error raised by the preceding rule.
    ///
    /// No effect when the preceding rule passed or was skipped.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        if self.last_failed {
            if let Some(last) = self.errors.last_mut() {
                last.message = message.into();
            }
        }
        self
    }

    /// Attach a code to the error raised by the preceding rule.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        if self.last_failed {
            if let Some(last) = self.errors.last_mut() {
                last.code = Some(code.into());
            }
        }
        self
    }

    /// Get the field name.
    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    /// Check if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the errors collected so far.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consume the validator and return the errors.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Add the field's errors to a ValidationErrors collection.
    pub fn collect_into(self, errors: &mut ValidationErrors) {
        for error in self.errors {
            errors.add(self.field_name, error);
        }
    }

    /// Convert to a ValidationResult.
    pub fn result(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            let mut validation_errors = ValidationErrors::with_capacity(self.errors.len());
            self.collect_into(&mut validation_errors);
            Err(validation_errors)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Request Validator
// ═══════════════════════════════════════════════════════════════════════════════

/// A builder for validating entire objects with multiple fields.
pub struct RequestValidator {
    errors: ValidationErrors,
    stop_on_first_error: bool,
}

impl RequestValidator {
    /// Create a new request validator.
    pub fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
            stop_on_first_error: false,
        }
    }

    /// Stop validation on the first error.
    pub fn stop_on_first(mut self) -> Self {
        self.stop_on_first_error = true;
        self
    }

    fn halted(&self) -> bool {
        self.stop_on_first_error && !self.errors.is_empty()
    }

    /// Validate a field and collect any errors.
    pub fn field<T: ?Sized>(mut self, validator: FieldValidator<'_, T>) -> Self {
        if self.halted() {
            return self;
        }
        validator.collect_into(&mut self.errors);
        self
    }

    /// Run `f` against the object when there is one; otherwise record a
    /// single null-model failure carrying `message`.
    pub fn when_present<T: ?Sized, F>(
        mut self,
        value: Option<&T>,
        message: impl Into<Cow<'static, str>>,
        f: F,
    ) -> Self
    where
        F: FnOnce(Self, &T) -> Self,
    {
        if self.halted() {
            return self;
        }
        match value {
            Some(value) => f(self, value),
            None => {
                self.errors.merge(ValidationErrors::null_model(message));
                self
            }
        }
    }

    /// Add a pre-built ValidationErrors.
    pub fn merge(mut self, other: ValidationErrors) -> Self {
        if self.halted() {
            return self;
        }
        self.errors.merge(other);
        self
    }

    /// Apply a custom validation function.
    pub fn custom<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut ValidationErrors),
    {
        if self.halted() {
            return self;
        }
        f(&mut self.errors);
        self
    }

    /// Check if validation passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the collected errors.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Consume and return the errors.
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// Convert to a ValidationResult.
    pub fn result(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Convenience Helpers
// ═══════════════════════════════════════════════════════════════════════════════

/// Create a FieldValidator for a field.
pub fn validate_field<'a, T: ?Sized>(field_name: &'static str, value: &'a T) -> FieldValidator<'a, T> {
    FieldValidator::new(field_name, value)
}

/// Create a new RequestValidator.
pub fn validate_request() -> RequestValidator {
    RequestValidator::new()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::{NotEmpty, Present};

    struct Signup {
        name: Option<String>,
        tags: Vec<String>,
    }

    fn validate_signup(signup: Option<&Signup>) -> ValidationResult<()> {
        validate_request()
            .when_present(signup, "Null signup.", |request, signup| {
                request
                    .field(
                        validate_field("name", &signup.name)
                            .rule(NotEmpty)
                            .with_message("Name is empty."),
                    )
                    .field(validate_field("tags", &signup.tags).rule(NotEmpty))
            })
            .result()
    }

    #[test]
    fn test_request_validator_valid() {
        let signup = Signup {
            name: Some("Ada".into()),
            tags: vec!["x".into()],
        };
        assert!(validate_signup(Some(&signup)).is_ok());
    }

    #[test]
    fn test_request_validator_collects_in_order() {
        let signup = Signup {
            name: None,
            tags: vec![],
        };
        let errors = validate_signup(Some(&signup)).unwrap_err();
        assert_eq!(errors.messages(), vec!["Name is empty.", "field is required"]);
        assert!(errors.has_errors("name"));
        assert!(errors.has_errors("tags"));
    }

    #[test]
    fn test_when_present_absent() {
        let errors = validate_signup(None).unwrap_err();
        assert_eq!(errors.messages(), vec!["Null signup."]);
        assert_eq!(
            errors.first_error().unwrap().error.kind,
            ValidationErrorKind::NullModel
        );
    }

    #[test]
    fn test_with_message_only_touches_failed_rule() {
        let name = Some("Ada".to_string());
        let validator = validate_field("name", &name)
            .rule(NotEmpty)
            .with_message("unused");
        assert!(validator.is_valid());

        let tags: Vec<String> = vec![];
        let validator = validate_field("tags", &tags)
            .rule(NotEmpty)
            .with_message("Tags are empty.")
            .with_code("TAGS_EMPTY");
        assert_eq!(validator.errors()[0].message, "Tags are empty.");
        assert_eq!(validator.errors()[0].code.as_deref(), Some("TAGS_EMPTY"));
    }

    #[test]
    fn test_must_and_custom() {
        let value = 41i32;
        let validator = validate_field("value", &value)
            .must(|v| v % 2 == 0, ValidationErrorKind::Custom { code: "even".into() })
            .custom(|v| {
                (*v > 40).then(|| {
                    FieldError::with_message(
                        ValidationErrorKind::Custom { code: "max".into() },
                        "too big",
                    )
                })
            });
        let errors = validator.into_errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].message, "too big");
    }

    #[test]
    fn test_stop_on_first_field() {
        let value: Option<Vec<i32>> = None;
        let validator = validate_field("numbers", &value)
            .stop_on_first()
            .rule(Present)
            .with_message("missing")
            .rule(NotEmpty)
            .with_message("should not apply");

        let errors = validator.into_errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "missing");
    }

    #[test]
    fn test_stop_on_first_request() {
        let a: Vec<i32> = vec![];
        let b = String::new();
        let errors = validate_request()
            .stop_on_first()
            .field(validate_field("a", &a).rule(NotEmpty))
            .field(validate_field("b", &b).rule(NotEmpty))
            .into_errors();
        assert_eq!(errors.error_count(), 1);
        assert!(errors.has_errors("a"));
    }

    #[test]
    fn test_field_result() {
        let empty = String::new();
        let err = validate_field("name", &empty).rule(NotEmpty).result().unwrap_err();
        assert!(err.has_errors("name"));

        let name = "x".to_string();
        assert!(validate_field("name", &name).rule(NotEmpty).result().is_ok());
    }

    #[test]
    fn test_request_merge_and_custom() {
        let mut extra = ValidationErrors::new();
        extra.add_required("first");
        let errors = validate_request()
            .merge(extra)
            .custom(|errors| errors.add_required("second"))
            .into_errors();
        let fields: Vec<&str> = errors.iter().map(|f| &*f.field).collect();
        assert_eq!(fields, vec!["first", "second"]);
    }
}
