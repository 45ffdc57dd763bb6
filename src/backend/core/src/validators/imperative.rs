//! The canonical validator: plain `if` statements.

use super::{fields, messages, RecordValidator, ValidatorStyle};
use crate::model::Record;
use crate::validation::{DobPolicy, ValidationErrorKind, ValidationErrors};

/// Validate `record` against the field rules.
///
/// Returns an empty collection when the record passes. Failures are reported
/// in the order `numbers`, `name`, `dateOfBirth`; an absent record reports
/// only the null-model failure.
pub fn validate_record(record: Option<&Record>, policy: &DobPolicy) -> ValidationErrors {
    let Some(record) = record else {
        return ValidationErrors::null_model(messages::NULL_MODEL);
    };

    let mut errors = ValidationErrors::with_capacity(3);

    if record.numbers.as_ref().map_or(true, Vec::is_empty) {
        errors.add_with_message(
            fields::NUMBERS,
            ValidationErrorKind::Required,
            messages::NUMBERS_EMPTY,
        );
    }

    if record.name.as_ref().map_or(true, String::is_empty) {
        errors.add_with_message(
            fields::NAME,
            ValidationErrorKind::Required,
            messages::NAME_EMPTY,
        );
    }

    if let Err(defect) = policy.check(record.date_of_birth) {
        errors.add_with_message(
            fields::DATE_OF_BIRTH,
            ValidationErrorKind::InvalidDate { defect },
            messages::DOB_INVALID,
        );
    }

    errors
}

#[derive(Debug, Clone, Copy)]
pub struct ImperativeValidator {
    policy: DobPolicy,
}

impl ImperativeValidator {
    pub fn new(policy: DobPolicy) -> Self {
        Self { policy }
    }
}

impl RecordValidator for ImperativeValidator {
    fn style(&self) -> ValidatorStyle {
        ValidatorStyle::Imperative
    }

    fn validate(&self, record: Option<&Record>) -> ValidationErrors {
        validate_record(record, &self.policy)
    }
}
