//! Validator written against the rule-builder library.

use super::{fields, messages, RecordValidator, ValidatorStyle};
use crate::model::Record;
use crate::validation::{
    validate_field, validate_request, DobPolicy, NotEmpty, PlausibleBirthDate, ValidationErrors,
};

#[derive(Debug, Clone, Copy)]
pub struct FluentValidator {
    policy: DobPolicy,
}

impl FluentValidator {
    pub fn new(policy: DobPolicy) -> Self {
        Self { policy }
    }
}

impl RecordValidator for FluentValidator {
    fn style(&self) -> ValidatorStyle {
        ValidatorStyle::Fluent
    }

    fn validate(&self, record: Option<&Record>) -> ValidationErrors {
        validate_request()
            .when_present(record, messages::NULL_MODEL, |request, record| {
                request
                    .field(
                        validate_field(fields::NUMBERS, &record.numbers)
                            .rule(NotEmpty)
                            .with_message(messages::NUMBERS_EMPTY),
                    )
                    .field(
                        validate_field(fields::NAME, &record.name)
                            .rule(NotEmpty)
                            .with_message(messages::NAME_EMPTY),
                    )
                    .field(
                        validate_field(fields::DATE_OF_BIRTH, &record.date_of_birth)
                            .rule(PlausibleBirthDate(self.policy))
                            .with_message(messages::DOB_INVALID),
                    )
            })
            .into_errors()
    }
}
