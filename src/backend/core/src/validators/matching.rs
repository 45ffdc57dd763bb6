//! Hand-written validator built from `match` expressions.

use super::{fields, messages, RecordValidator, ValidatorStyle};
use crate::model::Record;
use crate::validation::{DateDefect, DobPolicy, ValidationErrorKind, ValidationErrors};

#[derive(Debug, Clone, Copy)]
pub struct MatchingValidator {
    policy: DobPolicy,
}

impl MatchingValidator {
    pub fn new(policy: DobPolicy) -> Self {
        Self { policy }
    }

    fn date_defect(&self, record: &Record) -> Option<DateDefect> {
        let floor = self.policy.floor_year;
        let reference = self.policy.reference_year;
        let date = record.date_of_birth;

        match (date.year(), date.month(), date.day()) {
            _ if date.is_unset() => Some(DateDefect::Unset),
            (1, 1, 1) => Some(DateDefect::Unset),
            (year, _, _) if year <= floor => Some(DateDefect::NotAfterFloor { floor }),
            (year, _, _) if year >= reference => {
                Some(DateDefect::NotBeforeReference { reference })
            }
            _ => None,
        }
    }
}

impl RecordValidator for MatchingValidator {
    fn style(&self) -> ValidatorStyle {
        ValidatorStyle::Matching
    }

    fn validate(&self, record: Option<&Record>) -> ValidationErrors {
        let record = match record {
            Some(record) => record,
            None => return ValidationErrors::null_model(messages::NULL_MODEL),
        };

        let mut errors = ValidationErrors::new();

        match record.numbers.as_deref() {
            Some([_, ..]) => {}
            None | Some([]) => errors.add_with_message(
                fields::NUMBERS,
                ValidationErrorKind::Required,
                messages::NUMBERS_EMPTY,
            ),
        }

        match record.name.as_deref() {
            Some(name) if !name.is_empty() => {}
            _ => errors.add_with_message(
                fields::NAME,
                ValidationErrorKind::Required,
                messages::NAME_EMPTY,
            ),
        }

        if let Some(defect) = self.date_defect(record) {
            errors.add_with_message(
                fields::DATE_OF_BIRTH,
                ValidationErrorKind::InvalidDate { defect },
                messages::DOB_INVALID,
            );
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DateOfBirth;

    fn validator() -> MatchingValidator {
        MatchingValidator::new(DobPolicy::for_year(2026))
    }

    #[test]
    fn test_defects_match_policy() {
        let validator = validator();
        let policy = DobPolicy::for_year(2026);
        for (y, m, d) in [(1, 1, 1), (1, 1, 2), (2000, 12, 31), (2001, 1, 1), (2025, 6, 6), (2026, 1, 1)] {
            let date = DateOfBirth::from_ymd(y, m, d).unwrap();
            let record = Record::new().with_date_of_birth(date);
            assert_eq!(validator.date_defect(&record), policy.check(date).err(), "{}", date);
        }
    }

    #[test]
    fn test_single_element_numbers_pass() {
        let record = Record::new().with_numbers([0]).with_name("x");
        let errors = validator().validate(Some(&record));
        assert!(!errors.has_errors(fields::NUMBERS));
        assert!(!errors.has_errors(fields::NAME));
        assert!(errors.has_errors(fields::DATE_OF_BIRTH));
    }
}
