//! Validation rules for the rule-builder validator.
//!
//! - Non-empty collections and strings (absent counts as empty)
//! - Presence of optional values
//! - Plausible date of birth

use crate::model::DateOfBirth;
use crate::validation::error::{FieldError, ValidationErrorKind};
use crate::validation::policy::DobPolicy;

/// A validation rule that can be applied to a value.
pub trait ValidationRule<T: ?Sized> {
    /// Validate the value and return any errors.
    fn validate(&self, value: &T) -> Option<FieldError>;

    /// Get a description of this rule.
    fn description(&self) -> String;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Not Empty Rule
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates a string or collection has at least one element.
///
/// Only the length is checked; a whitespace-only string passes.
#[derive(Debug, Clone, Copy)]
pub struct NotEmpty;

fn required_if(empty: bool) -> Option<FieldError> {
    if empty {
        Some(FieldError::new(ValidationErrorKind::Required))
    } else {
        None
    }
}

impl ValidationRule<String> for NotEmpty {
    fn validate(&self, value: &String) -> Option<FieldError> {
        required_if(value.is_empty())
    }

    fn description(&self) -> String {
        "must not be empty".to_string()
    }
}

impl<T> ValidationRule<Vec<T>> for NotEmpty {
    fn validate(&self, value: &Vec<T>) -> Option<FieldError> {
        required_if(value.is_empty())
    }

    fn description(&self) -> String {
        "must not be empty".to_string()
    }
}

impl ValidationRule<Option<String>> for NotEmpty {
    fn validate(&self, value: &Option<String>) -> Option<FieldError> {
        required_if(value.as_deref().map_or(true, str::is_empty))
    }

    fn description(&self) -> String {
        "must be present and not empty".to_string()
    }
}

impl<T> ValidationRule<Option<Vec<T>>> for NotEmpty {
    fn validate(&self, value: &Option<Vec<T>>) -> Option<FieldError> {
        required_if(value.as_ref().map_or(true, Vec::is_empty))
    }

    fn description(&self) -> String {
        "must be present and not empty".to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Presence Rule
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates an optional field is `Some`, whatever its contents.
#[derive(Debug, Clone, Copy)]
pub struct Present;

impl<T> ValidationRule<Option<T>> for Present {
    fn validate(&self, value: &Option<T>) -> Option<FieldError> {
        required_if(value.is_none())
    }

    fn description(&self) -> String {
        "field is required".to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Birth Date Rule
// ═══════════════════════════════════════════════════════════════════════════════

/// Rule that validates a date of birth against a [`DobPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct PlausibleBirthDate(pub DobPolicy);

impl PlausibleBirthDate {
    pub fn new(policy: DobPolicy) -> Self {
        Self(policy)
    }
}

impl ValidationRule<DateOfBirth> for PlausibleBirthDate {
    fn validate(&self, value: &DateOfBirth) -> Option<FieldError> {
        self.0
            .check(*value)
            .err()
            .map(|defect| FieldError::new(ValidationErrorKind::InvalidDate { defect }))
    }

    fn description(&self) -> String {
        format!(
            "year strictly between {} and {}",
            self.0.floor_year, self.0.reference_year
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::policy::DateDefect;

    #[test]
    fn test_not_empty_string() {
        assert!(NotEmpty.validate(&String::new()).is_some());
        assert!(NotEmpty.validate(&"x".to_string()).is_none());
        assert!(NotEmpty.validate(&" ".to_string()).is_none());
    }

    #[test]
    fn test_not_empty_optional_string() {
        assert!(NotEmpty.validate(&None::<String>).is_some());
        assert!(NotEmpty.validate(&Some(String::new())).is_some());
        assert!(NotEmpty.validate(&Some("Jane".to_string())).is_none());
    }

    #[test]
    fn test_not_empty_collections() {
        assert!(NotEmpty.validate(&Vec::<i32>::new()).is_some());
        assert!(NotEmpty.validate(&vec![1]).is_none());
        assert!(NotEmpty.validate(&None::<Vec<i32>>).is_some());
        assert!(NotEmpty.validate(&Some(Vec::<i32>::new())).is_some());
        assert!(NotEmpty.validate(&Some(vec![0])).is_none());
    }

    #[test]
    fn test_not_empty_kind() {
        let error = NotEmpty.validate(&None::<String>).unwrap();
        assert_eq!(error.kind, ValidationErrorKind::Required);
    }

    #[test]
    fn test_present() {
        assert!(Present.validate(&None::<i32>).is_some());
        assert!(Present.validate(&Some(String::new())).is_none());
    }

    #[test]
    fn test_plausible_birth_date() {
        let rule = PlausibleBirthDate::new(DobPolicy::for_year(2026));
        let ok = DateOfBirth::from_ymd(2010, 6, 15).unwrap();
        assert!(rule.validate(&ok).is_none());

        let error = rule.validate(&DateOfBirth::default()).unwrap();
        assert_eq!(
            error.kind,
            ValidationErrorKind::InvalidDate {
                defect: DateDefect::Unset
            }
        );

        let future = DateOfBirth::from_ymd(2026, 1, 2).unwrap();
        assert!(rule.validate(&future).is_some());
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            <NotEmpty as ValidationRule<String>>::description(&NotEmpty),
            "must not be empty"
        );
        assert_eq!(
            PlausibleBirthDate::new(DobPolicy::for_year(2026)).description(),
            "year strictly between 2000 and 2026"
        );
    }
}
