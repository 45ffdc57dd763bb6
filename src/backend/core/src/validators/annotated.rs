//! Validator driven by a constraint table.
//!
//! Types declare their constraints with [`annotate!`](crate::annotate). The
//! resulting [`FieldSpec`] table is walked generically: each accessor turns
//! its field into a [`FieldValue`] and the constraint is evaluated against
//! that value, with no knowledge of the concrete field types.

use super::{messages, RecordValidator, ValidatorStyle};
use crate::model::{DateOfBirth, Record};
use crate::validation::{DobPolicy, ValidationErrorKind, ValidationErrors};

/// A field's value as seen by the table walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    Absent,
    Length(usize),
    Date(DateOfBirth),
    Integer(i64),
}

/// Conversion of a field into a [`FieldValue`].
pub trait Reflect {
    fn reflect(&self) -> FieldValue;
}

impl<T> Reflect for Vec<T> {
    fn reflect(&self) -> FieldValue {
        FieldValue::Length(self.len())
    }
}

impl Reflect for String {
    fn reflect(&self) -> FieldValue {
        FieldValue::Length(self.len())
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> FieldValue {
        self.as_ref().map_or(FieldValue::Absent, Reflect::reflect)
    }
}

impl Reflect for DateOfBirth {
    fn reflect(&self) -> FieldValue {
        FieldValue::Date(*self)
    }
}

impl Reflect for i32 {
    fn reflect(&self) -> FieldValue {
        FieldValue::Integer(i64::from(*self))
    }
}

/// A constraint attachable with `annotate!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Present with a non-zero length.
    NotEmpty,
    /// A date inside the policy window.
    BirthDate,
}

impl Constraint {
    /// Evaluate against a reflected value. A value of the wrong shape fails.
    pub fn holds(&self, value: FieldValue, policy: &DobPolicy) -> bool {
        match (self, value) {
            (Self::NotEmpty, FieldValue::Length(len)) => len > 0,
            (Self::BirthDate, FieldValue::Date(date)) => policy.is_plausible(date),
            _ => false,
        }
    }

    /// The failure kind recorded when the constraint does not hold.
    pub fn error_kind(&self, value: FieldValue, policy: &DobPolicy) -> ValidationErrorKind {
        match (self, value) {
            (Self::BirthDate, FieldValue::Date(date)) => match policy.check(date) {
                Err(defect) => ValidationErrorKind::InvalidDate { defect },
                Ok(()) => ValidationErrorKind::Custom {
                    code: "birth_date".to_string(),
                },
            },
            (Self::BirthDate, _) => ValidationErrorKind::Custom {
                code: "birth_date".to_string(),
            },
            (Self::NotEmpty, _) => ValidationErrorKind::Required,
        }
    }
}

/// One row of a constraint table.
pub struct FieldSpec<T> {
    /// Path the failure is reported under.
    pub name: &'static str,
    pub message: &'static str,
    pub constraint: Constraint,
    pub accessor: fn(&T) -> FieldValue,
}

/// Types carrying a constraint table.
pub trait Annotated: Sized + 'static {
    /// Constraint rows in report order.
    fn field_specs() -> &'static [FieldSpec<Self>];
}

/// Walk `T`'s constraint table and collect the failures.
pub fn validate_annotated<T: Annotated>(value: &T, policy: &DobPolicy) -> ValidationErrors {
    let specs = T::field_specs();
    let mut errors = ValidationErrors::with_capacity(specs.len());
    for spec in specs {
        let reflected = (spec.accessor)(value);
        if !spec.constraint.holds(reflected, policy) {
            errors.add_with_message(
                spec.name,
                spec.constraint.error_kind(reflected, policy),
                spec.message,
            );
        }
    }
    errors
}

#[derive(Debug, Clone, Copy)]
pub struct AnnotatedValidator {
    policy: DobPolicy,
}

impl AnnotatedValidator {
    pub fn new(policy: DobPolicy) -> Self {
        Self { policy }
    }
}

impl RecordValidator for AnnotatedValidator {
    fn style(&self) -> ValidatorStyle {
        ValidatorStyle::Annotated
    }

    fn validate(&self, record: Option<&Record>) -> ValidationErrors {
        match record {
            Some(record) => validate_annotated(record, &self.policy),
            None => ValidationErrors::null_model(messages::NULL_MODEL),
        }
    }
}
