//! The four record validator styles.
//!
//! Every style implements [`RecordValidator`] and produces the same failures
//! in the same order for every input: `numbers`, then `name`, then
//! `dateOfBirth`. An absent record yields only the null-model failure.

pub mod annotated;
pub mod fluent;
pub mod imperative;
pub mod matching;

use crate::error::{FieldcheckError, Result};
use crate::model::Record;
use crate::validation::{DobPolicy, ValidationErrors, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

pub use annotated::{validate_annotated, AnnotatedValidator};
pub use fluent::FluentValidator;
pub use imperative::{validate_record, ImperativeValidator};
pub use matching::MatchingValidator;

/// Failure messages, shared by every style.
pub mod messages {
    pub const NULL_MODEL: &str = "Null model.";
    pub const NUMBERS_EMPTY: &str = "Numbers are empty.";
    pub const NAME_EMPTY: &str = "Name is empty.";
    pub const DOB_INVALID: &str = "Dob is invalid.";
}

/// Field paths failures are reported under.
pub mod fields {
    pub use crate::validation::ROOT_FIELD as ROOT;
    pub const NUMBERS: &str = "numbers";
    pub const NAME: &str = "name";
    pub const DATE_OF_BIRTH: &str = "dateOfBirth";
}

/// A validator for [`Record`]s.
pub trait RecordValidator: Send + Sync {
    /// Which style this validator is written in.
    fn style(&self) -> ValidatorStyle;

    /// Collect every failure for `record`, in report order.
    fn validate(&self, record: Option<&Record>) -> ValidationErrors;

    fn is_valid(&self, record: Option<&Record>) -> bool {
        self.validate(record).is_empty()
    }

    /// `validate` as a `Result`.
    fn check(&self, record: Option<&Record>) -> ValidationResult<()> {
        let errors = self.validate(record);
        crate::bail_if_errors!(errors);
        Ok(())
    }
}

/// The available validator styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorStyle {
    Matching,
    Fluent,
    Annotated,
    Imperative,
}

impl ValidatorStyle {
    pub const ALL: [ValidatorStyle; 4] = [
        ValidatorStyle::Matching,
        ValidatorStyle::Fluent,
        ValidatorStyle::Annotated,
        ValidatorStyle::Imperative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matching => "matching",
            Self::Fluent => "fluent",
            Self::Annotated => "annotated",
            Self::Imperative => "imperative",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Matching => "hand-written match expressions with guards",
            Self::Fluent => "rule-builder chain with per-rule messages",
            Self::Annotated => "constraint table declared with annotate! and walked at run time",
            Self::Imperative => "plain if statements",
        }
    }

    /// Build a validator of this style.
    pub fn build(self, policy: DobPolicy) -> Box<dyn RecordValidator> {
        trace!(
            style = self.as_str(),
            floor_year = policy.floor_year,
            reference_year = policy.reference_year,
            "Building validator"
        );
        match self {
            Self::Matching => Box::new(MatchingValidator::new(policy)),
            Self::Fluent => Box::new(FluentValidator::new(policy)),
            Self::Annotated => Box::new(AnnotatedValidator::new(policy)),
            Self::Imperative => Box::new(ImperativeValidator::new(policy)),
        }
    }
}

impl fmt::Display for ValidatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ValidatorStyle {
    type Err = FieldcheckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                FieldcheckError::invalid_input(format!("Unknown validator style: {}", s))
                    .with_context("expected", Self::ALL.map(|style| style.as_str()))
            })
    }
}

/// Build one validator of each style, in [`ValidatorStyle::ALL`] order.
pub fn all_validators(policy: DobPolicy) -> Vec<Box<dyn RecordValidator>> {
    ValidatorStyle::ALL
        .into_iter()
        .map(|style| style.build(policy))
        .collect()
}
