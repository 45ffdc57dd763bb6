//! The validated record.

use crate::error::{ErrorCode, ErrorContext, Result};
use crate::validators::{fields, messages};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar date of birth.
///
/// The default value is `0001-01-01`, which the validators treat as "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// Build from year, month and day. `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Equal to the default sentinel.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    /// Exactly day 1, month 1, year 1.
    pub fn is_epoch_zero(&self) -> bool {
        self.day() == 1 && self.month() == 1 && self.year() == 1
    }
}

impl Default for DateOfBirth {
    fn default() -> Self {
        // 0001-01-01 is within chrono's supported range.
        Self(NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN))
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateOfBirth {
    type Err = crate::error::FieldcheckError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .with_error_code(ErrorCode::InvalidInput)
    }
}

impl From<NaiveDate> for DateOfBirth {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// A person-like record with no identifier.
///
/// JSON uses camelCase keys. Missing `name`/`numbers` read as absent, missing
/// `count` as zero and missing `dateOfBirth` as the unset sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub date_of_birth: DateOfBirth,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub numbers: Option<Vec<i32>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: DateOfBirth) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_numbers(mut self, numbers: impl IntoIterator<Item = i32>) -> Self {
        self.numbers = Some(numbers.into_iter().collect());
        self
    }
}

/// Parse a record from JSON. A literal `null` is the absent record.
pub fn parse_record(json: &str) -> Result<Option<Record>> {
    Ok(serde_json::from_str(json)?)
}

crate::annotate! {
    Record {
        #[not_empty(message = messages::NUMBERS_EMPTY)]
        numbers as fields::NUMBERS,
        #[not_empty(message = messages::NAME_EMPTY)]
        name as fields::NAME,
        #[birth_date(message = messages::DOB_INVALID)]
        date_of_birth as fields::DATE_OF_BIRTH,
    }
}
