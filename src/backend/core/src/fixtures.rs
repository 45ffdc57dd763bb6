//! The fixed records every validator is exercised against.
//!
//! Shared by the benchmark, the CLI and the tests.

use crate::model::{DateOfBirth, Record};
use serde::Serialize;

/// A named input: a record or its absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub name: &'static str,
    pub record: Option<Record>,
}

impl Fixture {
    /// The input as validators take it.
    pub fn record(&self) -> Option<&Record> {
        self.record.as_ref()
    }
}

/// No record at all.
pub fn null_model() -> Fixture {
    Fixture {
        name: "null_model",
        record: None,
    }
}

/// Empty numbers, no name, unset date of birth. Fails every field.
pub fn blank() -> Fixture {
    Fixture {
        name: "blank",
        record: Some(Record::new().with_numbers([])),
    }
}

/// Empty numbers, empty name, first plausible date. Fails numbers and name.
pub fn boundary() -> Fixture {
    Fixture {
        name: "boundary",
        record: Some(
            Record::new()
                .with_numbers([])
                .with_name("")
                .with_date_of_birth(date(2001, 1, 1)),
        ),
    }
}

/// Passes for any reference year after 2010.
pub fn valid() -> Fixture {
    Fixture {
        name: "valid",
        record: Some(
            Record::new()
                .with_numbers([1, 2, 3])
                .with_name("Jane Doe")
                .with_count(3)
                .with_date_of_birth(date(2010, 6, 15)),
        ),
    }
}

/// All fixtures, from most to least broken.
pub fn all() -> [Fixture; 4] {
    [null_model(), blank(), boundary(), valid()]
}

fn date(year: i32, month: u32, day: u32) -> DateOfBirth {
    DateOfBirth::from_ymd(year, month, day).unwrap_or_default()
}
