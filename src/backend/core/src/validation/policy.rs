//! Date-of-birth plausibility policy.
//!
//! The "not in the future" half of the rule depends on the calendar year the
//! check runs in. The reference year is carried explicitly by [`DobPolicy`] so
//! every validator stays a pure function of its input; only
//! [`DobPolicy::current`] reads the wall clock.

use crate::model::DateOfBirth;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Years up to and including this one are rejected.
pub const DEFAULT_FLOOR_YEAR: i32 = 2000;

/// Why a date of birth was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DateDefect {
    /// The default sentinel, i.e. `0001-01-01`.
    Unset,
    /// Year is at or before the floor year.
    NotAfterFloor { floor: i32 },
    /// Year is at or after the reference year.
    NotBeforeReference { reference: i32 },
}

impl fmt::Display for DateDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "date is not set"),
            Self::NotAfterFloor { floor } => write!(f, "year must be after {}", floor),
            Self::NotBeforeReference { reference } => {
                write!(f, "year must be before {}", reference)
            }
        }
    }
}

/// Bounds a date of birth must fall strictly between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DobPolicy {
    /// Exclusive lower bound on the year.
    pub floor_year: i32,
    /// Exclusive upper bound on the year, normally the current year.
    pub reference_year: i32,
}

impl DobPolicy {
    /// Policy with an explicit reference year and the default floor.
    pub const fn for_year(reference_year: i32) -> Self {
        Self {
            floor_year: DEFAULT_FLOOR_YEAR,
            reference_year,
        }
    }

    /// Policy anchored at the local calendar year at the time of the call.
    pub fn current() -> Self {
        Self::for_year(chrono::Local::now().year())
    }

    /// Replace the floor year.
    pub const fn with_floor_year(mut self, floor_year: i32) -> Self {
        self.floor_year = floor_year;
        self
    }

    /// Check a date, reporting the first condition it violates.
    ///
    /// Conditions are tried in order: sentinel, floor, reference.
    pub fn check(&self, date: DateOfBirth) -> Result<(), DateDefect> {
        let year = date.year();
        if date.is_unset() || date.is_epoch_zero() {
            Err(DateDefect::Unset)
        } else if year <= self.floor_year {
            Err(DateDefect::NotAfterFloor {
                floor: self.floor_year,
            })
        } else if year >= self.reference_year {
            Err(DateDefect::NotBeforeReference {
                reference: self.reference_year,
            })
        } else {
            Ok(())
        }
    }

    pub fn is_plausible(&self, date: DateOfBirth) -> bool {
        self.check(date).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> DateOfBirth {
        DateOfBirth::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_default_date_is_unset() {
        let policy = DobPolicy::for_year(2026);
        assert_eq!(policy.check(DateOfBirth::default()), Err(DateDefect::Unset));
    }

    #[test]
    fn test_floor_is_exclusive() {
        let policy = DobPolicy::for_year(2026);
        assert_eq!(
            policy.check(date(2000, 12, 31)),
            Err(DateDefect::NotAfterFloor { floor: 2000 })
        );
        assert!(policy.is_plausible(date(2001, 1, 1)));
    }

    #[test]
    fn test_reference_year_is_exclusive() {
        let policy = DobPolicy::for_year(2026);
        assert!(policy.is_plausible(date(2025, 12, 31)));
        assert_eq!(
            policy.check(date(2026, 1, 1)),
            Err(DateDefect::NotBeforeReference { reference: 2026 })
        );
        assert!(!policy.is_plausible(date(2030, 6, 1)));
    }

    #[test]
    fn test_first_of_january_is_not_a_sentinel() {
        let policy = DobPolicy::for_year(2026);
        assert!(policy.is_plausible(date(2010, 1, 1)));
        assert!(policy.is_plausible(date(2010, 1, 15)));
        assert!(policy.is_plausible(date(2010, 7, 1)));
    }

    #[test]
    fn test_custom_floor() {
        let policy = DobPolicy::for_year(2026).with_floor_year(1900);
        assert!(policy.is_plausible(date(1950, 3, 3)));
        assert_eq!(
            policy.check(date(1900, 3, 3)),
            Err(DateDefect::NotAfterFloor { floor: 1900 })
        );
    }

    #[test]
    fn test_current_policy_rejects_this_year() {
        let policy = DobPolicy::current();
        let this_year = chrono::Local::now().year();
        assert_eq!(policy.reference_year, this_year);
        assert!(!policy.is_plausible(date(this_year, 6, 15)));
    }

    #[test]
    fn test_empty_window_rejects_everything() {
        let policy = DobPolicy::for_year(2001);
        assert!(!policy.is_plausible(date(2000, 6, 1)));
        assert!(!policy.is_plausible(date(2001, 6, 1)));
    }

    #[test]
    fn test_defect_display() {
        assert_eq!(DateDefect::Unset.to_string(), "date is not set");
        assert_eq!(
            DateDefect::NotAfterFloor { floor: 2000 }.to_string(),
            "year must be after 2000"
        );
        assert_eq!(
            DateDefect::NotBeforeReference { reference: 2026 }.to_string(),
            "year must be before 2026"
        );
    }
}
