use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::ValidationError;

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The moment the countdown runs towards, in local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetMoment(NaiveDateTime);

impl TargetMoment {
    #[must_use]
    pub const fn at(self) -> NaiveDateTime {
        self.0
    }

    #[must_use]
    pub fn remaining_from(self, now: NaiveDateTime) -> TimeDelta {
        self.0.signed_duration_since(now)
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Full English month name, e.g. `October`.
    #[must_use]
    pub fn month_name(self) -> String {
        self.0.format("%B").to_string()
    }
}

impl fmt::Display for TargetMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%B %-d, %Y %H:%M:%S"))
    }
}

impl std::str::FromStr for TargetMoment {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        for format in DATE_TIME_FORMATS {
            if let Ok(at) = NaiveDateTime::parse_from_str(value, format) {
                return Ok(Self(at));
            }
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidTarget {
                value: value.to_owned(),
            })
    }
}
