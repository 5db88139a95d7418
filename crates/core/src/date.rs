//! Event dates as `dd-mm-yyyy` strings.
//!
//! The format rule is deliberately permissive: it checks shape and field
//! ranges but not calendar correctness, so `31-02-2024` is accepted. This
//! matches the documented behavior of the system and is a known latent
//! defect, not something to tighten here. Ordering is lexical on the raw
//! string, which only coincidentally tracks chronology within a month.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Validated `dd-mm-yyyy` date string.
///
/// Value object: immutable once parsed, compared (and ordered) by the raw
/// string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventDate(String);

impl EventDate {
    /// Parse a date string against the format rule.
    ///
    /// Well-formed iff: exactly 10 characters, exactly 3 dash-separated
    /// numeric fields read as day-month-year, day in [1,31], month in
    /// [1,12], year >= 2023.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.len() != 10 {
            return Err(DomainError::invalid_date(format!(
                "expected dd-mm-yyyy, got '{raw}'"
            )));
        }

        let parts: Vec<&str> = raw.split('-').collect();
        if parts.len() != 3 {
            return Err(DomainError::invalid_date(format!(
                "expected 3 dash-separated fields, got '{raw}'"
            )));
        }

        let numeric = |s: &str| {
            s.parse::<u32>()
                .map_err(|_| DomainError::invalid_date(format!("non-numeric field in '{raw}'")))
        };
        let day = numeric(parts[0])?;
        let month = numeric(parts[1])?;
        let year = numeric(parts[2])?;

        if !(1..=31).contains(&day) {
            return Err(DomainError::invalid_date(format!("day {day} out of range")));
        }
        if !(1..=12).contains(&month) {
            return Err(DomainError::invalid_date(format!("month {month} out of range")));
        }
        if year < 2023 {
            return Err(DomainError::invalid_date(format!("year {year} before 2023")));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EventDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for EventDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
