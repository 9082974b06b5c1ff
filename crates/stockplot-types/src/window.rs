//! Inclusive date windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DateWindowError;

/// Date format accepted for window bounds.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar window with both bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    /// Start date (inclusive).
    pub start: NaiveDate,
    /// End date (inclusive).
    pub end: NaiveDate,
}

impl DateWindow {
    /// Creates a new window, validating that start <= end.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if start > end {
            return Err(DateWindowError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses both bounds from `YYYY-MM-DD` strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not a valid date or start > end.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateWindowError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Checks the start <= end invariant on a window built field by field.
    ///
    /// # Errors
    ///
    /// Returns an error if start > end.
    pub fn validate(&self) -> Result<(), DateWindowError> {
        if self.start > self.end {
            return Err(DateWindowError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Returns true if the window contains the given date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for DateWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, DateWindowError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| DateWindowError::InvalidDate(input.to_string()))
}
