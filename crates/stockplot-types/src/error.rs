//! Error types for stockplot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ChartKindParseError;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Terminal failures of the acquisition-to-chart pipeline.
///
/// An empty window is not a failure; see `ChartOutcome::NoDataInRange` in
/// the pipeline crate.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The provider returned an explicit error message.
    #[error("API returned an error: {0}")]
    ErrorMessage(String),

    /// The provider reported a rate limit.
    #[error("API limit reached: {0}")]
    RateLimited(String),

    /// The provider returned an informational notice (API key, plan limits).
    #[error("API notice: {0}")]
    Informational(String),

    /// The payload does not contain the series for the requested granularity.
    #[error("No time series data found for this selection (expected key '{expected}')")]
    Unrecognized {
        /// The key that was looked up.
        expected: String,
        /// The full payload, kept for diagnostics.
        payload: serde_json::Value,
    },

    /// A record is missing a field or has a non-numeric value.
    #[error("Malformed record at '{timestamp}': {defect}")]
    MalformedRecord {
        /// Key of the offending record.
        timestamp: String,
        /// What is wrong with it.
        defect: RecordDefect,
    },

    /// A key matches neither supported timestamp format.
    #[error("Cannot parse timestamp '{key}' as YYYY-MM-DD or YYYY-MM-DD HH:MM:SS")]
    TimestampParse {
        /// The offending key.
        key: String,
    },

    /// The symbol is empty or only whitespace.
    #[error("Stock symbol cannot be empty")]
    EmptySymbol,

    /// The chart kind is neither `line` nor `bar`.
    #[error(transparent)]
    InvalidChartKind(#[from] ChartKindParseError),

    /// The date window is invalid.
    #[error(transparent)]
    DateWindow(#[from] DateWindowError),
}

impl ChartError {
    /// Returns the machine-checkable kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ErrorMessage(_) => ErrorKind::ErrorMessage,
            Self::RateLimited(_) => ErrorKind::RateLimited,
            Self::Informational(_) => ErrorKind::Informational,
            Self::Unrecognized { .. } => ErrorKind::Unrecognized,
            Self::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            Self::TimestampParse { .. } => ErrorKind::TimestampParse,
            Self::EmptySymbol => ErrorKind::InvalidSymbol,
            Self::InvalidChartKind(_) => ErrorKind::InvalidChartKind,
            Self::DateWindow(_) => ErrorKind::InvalidWindow,
        }
    }

    /// Returns the raw payload carried by [`ChartError::Unrecognized`].
    #[must_use]
    pub const fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Unrecognized { payload, .. } => Some(payload),
            _ => None,
        }
    }
}

/// Discriminant of [`ChartError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Explicit provider error.
    ErrorMessage,
    /// Provider rate limit.
    RateLimited,
    /// Provider notice.
    Informational,
    /// Unknown response shape.
    Unrecognized,
    /// Record with missing or unparseable fields.
    MalformedRecord,
    /// Key in neither timestamp format.
    TimestampParse,
    /// Missing ticker symbol.
    InvalidSymbol,
    /// Unsupported chart kind.
    InvalidChartKind,
    /// Start date after end date, or unparseable bound.
    InvalidWindow,
}

/// What is wrong with a malformed record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordDefect {
    /// The record is not an object.
    #[error("record is not an object")]
    NotAnObject,
    /// A required field is absent.
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    /// A field is present but not a finite number.
    #[error("field '{field}' is not a number: {value}")]
    NotNumeric {
        /// Field name.
        field: &'static str,
        /// The raw value as text.
        value: String,
    },
}

/// Error for invalid date windows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateWindowError {
    /// Start date is after end date.
    #[error("Start date cannot be after end date: {start} > {end}")]
    InvalidRange {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },

    /// A bound is not a `YYYY-MM-DD` date.
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
