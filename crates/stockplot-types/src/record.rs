//! OHLC records and timestamp detection.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Timestamp format of daily, weekly and monthly keys.
pub const DATE_ONLY_FORMAT: &str = "%Y-%m-%d";

/// Timestamp format of intraday keys.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length of a date-only key (`YYYY-MM-DD`).
pub const DATE_ONLY_LEN: usize = 10;

/// Open/high/low/close prices for a single period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcRecord {
    /// Opening price.
    pub open: f64,
    /// Highest price during the period.
    pub high: f64,
    /// Lowest price during the period.
    pub low: f64,
    /// Closing price.
    pub close: f64,
}

impl OhlcRecord {
    /// Creates a new OHLC record.
    #[must_use]
    pub const fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }
}

/// Result of inspecting a raw timestamp key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedTimestamp {
    /// `YYYY-MM-DD`, exactly ten characters.
    DateOnly(NaiveDate),
    /// `YYYY-MM-DD HH:MM:SS`.
    DateTime(NaiveDateTime),
    /// Neither supported format.
    Unparseable,
}

impl DetectedTimestamp {
    /// Classifies a raw key.
    ///
    /// Keys of exactly ten characters are only tried as dates; every other
    /// length is only tried as a date-time.
    #[must_use]
    pub fn detect(raw: &str) -> Self {
        if raw.len() == DATE_ONLY_LEN {
            NaiveDate::parse_from_str(raw, DATE_ONLY_FORMAT)
                .map_or(Self::Unparseable, Self::DateOnly)
        } else {
            NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
                .map_or(Self::Unparseable, Self::DateTime)
        }
    }

    /// Returns the calendar date, truncating any time of day.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::DateOnly(date) => Some(*date),
            Self::DateTime(dt) => Some(dt.date()),
            Self::Unparseable => None,
        }
    }

    /// Returns the time of day for date-time keys.
    #[must_use]
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Self::DateTime(dt) => Some(dt.time()),
            _ => None,
        }
    }
}

/// An OHLC record paired with its raw key and derived calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimestampedRecord {
    /// Raw key as it appeared in the provider payload.
    pub timestamp: String,
    /// Calendar date used for window comparisons.
    pub date: NaiveDate,
    /// Time of day, present for intraday keys.
    pub time: Option<NaiveTime>,
    /// The prices.
    pub ohlc: OhlcRecord,
}

impl TimestampedRecord {
    /// Creates a new record.
    #[must_use]
    pub const fn new(
        timestamp: String,
        date: NaiveDate,
        time: Option<NaiveTime>,
        ohlc: OhlcRecord,
    ) -> Self {
        Self {
            timestamp,
            date,
            time,
            ohlc,
        }
    }

    /// Returns the x-axis label for this point.
    ///
    /// Date-only keys render as `YYYY-MM-DD`, intraday keys as
    /// `YYYY-MM-DD HH:MM`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.time {
            Some(time) => self.date.and_time(time).format("%Y-%m-%d %H:%M").to_string(),
            None => self.date.format(DATE_ONLY_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_detect_date_only() {
        let detected = DetectedTimestamp::detect("2024-01-05");
        assert_eq!(
            detected,
            DetectedTimestamp::DateOnly(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap())
        );
        assert_eq!(detected.time(), None);
    }

    #[test]
    fn test_detect_date_time_truncates() {
        let detected = DetectedTimestamp::detect("2024-01-05 15:55:00");
        assert!(matches!(detected, DetectedTimestamp::DateTime(_)));
        assert_eq!(detected.date(), NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(detected.time(), NaiveTime::from_hms_opt(15, 55, 0));
    }

    #[test]
    fn test_detect_ten_chars_not_a_date() {
        // Ten characters never fall through to the date-time format.
        assert_eq!(
            DetectedTimestamp::detect("2024-13-05"),
            DetectedTimestamp::Unparseable
        );
        assert_eq!(
            DetectedTimestamp::detect("abcdefghij"),
            DetectedTimestamp::Unparseable
        );
    }

    #[test]
    fn test_detect_other_lengths() {
        assert_eq!(
            DetectedTimestamp::detect("2024-1-5"),
            DetectedTimestamp::Unparseable
        );
        assert_eq!(
            DetectedTimestamp::detect("2024-01-05T15:55:00"),
            DetectedTimestamp::Unparseable
        );
        assert_eq!(DetectedTimestamp::detect(""), DetectedTimestamp::Unparseable);
    }

    fn record(raw: &str) -> TimestampedRecord {
        let detected = DetectedTimestamp::detect(raw);
        TimestampedRecord::new(
            raw.to_string(),
            detected.date().unwrap(),
            detected.time(),
            OhlcRecord::new(1.0, 2.0, 0.5, 1.5),
        )
    }

    #[test]
    fn test_labels() {
        assert_eq!(record("2024-01-05").label(), "2024-01-05");
        assert_eq!(record("2024-01-05 09:35:00").label(), "2024-01-05 09:35");
    }

    #[test]
    fn test_unparseable_has_no_date() {
        assert_eq!(DetectedTimestamp::Unparseable.date(), None);
        assert_eq!(DetectedTimestamp::Unparseable.time(), None);
    }

    #[test]
    fn test_ohlc_order() {
        let ohlc = OhlcRecord::new(1.0, 2.0, 0.5, 1.5);
        assert_relative_eq!(ohlc.open, 1.0);
        assert_relative_eq!(ohlc.high, 2.0);
        assert_relative_eq!(ohlc.low, 0.5);
        assert_relative_eq!(ohlc.close, 1.5);
    }
}
