//! Series granularity definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sampling interval for intraday series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IntradayInterval {
    /// 1-minute bars.
    #[serde(rename = "1min")]
    Minute1,
    /// 5-minute bars.
    #[default]
    #[serde(rename = "5min")]
    Minute5,
    /// 15-minute bars.
    #[serde(rename = "15min")]
    Minute15,
    /// 30-minute bars.
    #[serde(rename = "30min")]
    Minute30,
    /// 60-minute bars.
    #[serde(rename = "60min")]
    Minute60,
}

impl IntradayInterval {
    /// Returns the interval as the provider spells it.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1min",
            Self::Minute5 => "5min",
            Self::Minute15 => "15min",
            Self::Minute30 => "30min",
            Self::Minute60 => "60min",
        }
    }

    /// Returns all available intervals.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute1,
            Self::Minute5,
            Self::Minute15,
            Self::Minute30,
            Self::Minute60,
        ]
    }
}

impl std::fmt::Display for IntradayInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IntradayInterval {
    type Err = GranularityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1min" | "1m" | "m1" => Ok(Self::Minute1),
            "5min" | "5m" | "m5" => Ok(Self::Minute5),
            "15min" | "15m" | "m15" => Ok(Self::Minute15),
            "30min" | "30m" | "m30" => Ok(Self::Minute30),
            "60min" | "60m" | "m60" | "1h" => Ok(Self::Minute60),
            _ => Err(GranularityParseError::Interval(s.to_string())),
        }
    }
}

/// Requested sampling frequency of a price series.
///
/// Each granularity maps to one provider function and one top-level key in
/// the provider payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Intraday bars at the given interval.
    Intraday(IntradayInterval),
    /// One bar per trading day.
    #[default]
    Daily,
    /// One bar per week.
    Weekly,
    /// One bar per month.
    Monthly,
}

impl Granularity {
    /// Returns the provider function name used to request this series.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        match self {
            Self::Intraday(_) => "TIME_SERIES_INTRADAY",
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Weekly => "TIME_SERIES_WEEKLY",
            Self::Monthly => "TIME_SERIES_MONTHLY",
        }
    }

    /// Returns the top-level payload key holding the series.
    #[must_use]
    pub fn series_key(&self) -> String {
        match self {
            Self::Intraday(interval) => format!("Time Series ({interval})"),
            Self::Daily => "Time Series (Daily)".to_string(),
            Self::Weekly => "Weekly Time Series".to_string(),
            Self::Monthly => "Monthly Time Series".to_string(),
        }
    }

    /// Returns the intraday interval, if any.
    #[must_use]
    pub const fn interval(&self) -> Option<IntradayInterval> {
        match self {
            Self::Intraday(interval) => Some(*interval),
            _ => None,
        }
    }

    /// Returns true if timestamps carry a time of day.
    #[must_use]
    pub const fn is_intraday(&self) -> bool {
        matches!(self, Self::Intraday(_))
    }

    /// Returns a short lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Intraday(_) => "intraday",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Returns one granularity of each kind, intraday at its default interval.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Intraday(IntradayInterval::Minute5),
            Self::Daily,
            Self::Weekly,
            Self::Monthly,
        ]
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Intraday(interval) => write!(f, "intraday ({interval})"),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}

impl FromStr for Granularity {
    type Err = GranularityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "intraday" | "time_series_intraday" => {
                Ok(Self::Intraday(IntradayInterval::default()))
            }
            "daily" | "day" | "d1" | "time_series_daily" => Ok(Self::Daily),
            "weekly" | "week" | "w1" | "time_series_weekly" => Ok(Self::Weekly),
            "monthly" | "month" | "mn1" | "time_series_monthly" => Ok(Self::Monthly),
            _ => Err(GranularityParseError::Granularity(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid granularity or interval string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GranularityParseError {
    /// Unknown granularity.
    #[error(
        "invalid time series '{0}', expected one of: intraday, daily, weekly, monthly \
         (or TIME_SERIES_INTRADAY, TIME_SERIES_DAILY, TIME_SERIES_WEEKLY, TIME_SERIES_MONTHLY)"
    )]
    Granularity(String),
    /// Unknown intraday interval.
    #[error("invalid interval '{0}', expected one of: 1min, 5min, 15min, 30min, 60min")]
    Interval(String),
}
