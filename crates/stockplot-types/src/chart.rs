//! Chart payload handed to rendering sinks.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Series names in legend order.
pub const SERIES_NAMES: [&str; 4] = ["Open", "High", "Low", "Close"];

/// Chart style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// One polyline per series.
    Line,
    /// Grouped bars per point.
    Bar,
}

impl ChartKind {
    /// Returns the chart kind as a lowercase string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
        }
    }

    /// Returns all chart kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Line, Self::Bar]
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            _ => Err(ChartKindParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unsupported chart kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid chart type '{0}', expected one of: line, bar")]
pub struct ChartKindParseError(pub String);

/// Which x-axis labels are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPlan {
    /// One label per point, always complete for tick alignment.
    pub labels: Vec<String>,
    /// Indices of the labels shown when the axis is thinned.
    ///
    /// `None` means every label is shown.
    pub major: Option<Vec<usize>>,
}

impl LabelPlan {
    /// Returns true if every label (minor labels included) is drawn.
    #[must_use]
    pub const fn shows_all(&self) -> bool {
        self.major.is_none()
    }

    /// Returns true if the label at `index` is drawn.
    #[must_use]
    pub fn is_shown(&self, index: usize) -> bool {
        match &self.major {
            None => index < self.labels.len(),
            Some(indices) => indices.binary_search(&index).is_ok(),
        }
    }

    /// Returns the number of labels drawn.
    #[must_use]
    pub fn shown_count(&self) -> usize {
        self.major.as_ref().map_or(self.labels.len(), Vec::len)
    }
}

/// Everything a rendering sink needs to draw one chart.
///
/// The four price series are parallel to `labels.labels` and kept in the
/// order of the windowed series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    /// Ticker symbol.
    pub symbol: String,
    /// Chart style.
    pub kind: ChartKind,
    /// Chart title.
    pub title: String,
    /// Opening prices.
    pub open: Vec<f64>,
    /// High prices.
    pub high: Vec<f64>,
    /// Low prices.
    pub low: Vec<f64>,
    /// Closing prices.
    pub close: Vec<f64>,
    /// X-axis labels.
    pub labels: LabelPlan,
}

impl ChartPayload {
    /// Returns the number of points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.open.len()
    }

    /// Returns true if there are no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Returns `(name, values)` pairs in legend order.
    #[must_use]
    pub fn series(&self) -> [(&'static str, &[f64]); 4] {
        [
            (SERIES_NAMES[0], self.open.as_slice()),
            (SERIES_NAMES[1], self.high.as_slice()),
            (SERIES_NAMES[2], self.low.as_slice()),
            (SERIES_NAMES[3], self.close.as_slice()),
        ]
    }

    /// Returns the smallest and largest value across all four series.
    #[must_use]
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.series()
            .iter()
            .flat_map(|(_, values)| values.iter().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_kind_parse_case_insensitive() {
        assert_eq!("LINE".parse::<ChartKind>().unwrap(), ChartKind::Line);
        assert_eq!("Bar".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        assert_eq!(
            "pie".parse::<ChartKind>(),
            Err(ChartKindParseError("pie".to_string()))
        );
    }

    #[test]
    fn test_label_plan_thinned() {
        let plan = LabelPlan {
            labels: (0..5).map(|i| format!("d{i}")).collect(),
            major: Some(vec![0, 2, 4]),
        };
        assert!(!plan.shows_all());
        assert!(plan.is_shown(2));
        assert!(!plan.is_shown(3));
        assert_eq!(plan.shown_count(), 3);
    }

    #[test]
    fn test_label_plan_all() {
        let plan = LabelPlan {
            labels: vec!["a".into(), "b".into()],
            major: None,
        };
        assert!(plan.shows_all());
        assert!(plan.is_shown(1));
        assert!(!plan.is_shown(2));
    }

    #[test]
    fn test_value_bounds() {
        let payload = ChartPayload {
            symbol: "IBM".into(),
            kind: ChartKind::Line,
            title: String::new(),
            open: vec![1.0, 3.0],
            high: vec![2.0, 4.0],
            low: vec![0.5, 2.5],
            close: vec![1.5, 3.5],
            labels: LabelPlan {
                labels: vec!["a".into(), "b".into()],
                major: None,
            },
        };
        assert_eq!(payload.value_bounds(), Some((0.5, 4.0)));
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.series()[3].0, "Close");
    }
}
