//! Provider payload processing for stockplot.
//!
//! The pipeline turns a raw provider JSON payload into a chart-ready
//! [`ChartPayload`]:
//!
//! 1. [`classify`] checks provider notices and locates the series container
//! 2. [`extract_series`] parses every record into an [`OhlcRecord`]
//! 3. [`filter_window`] keeps records inside a [`DateWindow`] and sorts them
//! 4. [`ChartAssembler`] builds price vectors, labels and title
//!
//! [`build_chart`] runs all four steps for a [`ChartRequest`].
//!
//! [`OhlcRecord`]: stockplot_types::OhlcRecord

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod assemble;
mod classify;
mod extract;
mod filter;
mod labels;
mod search;

pub use assemble::{ChartAssembler, chart_title};
pub use classify::{ERROR_MESSAGE_KEY, INFORMATION_KEY, NOTE_KEY, check_notices, classify};
pub use extract::{
    CLOSE_FIELD, ExtractedSeries, HIGH_FIELD, LOW_FIELD, OPEN_FIELD, extract_series, parse_record,
};
pub use filter::filter_window;
pub use labels::{FULL_LABEL_LIMIT, major_step, plan_labels};
pub use search::{BEST_MATCHES_KEY, SymbolMatch, is_listed, parse_symbol_matches};

use serde_json::Value;
use stockplot_types::{
    ChartError, ChartKind, ChartPayload, DateWindow, Granularity, TimestampedRecord,
};
use tracing::{debug, info};

/// A fully validated chart request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    /// Ticker symbol, trimmed and uppercased.
    pub symbol: String,
    /// Requested sampling frequency.
    pub granularity: Granularity,
    /// Inclusive date window.
    pub window: DateWindow,
    /// Chart kind.
    pub kind: ChartKind,
}

impl ChartRequest {
    /// Creates a request, validating the window and parsing the chart kind.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::EmptySymbol`] for a blank symbol,
    /// [`ChartError::DateWindow`] for an inverted window and
    /// [`ChartError::InvalidChartKind`] for an unknown chart kind.
    pub fn new(
        symbol: &str,
        granularity: Granularity,
        window: DateWindow,
        kind: &str,
    ) -> Result<Self, ChartError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ChartError::EmptySymbol);
        }
        window.validate()?;
        Ok(Self {
            symbol: symbol.to_uppercase(),
            granularity,
            window,
            kind: kind.parse()?,
        })
    }

    /// Returns an assembler for this request.
    #[must_use]
    pub fn assembler(&self) -> ChartAssembler {
        ChartAssembler::new(self.symbol.clone(), self.kind, self.window)
    }
}

/// A chart together with the windowed series it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedChart {
    /// Sorted records inside the window.
    pub series: Vec<TimestampedRecord>,
    /// The assembled chart.
    pub payload: ChartPayload,
}

/// Result of a successful pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    /// At least one record fell inside the window.
    Chart(WindowedChart),
    /// The payload was valid but no record fell inside the window.
    NoDataInRange,
}

/// Classifies, extracts and filters a payload.
///
/// # Errors
///
/// Propagates any error of [`classify`], [`extract_series`] or
/// [`filter_window`].
pub fn windowed_series(
    payload: &Value,
    granularity: Granularity,
    window: &DateWindow,
) -> Result<Vec<TimestampedRecord>, ChartError> {
    let container = classify(payload, granularity)?;
    let series = extract_series(container, granularity)?;
    filter_window(series, window)
}

/// Runs the full pipeline for `request` against a provider payload.
///
/// The payload is never modified; calling this twice on the same input
/// yields equal outcomes.
///
/// # Errors
///
/// Returns the first failing stage's [`ChartError`]. An empty window is
/// reported as [`ChartOutcome::NoDataInRange`], not as an error.
pub fn build_chart(payload: &Value, request: &ChartRequest) -> Result<ChartOutcome, ChartError> {
    let series = windowed_series(payload, request.granularity, &request.window)?;
    if series.is_empty() {
        info!(symbol = %request.symbol, window = %request.window, "no data in range");
        return Ok(ChartOutcome::NoDataInRange);
    }

    let payload = request.assembler().assemble(&series);
    debug!(
        symbol = %request.symbol,
        points = payload.len(),
        labels = payload.labels.shown_count(),
        "assembled chart"
    );
    Ok(ChartOutcome::Chart(WindowedChart { series, payload }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stockplot_types::ErrorKind;

    fn window() -> DateWindow {
        DateWindow::parse("2024-01-01", "2024-01-31").unwrap()
    }

    #[test]
    fn test_request_normalizes_symbol() {
        let request = ChartRequest::new(" aapl ", Granularity::Daily, window(), "Line").unwrap();
        assert_eq!(request.symbol, "AAPL");
        assert_eq!(request.kind, ChartKind::Line);
    }

    #[test]
    fn test_request_rejects_blank_symbol() {
        for symbol in ["", "   ", "\t"] {
            let err = ChartRequest::new(symbol, Granularity::Daily, window(), "line").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidSymbol);
        }
        let request = ChartRequest::new(" ibm ", Granularity::Daily, window(), "line").unwrap();
        assert_eq!(request.symbol, "IBM");
    }

    #[test]
    fn test_request_rejects_kind_before_data() {
        let err = ChartRequest::new("AAPL", Granularity::Daily, window(), "pie").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChartKind);
    }

    #[test]
    fn test_build_chart_no_data() {
        let payload = json!({
            "Time Series (Daily)": {
                "2023-06-01": {"1. open": "1", "2. high": "2", "3. low": "0.5", "4. close": "1.5"}
            }
        });
        let request = ChartRequest::new("IBM", Granularity::Daily, window(), "bar").unwrap();
        assert_eq!(
            build_chart(&payload, &request).unwrap(),
            ChartOutcome::NoDataInRange
        );
    }
}
