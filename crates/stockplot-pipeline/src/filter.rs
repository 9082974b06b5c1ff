//! Date-window filtering and chronological ordering.

use stockplot_types::{ChartError, DateWindow, DetectedTimestamp, TimestampedRecord};
use tracing::debug;

use crate::ExtractedSeries;

/// Keeps the records whose calendar date lies inside `window` (both bounds
/// inclusive), sorted ascending by their raw timestamp key.
///
/// Every key is parsed, including keys that fall outside the window. Sorting
/// on the raw key is chronological for both supported formats since they are
/// zero-padded, and keeps intraday points of the same day in time order.
///
/// An empty result is not an error.
///
/// # Errors
///
/// Returns [`ChartError::DateWindow`] if the window is inverted and
/// [`ChartError::TimestampParse`] naming the first key in neither supported
/// format.
pub fn filter_window(
    series: ExtractedSeries,
    window: &DateWindow,
) -> Result<Vec<TimestampedRecord>, ChartError> {
    window.validate()?;

    let total = series.len();
    let mut kept = Vec::with_capacity(total);
    for (timestamp, ohlc) in series {
        let detected = DetectedTimestamp::detect(&timestamp);
        let Some(date) = detected.date() else {
            return Err(ChartError::TimestampParse { key: timestamp });
        };
        if window.contains(date) {
            kept.push(TimestampedRecord::new(timestamp, date, detected.time(), ohlc));
        }
    }

    kept.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    debug!(%window, total, kept = kept.len(), "applied date window");
    Ok(kept)
}
