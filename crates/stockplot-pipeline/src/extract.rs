//! Series extraction from the classified payload.

use serde_json::{Map, Value};
use stockplot_types::{ChartError, Granularity, OhlcRecord, RecordDefect};
use tracing::debug;

/// Field name of the opening price.
pub const OPEN_FIELD: &str = "1. open";
/// Field name of the high price.
pub const HIGH_FIELD: &str = "2. high";
/// Field name of the low price.
pub const LOW_FIELD: &str = "3. low";
/// Field name of the closing price.
pub const CLOSE_FIELD: &str = "4. close";

/// Timestamp keys paired with parsed prices, in payload iteration order.
pub type ExtractedSeries = Vec<(String, OhlcRecord)>;

/// Parses every record of a series block.
///
/// The whole extraction fails on the first malformed record; nothing is
/// silently dropped.
///
/// # Errors
///
/// Returns [`ChartError::MalformedRecord`] naming the first record that is
/// not an object, lacks one of the four price fields, or holds a value that
/// is not a finite number.
pub fn extract_series(
    container: &Map<String, Value>,
    granularity: Granularity,
) -> Result<ExtractedSeries, ChartError> {
    let series = container
        .iter()
        .map(|(timestamp, value)| {
            parse_record(value)
                .map(|ohlc| (timestamp.clone(), ohlc))
                .map_err(|defect| ChartError::MalformedRecord {
                    timestamp: timestamp.clone(),
                    defect,
                })
        })
        .collect::<Result<ExtractedSeries, _>>()?;

    debug!(%granularity, records = series.len(), "extracted series");
    Ok(series)
}

/// Parses one record object into prices.
///
/// # Errors
///
/// Returns the defect of the first field that cannot be read.
pub fn parse_record(value: &Value) -> Result<OhlcRecord, RecordDefect> {
    let object = value.as_object().ok_or(RecordDefect::NotAnObject)?;
    Ok(OhlcRecord::new(
        parse_field(object, OPEN_FIELD)?,
        parse_field(object, HIGH_FIELD)?,
        parse_field(object, LOW_FIELD)?,
        parse_field(object, CLOSE_FIELD)?,
    ))
}

fn parse_field(object: &Map<String, Value>, field: &'static str) -> Result<f64, RecordDefect> {
    let value = object.get(field).ok_or(RecordDefect::MissingField(field))?;
    let parsed = match value {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecordDefect::NotNumeric {
            field,
            value: match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        })
}
