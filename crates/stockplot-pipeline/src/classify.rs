//! Provider response classification.

use serde_json::{Map, Value};
use stockplot_types::{ChartError, Granularity};
use tracing::{debug, warn};

/// Key of an explicit provider error.
pub const ERROR_MESSAGE_KEY: &str = "Error Message";

/// Key of a rate-limit notice.
pub const NOTE_KEY: &str = "Note";

/// Key of an informational notice (API key or plan limits).
pub const INFORMATION_KEY: &str = "Information";

/// Fails on provider notices, checked in priority order:
/// `Error Message`, then `Note`, then `Information`.
///
/// # Errors
///
/// Returns [`ChartError::ErrorMessage`], [`ChartError::RateLimited`] or
/// [`ChartError::Informational`] when the matching key is present.
pub fn check_notices(payload: &Value) -> Result<(), ChartError> {
    let Some(object) = payload.as_object() else {
        return Ok(());
    };

    if let Some(message) = object.get(ERROR_MESSAGE_KEY) {
        warn!(message = %notice_text(message), "provider returned an error");
        return Err(ChartError::ErrorMessage(notice_text(message)));
    }
    if let Some(note) = object.get(NOTE_KEY) {
        warn!(note = %notice_text(note), "provider rate limit");
        return Err(ChartError::RateLimited(notice_text(note)));
    }
    if let Some(info) = object.get(INFORMATION_KEY) {
        warn!(information = %notice_text(info), "provider notice");
        return Err(ChartError::Informational(notice_text(info)));
    }
    Ok(())
}

/// Classifies a raw payload and returns the series block for `granularity`.
///
/// Notices are fatal even when a series block is also present.
///
/// # Errors
///
/// Returns the notice errors of [`check_notices`], or
/// [`ChartError::Unrecognized`] (carrying the full payload) when the payload
/// has no object under the expected key.
pub fn classify(payload: &Value, granularity: Granularity) -> Result<&Map<String, Value>, ChartError> {
    check_notices(payload)?;

    let expected = granularity.series_key();
    match payload.get(&expected).and_then(Value::as_object) {
        Some(container) => {
            debug!(key = %expected, entries = container.len(), "series block found");
            Ok(container)
        }
        None => Err(ChartError::Unrecognized {
            expected,
            payload: payload.clone(),
        }),
    }
}

fn notice_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stockplot_types::{ErrorKind, IntradayInterval};

    #[test]
    fn test_error_message_wins() {
        let payload = json!({
            "Error Message": "Invalid API call.",
            "Note": "Thank you for using Alpha Vantage!",
            "Information": "premium endpoint",
            "Time Series (Daily)": {}
        });
        let err = classify(&payload, Granularity::Daily).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ErrorMessage);
        assert_eq!(err.to_string(), "API returned an error: Invalid API call.");
    }

    #[test]
    fn test_note_before_information() {
        let payload = json!({"Note": "5 calls per minute", "Information": "x"});
        let err = classify(&payload, Granularity::Daily).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RateLimited);
    }

    #[test]
    fn test_information_fatal_with_series_present() {
        let payload = json!({
            "Information": "The demo API key is for demo purposes only.",
            "Time Series (Daily)": {"2024-01-02": {}}
        });
        let err = classify(&payload, Granularity::Daily).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Informational);
    }

    #[test]
    fn test_missing_key_is_unrecognized() {
        let payload = json!({"Weekly Time Series": {}});
        let err = classify(&payload, Granularity::Daily).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unrecognized);
        assert_eq!(err.payload(), Some(&payload));
    }

    #[test]
    fn test_non_object_block_is_unrecognized() {
        let payload = json!({"Time Series (Daily)": []});
        let err = classify(&payload, Granularity::Daily).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unrecognized);

        let err = classify(&json!([1, 2, 3]), Granularity::Daily).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unrecognized);
    }

    #[test]
    fn test_intraday_key_follows_interval() {
        let payload = json!({"Time Series (15min)": {"2024-01-02 09:30:00": {}}});
        let granularity = Granularity::Intraday(IntradayInterval::Minute15);
        assert_eq!(classify(&payload, granularity).unwrap().len(), 1);

        let other = Granularity::Intraday(IntradayInterval::Minute5);
        assert!(classify(&payload, other).is_err());
    }

    #[test]
    fn test_non_string_notice() {
        let payload = json!({"Note": {"limit": 5}});
        let err = check_notices(&payload).unwrap_err();
        assert_eq!(err.to_string(), r#"API limit reached: {"limit":5}"#);
    }
}
