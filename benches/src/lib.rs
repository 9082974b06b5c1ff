//! Synthetic provider payloads for stockplot benchmarks.

use chrono::{Days, NaiveDate, NaiveTime};
use serde_json::{Map, Value, json};
use stockplot_lib::{Granularity, IntradayInterval};

/// First day of every synthetic series.
pub fn series_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 3).unwrap_or_default()
}

fn record(i: usize) -> Value {
    // Bounded sawtooth so prices stay positive for any length.
    let base = 100.0 + (i % 250) as f64 * 0.1;
    json!({
        "1. open": format!("{base:.4}"),
        "2. high": format!("{:.4}", base + 1.5),
        "3. low": format!("{:.4}", base - 1.25),
        "4. close": format!("{:.4}", base + 0.5),
        "5. volume": "1000000"
    })
}

/// Builds a daily payload with one record per calendar day.
pub fn daily_payload(days: usize) -> Value {
    let start = series_start();
    let series: Map<String, Value> = (0..days)
        .map(|i| {
            let day = start + Days::new(i as u64);
            (day.format("%Y-%m-%d").to_string(), record(i))
        })
        .collect();

    let mut payload = Map::new();
    payload.insert("Meta Data".into(), json!({"2. Symbol": "BENCH"}));
    payload.insert(Granularity::Daily.series_key(), Value::Object(series));
    Value::Object(payload)
}

/// Builds an intraday payload covering `days` trading sessions.
pub fn intraday_payload(days: usize, interval: IntradayInterval) -> Value {
    let minutes: u32 = match interval {
        IntradayInterval::Minute1 => 1,
        IntradayInterval::Minute5 => 5,
        IntradayInterval::Minute15 => 15,
        IntradayInterval::Minute30 => 30,
        IntradayInterval::Minute60 => 60,
    };
    let open = NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default();
    let per_day = (390 / minutes) as usize;

    let start = series_start();
    let mut series = Map::new();
    for d in 0..days {
        let day = start + Days::new(d as u64);
        for k in 0..per_day {
            let at = day.and_time(open) + chrono::Duration::minutes(i64::from(minutes) * k as i64);
            series.insert(
                at.format("%Y-%m-%d %H:%M:%S").to_string(),
                record(d * per_day + k),
            );
        }
    }

    let mut payload = Map::new();
    payload.insert(
        Granularity::Intraday(interval).series_key(),
        Value::Object(series),
    );
    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_payload_shape() {
        let payload = daily_payload(10);
        let series = payload["Time Series (Daily)"].as_object().unwrap();
        assert_eq!(series.len(), 10);
        assert!(series.contains_key("2000-01-03"));
    }

    #[test]
    fn test_intraday_payload_shape() {
        let payload = intraday_payload(2, IntradayInterval::Minute30);
        let series = payload["Time Series (30min)"].as_object().unwrap();
        assert_eq!(series.len(), 26);
        assert!(series.contains_key("2000-01-03 09:30:00"));
    }
}
