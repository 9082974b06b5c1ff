//! Symbol search response parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stockplot_types::ChartError;

use crate::check_notices;

/// Key holding the list of search matches.
pub const BEST_MATCHES_KEY: &str = "bestMatches";

/// One entry of a symbol search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatch {
    /// Ticker symbol, uppercased.
    pub symbol: String,
    /// Company or fund name.
    pub name: String,
    /// Listing region.
    pub region: String,
    /// Trading currency.
    pub currency: String,
    /// Provider relevance score in `[0, 1]`.
    pub match_score: Option<f64>,
}

/// Parses a symbol search payload.
///
/// Entries without a symbol are skipped; a payload without `bestMatches`
/// yields no matches.
///
/// # Errors
///
/// Returns the provider notice errors of [`check_notices`].
pub fn parse_symbol_matches(payload: &Value) -> Result<Vec<SymbolMatch>, ChartError> {
    check_notices(payload)?;

    let Some(entries) = payload.get(BEST_MATCHES_KEY).and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .filter_map(|entry| {
            let symbol = text(entry, "1. symbol").trim().to_uppercase();
            if symbol.is_empty() {
                return None;
            }
            Some(SymbolMatch {
                symbol,
                name: text(entry, "2. name"),
                region: text(entry, "4. region"),
                currency: text(entry, "8. currency"),
                match_score: entry
                    .get("9. matchScore")
                    .and_then(Value::as_str)
                    .and_then(|s| s.parse().ok()),
            })
        })
        .collect())
}

/// Returns true if `symbol` is one of the matches (case-insensitive).
#[must_use]
pub fn is_listed(matches: &[SymbolMatch], symbol: &str) -> bool {
    let symbol = symbol.trim().to_uppercase();
    matches.iter().any(|m| m.symbol == symbol)
}

fn text(entry: &Value, field: &str) -> String {
    entry
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
