//! Provider query construction.
//!
//! The API key is appended by [`ProviderClient`](crate::ProviderClient) at
//! send time so query parameters can be logged safely.

use stockplot_types::Granularity;

use crate::OutputSize;

/// Default query endpoint.
pub const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Function name of the symbol search endpoint.
pub const SYMBOL_SEARCH_FUNCTION: &str = "SYMBOL_SEARCH";

/// Query parameters in send order.
pub type QueryParams = Vec<(&'static str, String)>;

/// Builds the query for a time series request.
///
/// The symbol is sent uppercased. Intraday requests also carry `interval`.
///
/// # Example
///
/// ```
/// use stockplot_fetch::{OutputSize, url::series_query};
/// use stockplot_types::Granularity;
///
/// let params = series_query("ibm", Granularity::Weekly, OutputSize::Full);
/// assert_eq!(params[0], ("function", "TIME_SERIES_WEEKLY".to_string()));
/// assert_eq!(params[1], ("symbol", "IBM".to_string()));
/// ```
#[must_use]
pub fn series_query(symbol: &str, granularity: Granularity, output_size: OutputSize) -> QueryParams {
    let mut params = vec![
        ("function", granularity.function().to_string()),
        ("symbol", symbol.trim().to_uppercase()),
        ("outputsize", output_size.as_str().to_string()),
    ];
    if let Some(interval) = granularity.interval() {
        params.push(("interval", interval.as_str().to_string()));
    }
    params
}

/// Builds the query for a symbol search.
#[must_use]
pub fn search_query(keywords: &str) -> QueryParams {
    vec![
        ("function", SYMBOL_SEARCH_FUNCTION.to_string()),
        ("keywords", keywords.trim().to_string()),
    ]
}
