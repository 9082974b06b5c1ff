//! Fetch, window and chart historical stock prices.
//!
//! This is a facade crate that re-exports functionality from the stockplot
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use stockplot_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = ProviderClient::new(ClientConfig::default())?;
//!     let window = DateWindow::parse("2024-01-01", "2024-03-31")?;
//!     let request = ChartRequest::new("IBM", Granularity::Daily, window, "line")?;
//!
//!     let payload = client.fetch_series(&request.symbol, request.granularity).await?;
//!     if let ChartOutcome::Chart(chart) = build_chart(&payload, &request)? {
//!         let path = render_to_dir(&SvgRenderer::new(), &chart.payload, "charts".as_ref(), false)?;
//!         println!("Chart written to {}", path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use stockplot_types::*;

// Re-export the payload pipeline
pub use stockplot_pipeline::{
    ChartAssembler, ChartOutcome, ChartRequest, SymbolMatch, WindowedChart, build_chart,
    check_notices, classify, extract_series, filter_window, is_listed, parse_symbol_matches,
    plan_labels, windowed_series,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use stockplot_fetch::{
    ClientConfig, DEMO_API_KEY, FetchError, OutputSize, ProviderClient, ReplaySource,
    SeriesSource, url,
};

// Re-export renderers
#[cfg(feature = "render")]
pub use stockplot_render::{
    ChartRenderer, JsonRenderer, OutputFormat, RenderError, SvgRenderer, artifact_name,
    render_to_dir,
};

// Re-export the symbol registry
#[cfg(feature = "symbols")]
pub use stockplot_symbols::{SymbolError, SymbolRegistry};

/// Prelude module for convenient imports.
///
/// ```
/// use stockplot_lib::prelude::*;
/// ```
pub mod prelude {
    pub use stockplot_types::{
        ChartError, ChartKind, ChartPayload, DateWindow, Granularity, IntradayInterval,
        OhlcRecord, Result, TimestampedRecord,
    };

    pub use stockplot_pipeline::{ChartOutcome, ChartRequest, build_chart};

    #[cfg(feature = "fetch")]
    pub use stockplot_fetch::{ClientConfig, ProviderClient, ReplaySource, SeriesSource};

    #[cfg(feature = "render")]
    pub use stockplot_render::{ChartRenderer, JsonRenderer, SvgRenderer, render_to_dir};

    #[cfg(feature = "symbols")]
    pub use stockplot_symbols::SymbolRegistry;
}
