//! CLI command implementations.

pub(crate) mod chart;
pub(crate) mod interactive;
pub(crate) mod search;
pub(crate) mod symbols;

use anyhow::{Context, Result};
use std::path::Path;
use stockplot_lib::{ProviderClient, ReplaySource, SeriesSource, SymbolRegistry};
use tracing::warn;

use crate::ProviderArgs;

/// Directory chart files are written to by default.
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "static/charts";

/// Returns the payload source: a replay file if given, otherwise the provider.
pub(crate) fn open_source(
    provider: &ProviderArgs,
    from_file: Option<&Path>,
) -> Result<Box<dyn SeriesSource>> {
    if let Some(path) = from_file {
        return Ok(Box::new(ReplaySource::new(path)));
    }

    let config = provider.client_config();
    if config.is_demo_key() {
        warn!("using the demo API key; set ALPHAVANTAGE_API_KEY for other symbols");
    }
    let client = ProviderClient::new(config).context("Failed to create HTTP client")?;
    Ok(Box::new(client))
}

/// Loads the symbol registry from `path`, or the bundled list.
pub(crate) async fn load_registry(path: Option<&Path>) -> Result<SymbolRegistry> {
    match path {
        Some(path) => SymbolRegistry::load(path)
            .await
            .with_context(|| format!("Failed to load symbols from {}", path.display())),
        None => SymbolRegistry::bundled()
            .await
            .context("Failed to load bundled symbol list"),
    }
}
