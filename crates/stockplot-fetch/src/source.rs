//! Payload sources.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use stockplot_types::Granularity;
use tracing::{debug, info};

use crate::{
    FetchError, ProviderClient, decode_payload,
    url::{search_query, series_query},
};

/// Something that can produce raw provider payloads.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    /// Returns the raw time series payload for `symbol`.
    async fn fetch_series(
        &self,
        symbol: &str,
        granularity: Granularity,
    ) -> Result<Value, FetchError>;

    /// Returns the raw symbol search payload for `keywords`.
    async fn search_symbols(&self, keywords: &str) -> Result<Value, FetchError>;

    /// Returns a short name for logs.
    fn name(&self) -> &'static str;
}

#[async_trait]
impl SeriesSource for ProviderClient {
    async fn fetch_series(
        &self,
        symbol: &str,
        granularity: Granularity,
    ) -> Result<Value, FetchError> {
        info!(symbol, %granularity, "fetching time series");
        self.get_json(&series_query(symbol, granularity, self.config().output_size))
            .await
    }

    async fn search_symbols(&self, keywords: &str) -> Result<Value, FetchError> {
        info!(keywords, "searching symbols");
        self.get_json(&search_query(keywords)).await
    }

    fn name(&self) -> &'static str {
        "provider"
    }
}

/// Serves a saved payload from disk for every request.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    path: PathBuf,
}

impl ReplaySource {
    /// Creates a replay source for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> Result<Value, FetchError> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = data.len(), "replaying payload");
        decode_payload(&Bytes::from(data))
    }
}

#[async_trait]
impl SeriesSource for ReplaySource {
    async fn fetch_series(
        &self,
        symbol: &str,
        granularity: Granularity,
    ) -> Result<Value, FetchError> {
        debug!(symbol, %granularity, "ignoring request parameters for replay");
        self.load().await
    }

    async fn search_symbols(&self, keywords: &str) -> Result<Value, FetchError> {
        debug!(keywords, "ignoring request parameters for replay");
        self.load().await
    }

    fn name(&self) -> &'static str {
        "replay"
    }
}
