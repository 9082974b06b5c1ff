//! HTTP client for the provider's query endpoint.

use std::{fmt, str::FromStr, time::Duration};

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::url::{BASE_URL, QueryParams};

/// API key used when none is configured. Only serves the provider's
/// showcase symbols.
pub const DEMO_API_KEY: &str = "demo";

/// How much history the provider returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// The latest 100 points.
    Compact,
    /// The full available history.
    #[default]
    Full,
}

impl OutputSize {
    /// Returns the query parameter value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputSize {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "full" => Ok(Self::Full),
            _ => Err(FetchError::InvalidOutputSize(s.to_string())),
        }
    }
}

/// Configuration for the provider client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Provider API key.
    pub api_key: String,
    /// Query endpoint.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
    /// History length requested for time series.
    pub output_size: OutputSize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
            base_delay_ms: 500,
            max_delay_ms: 8_000,
            user_agent: format!("stockplot/{}", env!("CARGO_PKG_VERSION")),
            output_size: OutputSize::Full,
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("base_delay_ms", &self.base_delay_ms)
            .field("max_delay_ms", &self.max_delay_ms)
            .field("user_agent", &self.user_agent)
            .field("output_size", &self.output_size)
            .finish()
    }
}

impl ClientConfig {
    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Sets the query endpoint.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum number of retries.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Sets the requested history length.
    #[must_use]
    pub const fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = output_size;
        self
    }

    /// Returns true if the demo key is in use.
    #[must_use]
    pub fn is_demo_key(&self) -> bool {
        self.api_key == DEMO_API_KEY
    }
}

/// Errors that can occur while obtaining a payload.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server kept failing after all retries.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },

    /// Server rejected the request.
    #[error("Request rejected with status {status}")]
    Rejected {
        /// HTTP status code.
        status: u16,
    },

    /// Body was not valid JSON.
    #[error("Response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Replay file could not be read.
    #[error("Failed to read payload file '{path}': {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Unknown output size.
    #[error("Invalid output size '{0}', expected compact or full")]
    InvalidOutputSize(String),
}

/// Decodes a response body into a payload tree.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not JSON.
pub fn decode_payload(body: &Bytes) -> Result<Value, FetchError> {
    Ok(serde_json::from_slice(body)?)
}

/// HTTP client with connection pooling and retry logic.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    config: ClientConfig,
}

impl ProviderClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends one query and decodes the JSON body.
    ///
    /// Provider notices arrive with status 200 and are left for the caller
    /// to classify.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retries, the server
    /// rejects it, or the body is not JSON.
    pub async fn get_json(&self, params: &QueryParams) -> Result<Value, FetchError> {
        let function = params
            .iter()
            .find(|(key, _)| *key == "function")
            .map_or("", |(_, value)| value.as_str());
        let mut attempts = 0;

        loop {
            let request = self
                .client
                .get(&self.config.base_url)
                .query(params)
                .query(&[("apikey", self.config.api_key.as_str())]);

            match request.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
                        if attempts < self.config.max_retries {
                            attempts += 1;
                            let delay = self.calculate_backoff_delay(attempts);
                            warn!(function, %status, attempts, ?delay, "retrying provider request");
                            tokio::time::sleep(delay).await;
                            continue;
                        }
                        return Err(FetchError::ServerError {
                            status: status.as_u16(),
                        });
                    }
                    if !status.is_success() {
                        return Err(FetchError::Rejected {
                            status: status.as_u16(),
                        });
                    }

                    let body = response.bytes().await?;
                    debug!(function, bytes = body.len(), "received provider response");
                    return decode_payload(&body);
                }
                Err(e) if Self::is_retryable_error(&e) && attempts < self.config.max_retries => {
                    attempts += 1;
                    let delay = self.calculate_backoff_delay(attempts);
                    warn!(function, error = %e, attempts, ?delay, "retrying provider request");
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Calculates the backoff delay with exponential backoff and jitter.
    fn calculate_backoff_delay(&self, attempt: u32) -> Duration {
        let exp_delay = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10));
        let capped_delay = exp_delay.min(self.config.max_delay_ms);

        // Deterministic jitter within ±25%.
        let jitter_range = capped_delay / 4;
        let jitter = if jitter_range > 0 {
            let offset = (u64::from(attempt) * 17) % (jitter_range * 2);
            offset as i64 - jitter_range as i64
        } else {
            0
        };

        let final_delay = (capped_delay as i64 + jitter).max(100) as u64;
        Duration::from_millis(final_delay)
    }

    /// Determines if an error is retryable.
    fn is_retryable_error(error: &reqwest::Error) -> bool {
        if error.is_builder() {
            return false;
        }
        error.is_timeout() || error.is_connect() || error.is_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.api_key, "demo");
        assert_eq!(config.base_url, "https://www.alphavantage.co/query");
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.output_size, OutputSize::Full);
        assert!(config.is_demo_key());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = ClientConfig::default().with_api_key("SECRET123");
        let debug = format!("{config:?}");
        assert!(!debug.contains("SECRET123"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_output_size_parse() {
        assert_eq!("compact".parse::<OutputSize>().unwrap(), OutputSize::Compact);
        assert_eq!(" FULL ".parse::<OutputSize>().unwrap(), OutputSize::Full);
        assert!(matches!(
            "huge".parse::<OutputSize>(),
            Err(FetchError::InvalidOutputSize(_))
        ));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = ProviderClient::new(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_backoff_delay_calculation() {
        let client = ProviderClient::new(ClientConfig::default()).unwrap();

        // base_delay * 2 = 1000ms, ±25%
        let delay1 = client.calculate_backoff_delay(1);
        assert!(delay1.as_millis() >= 750 && delay1.as_millis() <= 1250);

        // base_delay * 4 = 2000ms, ±25%
        let delay2 = client.calculate_backoff_delay(2);
        assert!(delay2.as_millis() >= 1500 && delay2.as_millis() <= 2500);

        let delay_high = client.calculate_backoff_delay(20);
        assert!(delay_high.as_millis() <= 10_000);
    }

    #[test]
    fn test_decode_payload() {
        let body = Bytes::from_static(br#"{"Note": "slow down"}"#);
        let value = decode_payload(&body).unwrap();
        assert_eq!(value["Note"], "slow down");

        let err = decode_payload(&Bytes::from_static(b"<html>")).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
