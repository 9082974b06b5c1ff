//! Provider access for stockplot.
//!
//! This crate obtains raw JSON payloads:
//!
//! - [`url::series_query`] / [`url::search_query`] - Query parameter construction
//! - [`ProviderClient`] - HTTP client with retries and exponential backoff
//! - [`ReplaySource`] - Serves a saved payload from disk
//! - [`SeriesSource`] - Common interface of both

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod source;
pub mod url;

pub use client::{ClientConfig, DEMO_API_KEY, FetchError, OutputSize, ProviderClient, decode_payload};
pub use source::{ReplaySource, SeriesSource};
