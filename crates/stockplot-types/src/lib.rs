//! Core types for the stockplot charting pipeline.
//!
//! This crate provides the fundamental data structures used throughout stockplot:
//!
//! - [`Granularity`] - Requested sampling frequency and its payload key
//! - [`DateWindow`] - Inclusive date window for filtering
//! - [`OhlcRecord`] / [`TimestampedRecord`] - Prices for one period
//! - [`DetectedTimestamp`] - Tagged result of timestamp format detection
//! - [`ChartKind`] / [`ChartPayload`] / [`LabelPlan`] - Input to rendering sinks
//! - [`ChartError`] - Failure taxonomy of the pipeline

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod chart;
mod error;
mod granularity;
mod record;
mod window;

pub use chart::{ChartKind, ChartKindParseError, ChartPayload, LabelPlan, SERIES_NAMES};
pub use error::{ChartError, DateWindowError, ErrorKind, RecordDefect, Result};
pub use granularity::{Granularity, GranularityParseError, IntradayInterval};
pub use record::{
    DATE_ONLY_FORMAT, DATE_ONLY_LEN, DATE_TIME_FORMAT, DetectedTimestamp, OhlcRecord,
    TimestampedRecord,
};
pub use window::{DATE_FORMAT, DateWindow};
