//! Rendering sinks for stockplot charts.
//!
//! This crate writes an assembled [`ChartPayload`](stockplot_types::ChartPayload)
//! to an output format:
//!
//! - [`SvgRenderer`] - Standalone SVG line or grouped-bar chart
//! - [`JsonRenderer`] - Chart payload as JSON
//! - [`render_to_dir`] - Writes a chart artifact into a directory

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod artifact;
mod json;
mod renderer;
mod svg;

pub use artifact::{artifact_name, render_to_dir};
pub use json::JsonRenderer;
pub use renderer::{ChartRenderer, OutputFormat, RenderError};
pub use svg::{SERIES_COLORS, SvgRenderer, escape_xml};
