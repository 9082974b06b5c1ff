//! Rendering sink abstraction.

use std::io::Write;
use stockplot_types::ChartPayload;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Standalone SVG image.
    #[default]
    Svg,
    /// Chart payload as JSON.
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// The symbol cannot be used in a file name.
    #[error("Symbol '{0}' cannot be used in a chart file name")]
    InvalidSymbol(String),

    /// Nothing to draw.
    #[error("Chart for {0} has no data points")]
    EmptyChart(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for chart rendering sinks.
pub trait ChartRenderer: Send + Sync {
    /// Writes the chart to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart is empty or writing fails.
    fn render<W: Write + Send>(&self, chart: &ChartPayload, writer: W) -> Result<(), RenderError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("SVG".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "png".parse::<OutputFormat>(),
            Err(RenderError::UnknownFormat(_))
        ));
        assert_eq!(OutputFormat::default().to_string(), "svg");
    }
}
