//! JSON output format.

use std::io::Write;
use stockplot_types::ChartPayload;

use crate::{ChartRenderer, RenderError};

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    /// Whether to pretty-print.
    pretty: bool,
}

impl JsonRenderer {
    /// Creates a new compact JSON renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl ChartRenderer for JsonRenderer {
    fn render<W: Write + Send>(
        &self,
        chart: &ChartPayload,
        mut writer: W,
    ) -> Result<(), RenderError> {
        if chart.is_empty() {
            return Err(RenderError::EmptyChart(chart.symbol.clone()));
        }
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, chart)?;
        } else {
            serde_json::to_writer(&mut writer, chart)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "json"
    }
}
