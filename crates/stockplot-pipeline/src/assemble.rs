//! Chart assembly from a windowed series.

use stockplot_types::{ChartKind, ChartPayload, DateWindow, TimestampedRecord};

use crate::plan_labels;

/// Builds the chart title from the requested window, not from the dates
/// actually present in the series.
#[must_use]
pub fn chart_title(symbol: &str, window: &DateWindow) -> String {
    format!("{symbol} Stock Data ({} → {})", window.start, window.end)
}

/// Turns a sorted, windowed series into a [`ChartPayload`].
#[derive(Debug, Clone)]
pub struct ChartAssembler {
    symbol: String,
    kind: ChartKind,
    window: DateWindow,
}

impl ChartAssembler {
    /// Creates an assembler for a parsed chart kind.
    #[must_use]
    pub fn new(symbol: impl Into<String>, kind: ChartKind, window: DateWindow) -> Self {
        Self {
            symbol: symbol.into(),
            kind,
            window,
        }
    }

    /// Maps the series into four parallel price vectors, labels and title.
    ///
    /// Output order matches input order.
    #[must_use]
    pub fn assemble(&self, series: &[TimestampedRecord]) -> ChartPayload {
        let n = series.len();
        let mut open = Vec::with_capacity(n);
        let mut high = Vec::with_capacity(n);
        let mut low = Vec::with_capacity(n);
        let mut close = Vec::with_capacity(n);
        let mut labels = Vec::with_capacity(n);

        for record in series {
            open.push(record.ohlc.open);
            high.push(record.ohlc.high);
            low.push(record.ohlc.low);
            close.push(record.ohlc.close);
            labels.push(record.label());
        }

        ChartPayload {
            symbol: self.symbol.clone(),
            kind: self.kind,
            title: chart_title(&self.symbol, &self.window),
            open,
            high,
            low,
            close,
            labels: plan_labels(labels),
        }
    }
}
