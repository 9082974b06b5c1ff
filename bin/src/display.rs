//! Display utilities and output for the stockplot CLI.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use stockplot_lib::{
    ChartPayload, JsonRenderer, OutputFormat, SvgRenderer, SymbolMatch, TimestampedRecord,
    render_to_dir,
};

/// Formats one windowed record as a preview row.
pub(crate) fn row_line(record: &TimestampedRecord) -> String {
    let ohlc = &record.ohlc;
    format!(
        "{} | Open: {:.4} | High: {:.4} | Low: {:.4} | Close: {:.4}",
        record.timestamp, ohlc.open, ohlc.high, ohlc.low, ohlc.close
    )
}

/// Prints the windowed series, one row per record.
pub(crate) fn print_rows(series: &[TimestampedRecord]) {
    for record in series {
        println!("{}", row_line(record));
    }
}

/// Prints symbol search results as a table.
pub(crate) fn print_matches(matches: &[SymbolMatch]) {
    println!(
        "{:<12} {:<40} {:<20} {:<8} {:>6}",
        "SYMBOL", "NAME", "REGION", "CURRENCY", "SCORE"
    );
    println!("{}", "-".repeat(90));

    for m in matches {
        let score = m
            .match_score
            .map_or_else(|| "-".to_string(), |s| format!("{s:.2}"));
        println!(
            "{:<12} {:<40} {:<20} {:<8} {:>6}",
            m.symbol, m.name, m.region, m.currency, score
        );
    }
}

/// Writes a chart in the requested format and returns the file path.
pub(crate) fn write_chart(
    chart: &ChartPayload,
    dir: &Path,
    format: OutputFormat,
    isolate: bool,
) -> Result<PathBuf> {
    let path = match format {
        OutputFormat::Svg => render_to_dir(&SvgRenderer::new(), chart, dir, isolate),
        OutputFormat::Json => {
            render_to_dir(&JsonRenderer::new().with_pretty(true), chart, dir, isolate)
        }
    }
    .with_context(|| format!("Failed to write chart to {}", dir.display()))?;
    Ok(path)
}

/// Creates a spinner for a network wait, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
