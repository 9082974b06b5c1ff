//! Interactive command implementation.
//!
//! Prompts for a time series, symbol, date window and chart type, renders the
//! chart, then offers to start over.

use anyhow::Result;
use inquire::{Confirm, Select, Text, validator::Validation};
use std::path::{Path, PathBuf};
use stockplot_lib::{
    ChartKind, ChartRequest, DateWindow, Granularity, IntradayInterval, OutputFormat,
    SeriesSource, SymbolRegistry,
};

use crate::{
    ProviderArgs,
    commands::{
        chart::{OutputOptions, listed_remotely, run_request},
        load_registry, open_source,
    },
};

/// Run the prompt loop until the user declines another dataset.
pub(crate) async fn interactive(
    provider: &ProviderArgs,
    symbols: Option<&Path>,
    remote_symbols: bool,
    from_file: Option<&Path>,
    output_dir: PathBuf,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let source = open_source(provider, from_file)?;
    let registry = if remote_symbols {
        None
    } else {
        Some(load_registry(symbols).await?)
    };
    let output = OutputOptions {
        dir: output_dir,
        format,
        isolate: false,
        show_data: true,
    };

    loop {
        let granularity = prompt_granularity()?;
        let symbol = prompt_symbol(source.as_ref(), registry.as_ref(), quiet).await?;
        let window = prompt_window()?;
        let kind = Select::new("Chart type:", ChartKind::all().to_vec()).prompt()?;

        let request = ChartRequest::new(&symbol, granularity, window, kind.as_str())?;
        match run_request(source.as_ref(), &request, &output, quiet).await {
            Ok(Some(path)) => println!("Chart written to: {}", path.display()),
            Ok(None) => {}
            Err(e) => eprintln!("Error: {e:#}"),
        }

        if !Confirm::new("Fetch another dataset?")
            .with_default(true)
            .prompt()?
        {
            return Ok(());
        }
    }
}

fn prompt_granularity() -> Result<Granularity> {
    let series = Select::new("Time series:", Granularity::all().to_vec()).prompt()?;
    if series.is_intraday() {
        let interval = Select::new("Interval:", IntradayInterval::all().to_vec())
            .with_starting_cursor(1)
            .prompt()?;
        return Ok(Granularity::Intraday(interval));
    }
    Ok(series)
}

async fn prompt_symbol(
    source: &dyn SeriesSource,
    registry: Option<&SymbolRegistry>,
    quiet: bool,
) -> Result<String> {
    if let Some(registry) = registry {
        let known = registry.clone();
        let symbol = Text::new("Stock symbol (e.g., AAPL, TSLA, MSFT):")
            .with_validator(move |input: &str| {
                Ok(if known.contains(input) {
                    Validation::Valid
                } else {
                    Validation::Invalid("Unknown stock symbol. Please enter a valid symbol.".into())
                })
            })
            .prompt()?;
        return Ok(symbol.trim().to_uppercase());
    }

    loop {
        let symbol = Text::new("Stock symbol (e.g., AAPL, TSLA, MSFT):")
            .prompt()?
            .trim()
            .to_uppercase();
        if listed_remotely(source, &symbol, quiet).await? {
            return Ok(symbol);
        }
        eprintln!("Stock symbol is invalid. Please enter a valid symbol.");
    }
}

fn prompt_window() -> Result<DateWindow> {
    loop {
        let start = Text::new("Start date (YYYY-MM-DD):").prompt()?;
        let end = Text::new("End date (YYYY-MM-DD):").prompt()?;
        match DateWindow::parse(&start, &end) {
            Ok(window) => return Ok(window),
            Err(e) => eprintln!("Error: {e}. Please enter valid dates."),
        }
    }
}
