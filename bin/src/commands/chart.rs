//! Chart command implementation.
//!
//! This module fetches a price series, applies the date window and writes
//! the rendered chart.

use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::PathBuf;
use stockplot_lib::{
    ChartOutcome, ChartRequest, DateWindow, Granularity, IntradayInterval, OutputFormat,
    SeriesSource, build_chart, is_listed, parse_symbol_matches,
};

use crate::{
    ProviderArgs,
    commands::{DEFAULT_OUTPUT_DIR, load_registry, open_source},
    display::{print_rows, spinner, write_chart},
};

/// Arguments of the `chart` command.
#[derive(Args, Debug)]
pub(crate) struct ChartArgs {
    /// Ticker symbol (e.g., AAPL, TSLA, MSFT)
    symbol: String,

    /// Start date (YYYY-MM-DD), inclusive
    #[arg(short, long)]
    start: String,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(short, long)]
    end: String,

    /// Time series (intraday, daily, weekly, monthly or TIME_SERIES_* name)
    #[arg(short = 't', long, default_value = "daily")]
    series: Granularity,

    /// Intraday interval (1min, 5min, 15min, 30min, 60min)
    #[arg(short, long, default_value = "5min")]
    interval: IntradayInterval,

    /// Chart type (line, bar)
    #[arg(short, long, default_value = "line")]
    kind: String,

    /// Chart file format (svg, json)
    #[arg(short, long, default_value = "svg")]
    format: OutputFormat,

    /// Directory for chart files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Add a unique component to the file name
    #[arg(long)]
    isolate: bool,

    /// Print the windowed rows before rendering
    #[arg(long)]
    show_data: bool,

    /// CSV file with a `Symbol` column (defaults to the bundled list)
    #[arg(long)]
    symbols: Option<PathBuf>,

    /// Skip the known-symbol check
    #[arg(long, conflicts_with = "verify_remote")]
    any_symbol: bool,

    /// Validate the symbol with the provider's symbol search instead of the list
    #[arg(long, conflicts_with = "from_file")]
    verify_remote: bool,

    /// Replay a saved provider payload instead of calling the provider
    #[arg(long)]
    from_file: Option<PathBuf>,
}

/// How a finished chart is written.
#[derive(Debug, Clone)]
pub(crate) struct OutputOptions {
    pub(crate) dir: PathBuf,
    pub(crate) format: OutputFormat,
    pub(crate) isolate: bool,
    pub(crate) show_data: bool,
}

/// Applies the interval flag to an intraday request.
pub(crate) const fn with_interval(series: Granularity, interval: IntradayInterval) -> Granularity {
    match series {
        Granularity::Intraday(_) => Granularity::Intraday(interval),
        other => other,
    }
}

/// Fetch, window and render a single chart.
pub(crate) async fn chart(args: ChartArgs, provider: &ProviderArgs, quiet: bool) -> Result<()> {
    let window = DateWindow::parse(&args.start, &args.end)?;
    let request = ChartRequest::new(
        &args.symbol,
        with_interval(args.series, args.interval),
        window,
        &args.kind,
    )?;

    let source = open_source(provider, args.from_file.as_deref())?;

    if args.verify_remote {
        if !listed_remotely(source.as_ref(), &request.symbol, quiet).await? {
            bail!("Stock symbol {} is not listed by the provider", request.symbol);
        }
    } else if !args.any_symbol && args.from_file.is_none() {
        let registry = load_registry(args.symbols.as_deref()).await?;
        if !registry.contains(&request.symbol) {
            bail!(
                "Invalid stock symbol: {}. Use `stockplot symbols --search` to list known \
                 symbols or pass --any-symbol",
                request.symbol
            );
        }
    }

    let output = OutputOptions {
        dir: args.output_dir,
        format: args.format,
        isolate: args.isolate,
        show_data: args.show_data,
    };
    if let Some(path) = run_request(source.as_ref(), &request, &output, quiet).await? {
        if !quiet {
            println!("Chart written to: {}", path.display());
        }
    }
    Ok(())
}

/// Returns true if the provider's symbol search lists `symbol`.
///
/// Provider notices and transport failures are errors.
pub(crate) async fn listed_remotely(
    source: &dyn SeriesSource,
    symbol: &str,
    quiet: bool,
) -> Result<bool> {
    let progress = spinner(quiet, format!("Looking up {symbol}"));
    let payload = source.search_symbols(symbol).await;
    progress.finish_and_clear();

    let matches = parse_symbol_matches(&payload.context("Symbol search failed")?)?;
    Ok(is_listed(&matches, symbol))
}

/// Runs one request end to end.
///
/// Returns the chart path, or `None` when the window held no data.
pub(crate) async fn run_request(
    source: &dyn SeriesSource,
    request: &ChartRequest,
    output: &OutputOptions,
    quiet: bool,
) -> Result<Option<PathBuf>> {
    let progress = spinner(
        quiet,
        format!("Fetching {} {} from {}", request.symbol, request.granularity, source.name()),
    );
    let payload = source
        .fetch_series(&request.symbol, request.granularity)
        .await;
    progress.finish_and_clear();
    let payload = payload.with_context(|| format!("Failed to fetch {}", request.symbol))?;

    match build_chart(&payload, request)? {
        ChartOutcome::NoDataInRange => {
            println!(
                "No data available for {} between {} and {}.",
                request.symbol, request.window.start, request.window.end
            );
            Ok(None)
        }
        ChartOutcome::Chart(chart) => {
            if output.show_data {
                println!(
                    "Data for {} using {} from {} to {}",
                    request.symbol,
                    request.granularity.function(),
                    request.window.start,
                    request.window.end
                );
                print_rows(&chart.series);
            }
            let path = write_chart(&chart.payload, &output.dir, output.format, output.isolate)?;
            Ok(Some(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use stockplot_lib::ReplaySource;

    #[test]
    fn test_with_interval() {
        assert_eq!(
            with_interval(
                Granularity::Intraday(IntradayInterval::Minute5),
                IntradayInterval::Minute60
            ),
            Granularity::Intraday(IntradayInterval::Minute60)
        );
        assert_eq!(
            with_interval(Granularity::Weekly, IntradayInterval::Minute1),
            Granularity::Weekly
        );
    }

    fn replay(body: &str) -> (tempfile::NamedTempFile, ReplaySource) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{body}").unwrap();
        let source = ReplaySource::new(file.path());
        (file, source)
    }

    fn request(kind: &str) -> ChartRequest {
        ChartRequest::new(
            "IBM",
            Granularity::Daily,
            DateWindow::parse("2024-01-03", "2024-01-06").unwrap(),
            kind,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_run_request_writes_chart() {
        let (_file, source) = replay(
            r#"{"Time Series (Daily)": {
                "2024-01-02": {"1. open": "1", "2. high": "2", "3. low": "0.5", "4. close": "1.5"},
                "2024-01-05": {"1. open": "1", "2. high": "2", "3. low": "0.5", "4. close": "1.5"}
            }}"#,
        );
        let tmp = tempfile::tempdir().unwrap();
        let output = OutputOptions {
            dir: tmp.path().join("charts"),
            format: OutputFormat::Svg,
            isolate: false,
            show_data: true,
        };

        let path = run_request(&source, &request("bar"), &output, true)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(path, output.dir.join("IBM_bar_chart.svg"));
    }

    #[tokio::test]
    async fn test_run_request_no_data() {
        let (_file, source) = replay(
            r#"{"Time Series (Daily)": {
                "2023-01-02": {"1. open": "1", "2. high": "2", "3. low": "0.5", "4. close": "1.5"}
            }}"#,
        );
        let tmp = tempfile::tempdir().unwrap();
        let output = OutputOptions {
            dir: tmp.path().to_path_buf(),
            format: OutputFormat::Json,
            isolate: true,
            show_data: false,
        };
        let path = run_request(&source, &request("line"), &output, true)
            .await
            .unwrap();
        assert!(path.is_none());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_run_request_reports_notice() {
        let (_file, source) = replay(r#"{"Note": "Thank you for using our API"}"#);
        let tmp = tempfile::tempdir().unwrap();
        let output = OutputOptions {
            dir: tmp.path().to_path_buf(),
            format: OutputFormat::Svg,
            isolate: false,
            show_data: false,
        };
        let err = run_request(&source, &request("line"), &output, true)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("API limit reached"));
    }

    #[tokio::test]
    async fn test_listed_remotely() {
        let (_file, source) = replay(r#"{"bestMatches": [{"1. symbol": "IBM"}]}"#);
        assert!(listed_remotely(&source, "IBM", true).await.unwrap());
        assert!(!listed_remotely(&source, "IBMX", true).await.unwrap());

        let (_file, limited) = replay(r#"{"Information": "daily limit"}"#);
        assert!(listed_remotely(&limited, "IBM", true).await.is_err());
    }
}
