//! stockplot CLI - Chart historical stock prices from the command line.

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::{path::PathBuf, time::Duration};
use stockplot_lib::{ClientConfig, DEMO_API_KEY, OutputSize, url::BASE_URL};

mod commands;
mod display;
mod logging;

use commands::chart::ChartArgs;

#[derive(Parser)]
#[command(name = "stockplot")]
#[command(about = "Chart historical stock prices", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(flatten)]
    provider: ProviderArgs,
}

/// Provider connection settings shared by every command.
#[derive(Args, Debug, Clone)]
pub(crate) struct ProviderArgs {
    /// Provider API key
    #[arg(
        long,
        env = "ALPHAVANTAGE_API_KEY",
        default_value = DEMO_API_KEY,
        hide_env_values = true,
        global = true
    )]
    api_key: String,

    /// Provider query endpoint
    #[arg(long, default_value = BASE_URL, global = true)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout: u64,

    /// Maximum retries for failed requests
    #[arg(long, default_value_t = 3, global = true)]
    retries: u32,

    /// History length requested for time series (compact, full)
    #[arg(long, default_value = "full", global = true)]
    output_size: OutputSize,
}

impl ProviderArgs {
    /// Builds the client configuration from the flags.
    pub(crate) fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_api_key(self.api_key.clone())
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_max_retries(self.retries)
            .with_output_size(self.output_size)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a price series and render a chart
    Chart(ChartArgs),

    /// Build charts through guided prompts
    Interactive {
        /// CSV file with a `Symbol` column (defaults to the bundled list)
        #[arg(long)]
        symbols: Option<PathBuf>,

        /// Validate symbols with the provider's symbol search instead of the list
        #[arg(long, conflicts_with = "from_file")]
        verify_remote: bool,

        /// Replay a saved provider payload instead of calling the provider
        #[arg(long)]
        from_file: Option<PathBuf>,

        /// Directory for chart files
        #[arg(short, long, default_value = commands::DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// Chart file format (svg, json)
        #[arg(short, long, default_value = "svg")]
        format: stockplot_lib::OutputFormat,
    },

    /// List known ticker symbols
    Symbols {
        /// Only show symbols containing this pattern
        #[arg(short, long)]
        search: Option<String>,

        /// CSV file with a `Symbol` column (defaults to the bundled list)
        #[arg(long)]
        symbols: Option<PathBuf>,
    },

    /// Search the provider for ticker symbols
    Search {
        /// Company name or partial symbol
        keywords: String,

        /// Replay a saved provider payload instead of calling the provider
        #[arg(long)]
        from_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Chart(args) => commands::chart::chart(args, &cli.provider, cli.quiet).await,
        Commands::Interactive {
            symbols,
            verify_remote,
            from_file,
            output_dir,
            format,
        } => {
            commands::interactive::interactive(
                &cli.provider,
                symbols.as_deref(),
                verify_remote,
                from_file.as_deref(),
                output_dir,
                format,
                cli.quiet,
            )
            .await
        }
        Commands::Symbols { search, symbols } => {
            commands::symbols::list_symbols(search.as_deref(), symbols.as_deref()).await
        }
        Commands::Search {
            keywords,
            from_file,
        } => {
            commands::search::search(&keywords, &cli.provider, from_file.as_deref(), cli.quiet)
                .await
        }
    }
}
