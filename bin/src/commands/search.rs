//! Search command implementation.
//!
//! This module queries the provider's symbol search and prints the matches.

use anyhow::{Context, Result};
use std::path::Path;
use stockplot_lib::parse_symbol_matches;

use crate::{
    ProviderArgs,
    commands::open_source,
    display::{print_matches, spinner},
};

/// Search the provider for symbols matching `keywords`.
pub(crate) async fn search(
    keywords: &str,
    provider: &ProviderArgs,
    from_file: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let source = open_source(provider, from_file)?;

    let progress = spinner(quiet, format!("Searching for '{keywords}'"));
    let payload = source.search_symbols(keywords).await;
    progress.finish_and_clear();

    let matches = parse_symbol_matches(&payload.context("Symbol search failed")?)?;
    if matches.is_empty() {
        println!("No matches for '{keywords}'.");
        return Ok(());
    }

    print_matches(&matches);
    println!("\nTotal: {} matches", matches.len());
    Ok(())
}
