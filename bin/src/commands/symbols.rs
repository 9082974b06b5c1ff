//! Symbols command implementation.
//!
//! This module lists the ticker symbols the chart command accepts.

use anyhow::Result;
use std::path::Path;

use crate::commands::load_registry;

/// Number of symbols printed per row.
const COLUMNS: usize = 8;

/// List known symbols, optionally filtered by a pattern.
pub(crate) async fn list_symbols(search: Option<&str>, path: Option<&Path>) -> Result<()> {
    let registry = load_registry(path).await?;

    let symbols: Vec<&str> = match search {
        Some(pattern) => registry.search(pattern),
        None => registry.symbols().iter().map(String::as_str).collect(),
    };

    if symbols.is_empty() {
        println!("No symbols found.");
        return Ok(());
    }

    for row in symbols.chunks(COLUMNS) {
        let line: Vec<String> = row.iter().map(|s| format!("{s:<10}")).collect();
        println!("{}", line.join(" ").trim_end());
    }

    println!("\nTotal: {} symbols", symbols.len());
    Ok(())
}
