//! Ticker symbol registry for stockplot.
//!
//! Symbols come from the `Symbol` column of a CSV file. A list of large US
//! equities is embedded at compile time and used when no file is given.
//!
//! # Example
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), stockplot_symbols::SymbolError> {
//! use stockplot_symbols::SymbolRegistry;
//!
//! let registry = SymbolRegistry::bundled().await?;
//! assert!(registry.contains("aapl"));
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use std::path::Path;

use csv_async::{AsyncReaderBuilder, Trim};
use futures::StreamExt;
use serde::Deserialize;
use thiserror::Error;
use tokio::io::AsyncRead;
use tracing::debug;

/// The symbol list embedded at compile time.
const BUNDLED_CSV: &str = include_str!("../data/symbols.csv");

/// Name of the column holding ticker symbols.
pub const SYMBOL_COLUMN: &str = "Symbol";

/// Errors that can occur while loading a symbol list.
#[derive(Error, Debug)]
pub enum SymbolError {
    /// File could not be opened.
    #[error("Failed to open symbol file '{path}': {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// CSV could not be parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    /// Header row lacks the symbol column.
    #[error("Symbol file has no '{SYMBOL_COLUMN}' column")]
    MissingColumn,
}

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(rename = "Symbol")]
    symbol: String,
}

/// Sorted, de-duplicated set of known ticker symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolRegistry {
    symbols: Vec<String>,
}

impl SymbolRegistry {
    /// Builds a registry from raw symbols.
    ///
    /// Each symbol is trimmed and uppercased; blanks are dropped.
    #[must_use]
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols: Vec<String> = symbols
            .into_iter()
            .map(|s| s.as_ref().trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        symbols.sort();
        symbols.dedup();
        Self { symbols }
    }

    /// Loads the bundled symbol list.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded CSV is malformed.
    pub async fn bundled() -> Result<Self, SymbolError> {
        Self::from_reader(BUNDLED_CSV.as_bytes()).await
    }

    /// Loads a symbol list from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid CSV, or
    /// has no `Symbol` column.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SymbolError> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| SymbolError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let registry = Self::from_reader(file).await?;
        debug!(path = %path.display(), symbols = registry.len(), "loaded symbol file");
        Ok(registry)
    }

    /// Reads a symbol list from any CSV source with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not valid CSV or has no `Symbol`
    /// column.
    pub async fn from_reader<R>(reader: R) -> Result<Self, SymbolError>
    where
        R: AsyncRead + Unpin + Send,
    {
        let mut deserializer = AsyncReaderBuilder::new()
            .trim(Trim::All)
            .create_deserializer(reader);

        if !deserializer
            .headers()
            .await?
            .iter()
            .any(|header| header == SYMBOL_COLUMN)
        {
            return Err(SymbolError::MissingColumn);
        }

        let mut symbols = Vec::new();
        let mut rows = deserializer.deserialize::<Row>();
        while let Some(row) = rows.next().await {
            symbols.push(row?.symbol);
        }
        Ok(Self::from_symbols(symbols))
    }

    /// Returns true if `symbol` is known (case-insensitive, surrounding
    /// whitespace ignored).
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        let symbol = symbol.trim().to_uppercase();
        self.symbols.binary_search(&symbol).is_ok()
    }

    /// Returns the known symbols containing `pattern` (case-insensitive).
    pub fn search(&self, pattern: &str) -> Vec<&str> {
        let pattern = pattern.trim().to_uppercase();
        self.symbols
            .iter()
            .filter(|s| s.contains(&pattern))
            .map(String::as_str)
            .collect()
    }

    /// Returns all symbols sorted alphabetically.
    #[must_use]
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Returns the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
