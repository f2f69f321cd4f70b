//! Where raw quote text for a ticker comes from.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::core::error::ScreenerError;
use crate::core::Result;

/// Supplier of raw provider quote text, one document per ticker.
///
/// Implementations must be shareable across threads: the screening engine
/// requests tickers concurrently.
pub trait QuoteSource: Send + Sync {
    /// Return the raw quote text for `ticker`.
    fn quotes(&self, ticker: &str) -> Result<String>;
}

/// Reads `<root>/<TICKER>.csv` from a local directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, ticker: &str) -> Result<PathBuf> {
        let separator = |c: char| c == '/' || c == '\\';
        if ticker.is_empty() || ticker.contains(separator) || ticker.contains("..") {
            return Err(ScreenerError::invalid_config(format!(
                "ticker '{ticker}' is not a valid file name"
            )));
        }
        Ok(self.root.join(format!("{ticker}.csv")))
    }
}

impl QuoteSource for DirectorySource {
    fn quotes(&self, ticker: &str) -> Result<String> {
        let path = self.path_for(ticker)?;
        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ScreenerError::TickerNotFound {
                ticker: ticker.to_string(),
            },
            _ => ScreenerError::Io(e),
        })
    }
}

/// In-memory quote text keyed by ticker.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the document for a ticker.
    pub fn with_quotes(mut self, ticker: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(ticker.into(), text.into());
        self
    }

    pub fn insert(&mut self, ticker: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(ticker.into(), text.into());
    }
}

impl QuoteSource for MemorySource {
    fn quotes(&self, ticker: &str) -> Result<String> {
        self.documents
            .get(ticker)
            .cloned()
            .ok_or_else(|| ScreenerError::TickerNotFound {
                ticker: ticker.to_string(),
            })
    }
}
