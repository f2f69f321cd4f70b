//! Loader for the ticker list.

use std::path::Path;

use crate::core::Result;

/// Split ticker-list text into symbols, one per line, preserving order.
pub fn parse_tickers(text: &str) -> Vec<String> {
    text.split(|c: char| c == '\r' || c == '\n')
        .map(str::trim)
        .filter(|ticker| !ticker.is_empty())
        .map(String::from)
        .collect()
}

/// Read and parse a ticker-list file.
pub fn load_tickers(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let tickers = parse_tickers(&std::fs::read_to_string(path)?);
    tracing::info!(path = %path.display(), count = tickers.len(), "loaded ticker list");
    Ok(tickers)
}
