//! Ingestion collaborators: ticker list, parameter file and quote text.

pub mod params;
pub mod quotes;
pub mod source;
pub mod tickers;

pub use params::{load_parameters, parse_parameters};
pub use quotes::{count_data_rows, parse_quotes, QUOTE_FIELDS};
pub use source::{DirectorySource, MemorySource, QuoteSource};
pub use tickers::{load_tickers, parse_tickers};
