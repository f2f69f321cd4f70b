//! Error types for the screener.

use thiserror::Error;

/// Result type alias for screener operations.
pub type Result<T> = std::result::Result<T, ScreenerError>;

/// Error types for indicator calculation, screening and ingestion.
#[derive(Error, Debug)]
pub enum ScreenerError {
    /// Moving-average window outside `1..=len`.
    #[error("Invalid window {window} for series of length {length}")]
    InvalidWindow { window: usize, length: usize },

    /// RSI/MACD period outside the usable range.
    #[error("Invalid period {period} for series of length {length}")]
    InvalidPeriod { period: usize, length: usize },

    /// Not enough observations left once every indicator is valid.
    #[error("Insufficient history: need at least {required} observations, got {available}")]
    InsufficientHistory { required: usize, available: usize },

    /// Division by zero that cannot be expressed as an IEEE result.
    #[error("Degenerate division in {context}")]
    DegenerateDivision { context: String },

    /// Data length mismatch between arrays.
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Empty data error.
    #[error("Empty data provided for {context}")]
    EmptyData { context: String },

    /// Dates are not strictly increasing.
    #[error("Dates must be strictly increasing: {previous} is followed by {next}")]
    UnorderedDates { previous: String, next: String },

    /// A single observation holds an unusable value.
    #[error("Invalid observation at index {index}: {message}")]
    InvalidObservation { index: usize, message: String },

    /// Malformed quote row.
    #[error("Quote parse error on line {line}: {message}")]
    QuoteParse { line: usize, message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// No quote data is available for a ticker.
    #[error("No quote data for ticker {ticker}")]
    TickerNotFound { ticker: String },

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScreenerError {
    /// Create an invalid window error.
    pub fn invalid_window(window: usize, length: usize) -> Self {
        Self::InvalidWindow { window, length }
    }

    /// Create an invalid period error.
    pub fn invalid_period(period: usize, length: usize) -> Self {
        Self::InvalidPeriod { period, length }
    }

    /// Create an insufficient history error.
    pub fn insufficient_history(required: usize, available: usize) -> Self {
        Self::InsufficientHistory {
            required,
            available,
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an empty data error.
    pub fn empty_data(context: impl Into<String>) -> Self {
        Self::EmptyData {
            context: context.into(),
        }
    }

    /// Create an invalid observation error.
    pub fn invalid_observation(index: usize, message: impl Into<String>) -> Self {
        Self::InvalidObservation {
            index,
            message: message.into(),
        }
    }

    /// Create a quote parse error.
    pub fn quote_parse(line: usize, message: impl Into<String>) -> Self {
        Self::QuoteParse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(feature = "python")]
impl From<ScreenerError> for pyo3::PyErr {
    fn from(err: ScreenerError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
