//! Core types and utilities for the screener.

pub mod error;
pub mod timeseries;
pub mod types;

pub use error::{Result, ScreenerError};
pub use timeseries::TimeSeries;
pub use types::*;
