// Suppress warning from PyO3 macro expansion (fixed in newer PyO3 versions)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

//! stockscreen - technical-indicator engine and stock screener.
//!
//! This crate provides:
//! - Series primitives (simple and exponentially weighted moving averages)
//! - Momentum indicators (RSI with Wilder smoothing, MACD and its signal line)
//! - A threshold predicate over latest close, latest RSI and average volume
//! - Alignment of price and indicator series for chart rendering
//! - Ingestion of ticker lists, parameter files and daily quote text
//! - A parallel screening loop that skips failing tickers

pub mod core;
pub mod indicators;
pub mod ingest;
pub mod logging;
#[cfg(feature = "python")]
pub mod python;
pub mod screening;

pub use crate::core::{Result, ScreenerError};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn _stockscreen(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<python::bindings::PyScreenCriteria>()?;

    m.add_function(wrap_pyfunction!(python::bindings::sma, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::ema, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::rsi, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::macd, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::macd_signal, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::include, m)?)?;

    Ok(())
}
