//! Technical indicators for the screener.
//!
//! All indicators are implemented as pure functions that take slice inputs
//! and return Vec outputs. They hold no state between calls and can be
//! evaluated concurrently for independent series.

pub mod momentum;
pub mod trend;

pub use momentum::{
    macd, macd_histogram, macd_signal, rsi, MacdResult, DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL,
    DEFAULT_MACD_SLOW, DEFAULT_RSI_PERIOD,
};
pub use trend::{ema, exponential_weights, sma};
