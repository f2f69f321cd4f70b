//! Trimming of price and indicator series to a common displayable window.
//!
//! Moving averages shorten the usable history, so every series handed to a
//! chart renderer is cut to the trailing observations for which the longest
//! moving average is defined.

use serde::{Deserialize, Serialize};

use crate::core::error::ScreenerError;
use crate::core::types::{ChartWindows, Price, TradeDate};
use crate::core::{Result, TimeSeries};
use crate::indicators::momentum::{
    macd, macd_histogram, macd_signal, rsi, DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL,
    DEFAULT_MACD_SLOW, DEFAULT_RSI_PERIOD,
};
use crate::indicators::trend::sma;

/// Number of trailing observations for which both moving averages are valid.
///
/// Equals `len - (max(short, long) - 1)`.
pub fn starting_point(len: usize, windows: &ChartWindows) -> Result<usize> {
    for window in [windows.short, windows.long] {
        if window == 0 {
            return Err(ScreenerError::invalid_window(window, len));
        }
    }

    let limiting = windows.limiting();
    if limiting > len {
        return Err(ScreenerError::insufficient_history(limiting, len));
    }
    Ok(len - (limiting - 1))
}

/// The last `count` elements of `values`.
pub fn trim_to<T: Clone>(values: &[T], count: usize) -> Result<Vec<T>> {
    if count > values.len() {
        return Err(ScreenerError::insufficient_history(count, values.len()));
    }
    Ok(values[values.len() - count..].to_vec())
}

/// Aligned series for one ticker, ready for a candlestick + SMA + volume +
/// RSI + MACD chart. Every vector has the same length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartFrame {
    pub ticker: String,
    pub windows: ChartWindows,
    pub dates: Vec<TradeDate>,
    pub open: Vec<Price>,
    pub high: Vec<Price>,
    pub low: Vec<Price>,
    pub close: Vec<Price>,
    pub volume: Vec<f64>,
    pub sma_short: Vec<f64>,
    pub sma_long: Vec<f64>,
    pub rsi: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub ema_fast: Vec<f64>,
    pub macd_line: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
    /// Upper limit for the volume axis: twice the peak volume of the full series.
    pub volume_ceiling: f64,
}

impl ChartFrame {
    /// Compute every indicator over the full series, then trim all of them
    /// to the final [`starting_point`] observations.
    pub fn build(
        ticker: impl Into<String>,
        series: &TimeSeries,
        windows: ChartWindows,
    ) -> Result<Self> {
        let count = starting_point(series.len(), &windows)?;
        let close = series.close();

        let sma_short = sma(close, windows.short)?;
        let sma_long = sma(close, windows.long)?;
        let rsi_values = rsi(close, DEFAULT_RSI_PERIOD)?;
        let macd_values = macd(close, DEFAULT_MACD_SLOW, DEFAULT_MACD_FAST)?;
        let signal = macd_signal(&macd_values.macd_line, DEFAULT_MACD_SIGNAL)?;
        let histogram = macd_histogram(&macd_values.macd_line, &signal)?;

        let frame = Self {
            ticker: ticker.into(),
            windows,
            dates: trim_to(series.dates(), count)?,
            open: trim_to(series.open(), count)?,
            high: trim_to(series.high(), count)?,
            low: trim_to(series.low(), count)?,
            close: trim_to(close, count)?,
            volume: trim_to(series.volume(), count)?,
            sma_short: trim_to(&sma_short, count)?,
            sma_long: trim_to(&sma_long, count)?,
            rsi: trim_to(&rsi_values, count)?,
            ema_slow: trim_to(&macd_values.ema_slow, count)?,
            ema_fast: trim_to(&macd_values.ema_fast, count)?,
            macd_line: trim_to(&macd_values.macd_line, count)?,
            signal: trim_to(&signal, count)?,
            histogram: trim_to(&histogram, count)?,
            volume_ceiling: 2.0 * series.max_volume(),
        };

        tracing::debug!(
            ticker = %frame.ticker,
            observations = series.len(),
            displayed = count,
            "chart frame aligned"
        );
        Ok(frame)
    }

    /// Number of displayed observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_point() {
        let windows = ChartWindows::new(10, 30);
        assert_eq!(starting_point(100, &windows).unwrap(), 71);
        assert_eq!(starting_point(30, &windows).unwrap(), 1);
    }

    #[test]
    fn test_starting_point_uses_larger_window() {
        assert_eq!(
            starting_point(100, &ChartWindows::new(30, 10)).unwrap(),
            starting_point(100, &ChartWindows::new(10, 30)).unwrap()
        );
    }

    #[test]
    fn test_starting_point_insufficient() {
        let result = starting_point(29, &ChartWindows::new(10, 30));
        assert!(matches!(
            result,
            Err(ScreenerError::InsufficientHistory { required: 30, available: 29 })
        ));
        assert!(matches!(
            starting_point(29, &ChartWindows::new(0, 5)),
            Err(ScreenerError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_trim_to() {
        let values = vec![1, 2, 3, 4, 5];
        assert_eq!(trim_to(&values, 2).unwrap(), vec![4, 5]);
        assert_eq!(trim_to(&values, 5).unwrap(), values);
        assert!(trim_to(&values, 6).is_err());
    }
}
