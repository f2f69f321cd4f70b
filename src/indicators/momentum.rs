//! Momentum indicators: RSI and MACD.

use super::trend::ema;
use crate::core::error::ScreenerError;
use crate::core::Result;

/// Default RSI lookback.
pub const DEFAULT_RSI_PERIOD: usize = 14;
/// Default slow EMA window for MACD.
pub const DEFAULT_MACD_SLOW: usize = 26;
/// Default fast EMA window for MACD.
pub const DEFAULT_MACD_FAST: usize = 12;
/// Default signal-line window for MACD.
pub const DEFAULT_MACD_SIGNAL: usize = 9;

#[inline]
fn strength_index(up: f64, down: f64) -> f64 {
    // Plain IEEE division: down == 0 saturates at 100, 0/0 yields NaN.
    100.0 - 100.0 / (1.0 + up / down)
}

/// Relative Strength Index (RSI) with Wilder smoothing.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `period` - Lookback period (default: 14)
///
/// # Returns
/// Vector of the same length as `data`. The first `period` values all hold
/// the seed RSI; later values follow the recursive smoothing. Values are not
/// clamped: a window without losses gives exactly 100, a window without any
/// movement gives NaN.
pub fn rsi(data: &[f64], period: usize) -> Result<Vec<f64>> {
    let n = data.len();
    if period == 0 || period >= n {
        return Err(ScreenerError::invalid_period(period, n));
    }

    let deltas: Vec<f64> = data.windows(2).map(|w| w[1] - w[0]).collect();
    let p = period as f64;

    // Seed spans period + 1 deltas but is averaged over period.
    let seed = &deltas[..(period + 1).min(deltas.len())];
    let gains = seed
        .iter()
        .filter(|&&d| d >= 0.0)
        .fold(0.0, |acc, &d| acc + d);
    let losses = seed
        .iter()
        .filter(|&&d| d < 0.0)
        .fold(0.0, |acc, &d| acc + d);
    let mut up = gains / p;
    let mut down = -losses / p;

    let mut result = vec![0.0; n];
    result[..period].fill(strength_index(up, down));

    for i in period..n {
        let delta = deltas[i - 1];
        let (upval, downval) = if delta > 0.0 { (delta, 0.0) } else { (0.0, -delta) };

        up = (up * (p - 1.0) + upval) / p;
        down = (down * (p - 1.0) + downval) / p;
        result[i] = strength_index(up, down);
    }

    Ok(result)
}

/// MACD result structure.
#[derive(Debug, Clone)]
pub struct MacdResult {
    /// Slow exponential moving average.
    pub ema_slow: Vec<f64>,
    /// Fast exponential moving average.
    pub ema_fast: Vec<f64>,
    /// MACD line (fast EMA - slow EMA).
    pub macd_line: Vec<f64>,
}

fn check_period(period: usize, length: usize) -> Result<()> {
    if period == 0 || period >= length {
        return Err(ScreenerError::invalid_period(period, length));
    }
    Ok(())
}

/// Moving Average Convergence Divergence (MACD).
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `slow_period` - Slow EMA window (default: 26)
/// * `fast_period` - Fast EMA window (default: 12)
///
/// # Returns
/// MacdResult with both EMAs and the MACD line, all as long as `data`.
pub fn macd(data: &[f64], slow_period: usize, fast_period: usize) -> Result<MacdResult> {
    check_period(slow_period, data.len())?;
    check_period(fast_period, data.len())?;

    let ema_slow = ema(data, slow_period)?;
    let ema_fast = ema(data, fast_period)?;
    let macd_line = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(fast, slow)| fast - slow)
        .collect();

    Ok(MacdResult {
        ema_slow,
        ema_fast,
        macd_line,
    })
}

/// MACD signal line: the exponential moving average of the MACD line.
pub fn macd_signal(macd_line: &[f64], period: usize) -> Result<Vec<f64>> {
    check_period(period, macd_line.len())?;
    ema(macd_line, period)
}

/// MACD histogram: MACD line minus signal line.
pub fn macd_histogram(macd_line: &[f64], signal: &[f64]) -> Result<Vec<f64>> {
    if macd_line.len() != signal.len() {
        return Err(ScreenerError::length_mismatch(macd_line.len(), signal.len()));
    }
    Ok(macd_line.iter().zip(signal).map(|(m, s)| m - s).collect())
}
