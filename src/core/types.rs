//! Core data types for the screener.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Type alias for price values.
pub type Price = f64;

/// Type alias for trading-day dates.
pub type TradeDate = NaiveDate;

/// One trading-day observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: TradeDate,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: f64,
}

/// Screening thresholds.
///
/// Price and RSI bounds are exclusive on both sides, the volume bound is an
/// exclusive lower bound. A contradictory range (min above max) is accepted
/// and simply rejects every ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenCriteria {
    pub min_price: f64,
    pub max_price: f64,
    pub min_rsi: f64,
    pub max_rsi: f64,
    pub min_avg_volume: f64,
}

impl ScreenCriteria {
    /// Create new criteria.
    pub fn new(
        min_price: f64,
        max_price: f64,
        min_rsi: f64,
        max_rsi: f64,
        min_avg_volume: f64,
    ) -> Self {
        Self {
            min_price,
            max_price,
            min_rsi,
            max_rsi,
            min_avg_volume,
        }
    }

    /// Check a latest close against the price bounds.
    #[inline]
    pub fn price_in_range(&self, close: Price) -> bool {
        self.min_price < close && close < self.max_price
    }

    /// Check a latest RSI value against the RSI bounds.
    #[inline]
    pub fn rsi_in_range(&self, rsi: f64) -> bool {
        self.min_rsi < rsi && rsi < self.max_rsi
    }

    /// Check an average volume against the volume floor.
    #[inline]
    pub fn volume_sufficient(&self, avg_volume: f64) -> bool {
        avg_volume > self.min_avg_volume
    }
}

/// The two simple-moving-average windows drawn on the chart (MA1, MA2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartWindows {
    pub short: usize,
    pub long: usize,
}

impl ChartWindows {
    /// Create new chart windows.
    pub fn new(short: usize, long: usize) -> Self {
        Self { short, long }
    }

    /// The window that limits how much history is displayable.
    #[inline]
    pub fn limiting(&self) -> usize {
        self.short.max(self.long)
    }
}

/// Full screening configuration as loaded from the parameter file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub criteria: ScreenCriteria,
    pub windows: ChartWindows,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_exclusive() {
        let criteria = ScreenCriteria::new(5.0, 500.0, 30.0, 70.0, 1000.0);
        assert!(!criteria.price_in_range(5.0));
        assert!(!criteria.price_in_range(500.0));
        assert!(criteria.price_in_range(250.0));
        assert!(!criteria.rsi_in_range(30.0));
        assert!(!criteria.rsi_in_range(70.0));
        assert!(!criteria.volume_sufficient(1000.0));
        assert!(criteria.volume_sufficient(1000.5));
    }

    #[test]
    fn test_nan_rsi_is_never_in_range() {
        let criteria = ScreenCriteria::new(0.0, 1e9, -1e9, 1e9, 0.0);
        assert!(!criteria.rsi_in_range(f64::NAN));
    }

    #[test]
    fn test_limiting_window() {
        assert_eq!(ChartWindows::new(10, 30).limiting(), 30);
        assert_eq!(ChartWindows::new(50, 20).limiting(), 50);
    }
}
