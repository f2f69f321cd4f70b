//! Daily OHLCV series with validated invariants.

use super::error::ScreenerError;
use super::types::{Bar, Price, TradeDate};
use super::Result;

/// An ordered sequence of trading-day observations stored as parallel arrays.
///
/// Invariants checked on construction: every field has the same length, the
/// series is non-empty, dates are strictly increasing, prices are finite and
/// volumes are finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    dates: Vec<TradeDate>,
    open: Vec<Price>,
    high: Vec<Price>,
    low: Vec<Price>,
    close: Vec<Price>,
    volume: Vec<f64>,
}

impl TimeSeries {
    /// Create a new series from parallel vectors.
    pub fn new(
        dates: Vec<TradeDate>,
        open: Vec<Price>,
        high: Vec<Price>,
        low: Vec<Price>,
        close: Vec<Price>,
        volume: Vec<f64>,
    ) -> Result<Self> {
        let n = dates.len();
        for field in [&open, &high, &low, &close, &volume] {
            if field.len() != n {
                return Err(ScreenerError::length_mismatch(n, field.len()));
            }
        }
        if n == 0 {
            return Err(ScreenerError::empty_data("time series"));
        }

        if let Some(pair) = dates.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(ScreenerError::UnorderedDates {
                previous: pair[0].to_string(),
                next: pair[1].to_string(),
            });
        }

        for i in 0..n {
            if !(open[i].is_finite()
                && high[i].is_finite()
                && low[i].is_finite()
                && close[i].is_finite())
            {
                return Err(ScreenerError::invalid_observation(i, "non-finite price"));
            }
            if !volume[i].is_finite() || volume[i] < 0.0 {
                return Err(ScreenerError::invalid_observation(
                    i,
                    format!("volume must be finite and >= 0, got {}", volume[i]),
                ));
            }
        }

        Ok(Self {
            dates,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Create a series from individual bars.
    pub fn from_bars(bars: &[Bar]) -> Result<Self> {
        Self::new(
            bars.iter().map(|b| b.date).collect(),
            bars.iter().map(|b| b.open).collect(),
            bars.iter().map(|b| b.high).collect(),
            bars.iter().map(|b| b.low).collect(),
            bars.iter().map(|b| b.close).collect(),
            bars.iter().map(|b| b.volume).collect(),
        )
    }

    /// Get the number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    pub fn dates(&self) -> &[TradeDate] {
        &self.dates
    }

    pub fn open(&self) -> &[Price] {
        &self.open
    }

    pub fn high(&self) -> &[Price] {
        &self.high
    }

    pub fn low(&self) -> &[Price] {
        &self.low
    }

    pub fn close(&self) -> &[Price] {
        &self.close
    }

    pub fn volume(&self) -> &[f64] {
        &self.volume
    }

    /// Get a single bar at index.
    pub fn bar(&self, index: usize) -> Option<Bar> {
        if index >= self.len() {
            return None;
        }
        Some(Bar {
            date: self.dates[index],
            open: self.open[index],
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
        })
    }

    /// Iterator over all bars in date order.
    pub fn bars(&self) -> impl Iterator<Item = Bar> + '_ {
        (0..self.len()).filter_map(move |i| self.bar(i))
    }

    /// The most recent close.
    #[inline]
    pub fn last_close(&self) -> Price {
        self.close[self.len() - 1]
    }

    /// The most recent date.
    #[inline]
    pub fn last_date(&self) -> TradeDate {
        self.dates[self.len() - 1]
    }

    /// Arithmetic mean of volume over the whole series.
    pub fn average_volume(&self) -> f64 {
        let total = self.volume.iter().fold(0.0, |acc, v| acc + v);
        total / self.len() as f64
    }

    /// Largest single-day volume.
    pub fn max_volume(&self) -> f64 {
        self.volume.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// The last `count` observations as a new series.
    pub fn tail(&self, count: usize) -> Result<Self> {
        let n = self.len();
        if count == 0 || count > n {
            return Err(ScreenerError::insufficient_history(count.max(1), n));
        }
        let start = n - count;
        Ok(Self {
            dates: self.dates[start..].to_vec(),
            open: self.open[start..].to_vec(),
            high: self.high[start..].to_vec(),
            low: self.low[start..].to_vec(),
            close: self.close[start..].to_vec(),
            volume: self.volume[start..].to_vec(),
        })
    }
}
