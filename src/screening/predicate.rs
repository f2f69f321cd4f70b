//! Threshold predicate deciding whether a ticker is included.

use serde::{Deserialize, Serialize};

use crate::core::types::{Price, ScreenCriteria};
use crate::core::{Result, TimeSeries};
use crate::indicators::momentum::{rsi, DEFAULT_RSI_PERIOD};

/// The values a screening decision is based on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Last close of the series.
    pub latest_close: Price,
    /// Last value of RSI(14) over the full series.
    pub latest_rsi: f64,
    /// Mean volume over the full, untrimmed series.
    pub avg_volume: f64,
    /// Whether every bound was satisfied.
    pub included: bool,
}

impl Snapshot {
    /// Apply the criteria to already-computed latest values.
    pub fn decide(
        latest_close: Price,
        latest_rsi: f64,
        avg_volume: f64,
        criteria: &ScreenCriteria,
    ) -> Self {
        let included = criteria.price_in_range(latest_close)
            && criteria.rsi_in_range(latest_rsi)
            && criteria.volume_sufficient(avg_volume);

        Self {
            latest_close,
            latest_rsi,
            avg_volume,
            included,
        }
    }
}

/// Compute the latest close, latest RSI and average volume of a series and
/// test them against `criteria`.
///
/// Errors from the RSI calculation propagate, so a series of 14 or fewer
/// observations yields `InvalidPeriod`.
pub fn evaluate(series: &TimeSeries, criteria: &ScreenCriteria) -> Result<Snapshot> {
    let rsi_values = rsi(series.close(), DEFAULT_RSI_PERIOD)?;
    let latest_rsi = rsi_values[rsi_values.len() - 1];

    Ok(Snapshot::decide(
        series.last_close(),
        latest_rsi,
        series.average_volume(),
        criteria,
    ))
}

/// Include/exclude decision for one series.
pub fn include(series: &TimeSeries, criteria: &ScreenCriteria) -> Result<bool> {
    evaluate(series, criteria).map(|snapshot| snapshot.included)
}
