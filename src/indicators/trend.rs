//! Trend indicators: SMA and the exponentially weighted moving average.
//!
//! Both are expressed as convolutions of the input with a fixed weight
//! kernel. `sma` keeps only fully-overlapping positions; `ema` keeps the
//! leading part of the full convolution and flat-fills the zero-padded head.

use crate::core::error::ScreenerError;
use crate::core::Result;

/// Simple Moving Average.
///
/// # Arguments
/// * `data` - Price data
/// * `window` - Number of samples averaged per output value
///
/// # Returns
/// Vector of length `data.len() - window + 1`; value `i` is the mean of
/// `data[i..i + window]`. No padding is emitted.
pub fn sma(data: &[f64], window: usize) -> Result<Vec<f64>> {
    let n = data.len();
    if window == 0 || window > n {
        return Err(ScreenerError::invalid_window(window, n));
    }

    let weight = 1.0 / window as f64;
    let result = data
        .windows(window)
        .map(|slice| slice.iter().fold(0.0, |acc, &x| acc + x * weight))
        .collect();

    Ok(result)
}

/// Kernel for [`ema`]: `exp(linspace(-1, 0, window))` normalised to sum to 1.
///
/// The kernel is ascending, so once convolved the oldest sample of the
/// lookback receives the largest weight.
pub fn exponential_weights(window: usize) -> Vec<f64> {
    if window == 0 {
        return Vec::new();
    }

    let raw: Vec<f64> = if window == 1 {
        vec![(-1.0f64).exp()]
    } else {
        let step = 1.0 / (window - 1) as f64;
        (0..window)
            .map(|i| {
                let x = if i == window - 1 { 0.0 } else { -1.0 + i as f64 * step };
                x.exp()
            })
            .collect()
    };

    let total: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / total).collect()
}

/// Exponential Moving Average.
///
/// # Arguments
/// * `data` - Price data
/// * `window` - Lookback length of the exponential kernel
///
/// # Returns
/// Vector of the same length as `data`. Value `k` is
/// `sum(weights[m] * data[k - m])` over the available lookback; the first
/// `window` values are then overwritten with the value at index `window`,
/// replacing the zero-padding artefact at the head of the convolution.
pub fn ema(data: &[f64], window: usize) -> Result<Vec<f64>> {
    let n = data.len();
    // The flat fill reads index `window`, so it must exist.
    if window == 0 || window >= n {
        return Err(ScreenerError::invalid_window(window, n));
    }

    let weights = exponential_weights(window);
    let mut result = Vec::with_capacity(n);
    for k in 0..n {
        let reach = k.min(window - 1);
        let value = (0..=reach).fold(0.0, |acc, m| acc + weights[m] * data[k - m]);
        result.push(value);
    }

    let anchor = result[window];
    result[..window].fill(anchor);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3).unwrap();
        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-10);
        assert!((result[1] - 3.0).abs() < 1e-10);
        assert!((result[2] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_sma_full_window() {
        let data = vec![2.0, 4.0, 6.0];
        let result = sma(&data, 3).unwrap();
        assert_eq!(result.len(), 1);
        assert!((result[0] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_sma_invalid_window() {
        let data = vec![1.0, 2.0, 3.0];
        assert!(matches!(
            sma(&data, 0),
            Err(ScreenerError::InvalidWindow { window: 0, length: 3 })
        ));
        assert!(sma(&data, 4).is_err());
    }

    #[test]
    fn test_exponential_weights() {
        let weights = exponential_weights(5);
        assert_eq!(weights.len(), 5);
        assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(weights.windows(2).all(|w| w[0] < w[1]));
        // Ratio between last and first raw weight is e.
        assert!((weights[4] / weights[0] - std::f64::consts::E).abs() < 1e-12);

        assert_eq!(exponential_weights(1), vec![1.0]);
        assert!(exponential_weights(0).is_empty());
    }

    #[test]
    fn test_ema_flat_fill() {
        let data: Vec<f64> = (1..=20).map(|x| x as f64).collect();
        let result = ema(&data, 5).unwrap();
        assert_eq!(result.len(), data.len());
        for value in &result[..5] {
            assert_eq!(*value, result[5]);
        }
    }

    #[test]
    fn test_ema_matches_kernel_sum() {
        let data = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let weights = exponential_weights(3);
        let result = ema(&data, 3).unwrap();
        let expected_4 = weights[0] * data[4] + weights[1] * data[3] + weights[2] * data[2];
        assert!((result[4] - expected_4).abs() < 1e-12);
        let expected_3 = weights[0] * data[3] + weights[1] * data[2] + weights[2] * data[1];
        assert!((result[3] - expected_3).abs() < 1e-12);
        // Indices below the window were flat-filled from index 3.
        assert_eq!(result[0], result[3]);
    }

    #[test]
    fn test_ema_constant_series() {
        let data = vec![42.0; 30];
        let result = ema(&data, 12).unwrap();
        assert!(result.iter().all(|v| (v - 42.0).abs() < 1e-9));
    }

    #[test]
    fn test_ema_window_one_is_identity() {
        let data = vec![5.0, 7.0, 9.0];
        let result = ema(&data, 1).unwrap();
        assert_eq!(result, vec![7.0, 7.0, 9.0]);
    }

    #[test]
    fn test_ema_invalid_window() {
        let data = vec![1.0, 2.0, 3.0];
        assert!(ema(&data, 0).is_err());
        assert!(ema(&data, 3).is_err());
        assert!(ema(&data, 10).is_err());
    }
}
