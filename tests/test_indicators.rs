//! Integration tests for the indicator engine.

use stockscreen::indicators::momentum::{macd, macd_histogram, macd_signal, rsi};
use stockscreen::indicators::trend::{ema, sma};
use stockscreen::ScreenerError;

fn sample_close() -> Vec<f64> {
    // 120 bars of trending data with oscillation
    let n = 120;
    let mut close: Vec<f64> = vec![100.0];
    for i in 1..n {
        let change = ((i as f64 * 0.2).sin() * 2.0) + 0.3;
        close.push(close[i - 1] + change);
    }
    close
}

/// Deterministic pseudo-random walk (linear congruential generator).
fn random_walk(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    let mut price = 50.0;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let step = ((state >> 33) as f64 / (1u64 << 31) as f64) - 0.5;
            price = (price + step).max(1.0);
            price
        })
        .collect()
}

#[test]
fn test_sma_increasing_scenario() {
    let data: Vec<f64> = (10..40).map(|x| x as f64).collect();
    let result = sma(&data, 5).unwrap();

    assert_eq!(result.len(), 26);
    assert!((result[0] - 12.0).abs() < 1e-9);
    assert!((result[25] - 37.0).abs() < 1e-9);
}

#[test]
fn test_sma_length_and_window_means() {
    let data = sample_close();
    for window in [1, 2, 5, 14, 50, data.len()] {
        let result = sma(&data, window).unwrap();
        assert_eq!(result.len(), data.len() - window + 1);

        for (i, &value) in result.iter().enumerate() {
            let mean = data[i..i + window].iter().sum::<f64>() / window as f64;
            assert!(
                (value - mean).abs() < 1e-9,
                "SMA({}) at index {} is {}, expected {}",
                window,
                i,
                value,
                mean
            );
        }
    }
}

#[test]
fn test_ema_length_and_flat_fill() {
    let data = sample_close();
    for window in [1, 3, 9, 12, 26, 100] {
        let result = ema(&data, window).unwrap();
        assert_eq!(result.len(), data.len());
        for i in 0..window {
            assert_eq!(
                result[i], result[window],
                "EMA({}) head not flat at index {}",
                window, i
            );
        }
    }
}

#[test]
fn test_ema_tracks_data_range() {
    let data = sample_close();
    let result = ema(&data, 12).unwrap();
    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Past the head the kernel is fully applied, so each value is a convex
    // combination of inputs.
    for &value in &result[11..] {
        assert!(value >= min - 1e-9 && value <= max + 1e-9);
    }
}

#[test]
fn test_rsi_range() {
    for seed in [1, 7, 42, 1234] {
        let close = random_walk(300, seed);
        let result = rsi(&close, 14).unwrap();
        assert_eq!(result.len(), close.len());

        for (i, &value) in result.iter().enumerate() {
            assert!(
                (0.0..=100.0).contains(&value),
                "RSI at index {} is out of range: {}",
                i,
                value
            );
        }
    }
}

#[test]
fn test_rsi_seed_region_is_flat() {
    let close = sample_close();
    let result = rsi(&close, 14).unwrap();
    for i in 1..14 {
        assert_eq!(result[i], result[0]);
    }
}

#[test]
fn test_rsi_constant_series_does_not_panic() {
    let close = vec![100.0; 30];
    let result = rsi(&close, 14).unwrap();
    assert_eq!(result.len(), 30);
    // 0/0 propagates as NaN rather than being clamped.
    assert!(result.iter().all(|v| v.is_nan()));
}

#[test]
fn test_rsi_saturates_at_100() {
    let close: Vec<f64> = (0..40).map(|x| 10.0 + x as f64 * 0.5).collect();
    let result = rsi(&close, 14).unwrap();
    assert!(result.iter().all(|&v| v == 100.0));
}

#[test]
fn test_macd_structure() {
    let close = sample_close();
    let result = macd(&close, 26, 12).unwrap();

    assert_eq!(result.macd_line.len(), close.len());
    assert_eq!(result.ema_slow, ema(&close, 26).unwrap());
    assert_eq!(result.ema_fast, ema(&close, 12).unwrap());
    for i in 0..close.len() {
        assert_eq!(result.macd_line[i], result.ema_fast[i] - result.ema_slow[i]);
    }
}

#[test]
fn test_macd_signal_histogram() {
    let close = sample_close();
    let result = macd(&close, 26, 12).unwrap();
    let signal = macd_signal(&result.macd_line, 9).unwrap();
    let histogram = macd_histogram(&result.macd_line, &signal).unwrap();

    assert_eq!(signal.len(), close.len());
    for i in 0..9 {
        assert_eq!(signal[i], signal[9]);
    }
    for i in 0..close.len() {
        assert_eq!(histogram[i], result.macd_line[i] - signal[i]);
    }
}

#[test]
fn test_invalid_windows_and_periods() {
    let data = vec![1.0, 2.0, 3.0];

    assert!(matches!(sma(&data, 0), Err(ScreenerError::InvalidWindow { .. })));
    assert!(matches!(sma(&data, 4), Err(ScreenerError::InvalidWindow { .. })));
    assert!(matches!(ema(&data, 0), Err(ScreenerError::InvalidWindow { .. })));
    assert!(matches!(rsi(&data, 0), Err(ScreenerError::InvalidPeriod { .. })));
    assert!(matches!(rsi(&data, 3), Err(ScreenerError::InvalidPeriod { .. })));
    assert!(matches!(macd(&data, 26, 12), Err(ScreenerError::InvalidPeriod { .. })));
}

#[test]
fn test_empty_data() {
    let empty: Vec<f64> = vec![];

    assert!(sma(&empty, 1).is_err());
    assert!(ema(&empty, 1).is_err());
    assert!(rsi(&empty, 14).is_err());
}
