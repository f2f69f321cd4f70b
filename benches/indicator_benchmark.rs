//! Benchmark for indicator calculation and screening throughput.

use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stockscreen::core::types::{ChartWindows, ScreenConfig, ScreenCriteria};
use stockscreen::core::TimeSeries;
use stockscreen::indicators::momentum::{macd, rsi};
use stockscreen::indicators::trend::{ema, sma};
use stockscreen::screening::ScreenEngine;

/// Generate a sample daily series.
fn generate_sample_data(n: usize) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let mut open = vec![100.0; n];
    let mut high = vec![101.0; n];
    let mut low = vec![99.0; n];
    let mut close = vec![100.0; n];

    // Create a trending pattern
    for i in 1..n {
        let change = (i as f64 * 0.1).sin() * 2.0;
        close[i] = close[i - 1] + change;
        open[i] = close[i - 1];
        high[i] = close[i].max(open[i]) + 1.0;
        low[i] = close[i].min(open[i]) - 1.0;
    }

    TimeSeries::new(
        (0..n as u64).map(|i| start + Days::new(i)).collect(),
        open,
        high,
        low,
        close,
        vec![1000.0; n],
    )
    .unwrap()
}

fn bench_sma(c: &mut Criterion) {
    let mut group = c.benchmark_group("sma");

    for size in [500, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::new("data_size", size), size, |b, &size| {
            let series = generate_sample_data(size);

            b.iter(|| {
                let result = sma(black_box(series.close()), black_box(50));
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_ema(c: &mut Criterion) {
    let mut group = c.benchmark_group("ema");

    for size in [500, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::new("data_size", size), size, |b, &size| {
            let series = generate_sample_data(size);

            b.iter(|| {
                let result = ema(black_box(series.close()), black_box(26));
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_rsi_macd(c: &mut Criterion) {
    let mut group = c.benchmark_group("rsi_macd");

    for size in [500, 1000, 5000].iter() {
        group.bench_with_input(BenchmarkId::new("data_size", size), size, |b, &size| {
            let series = generate_sample_data(size);

            b.iter(|| {
                let r = rsi(black_box(series.close()), 14);
                let m = macd(black_box(series.close()), 26, 12);
                black_box((r, m))
            });
        });
    }

    group.finish();
}

fn bench_screen_series(c: &mut Criterion) {
    let config = ScreenConfig {
        criteria: ScreenCriteria::new(0.0, f64::INFINITY, 0.0, 100.0, 0.0),
        windows: ChartWindows::new(20, 50),
    };
    let engine = ScreenEngine::new(config);
    let series = generate_sample_data(504);

    c.bench_function("screen_series_two_years", |b| {
        b.iter(|| black_box(engine.screen_series("BENCH", black_box(&series))))
    });
}

criterion_group!(benches, bench_sma, bench_ema, bench_rsi_macd, bench_screen_series);
criterion_main!(benches);
