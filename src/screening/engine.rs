//! Screening loop over a ticker universe.

use std::fmt;

use rayon::prelude::*;

use crate::core::error::ScreenerError;
use crate::core::types::ScreenConfig;
use crate::core::{Result, TimeSeries};
use crate::ingest::quotes::parse_quotes;
use crate::ingest::source::QuoteSource;
use crate::screening::alignment::ChartFrame;
use crate::screening::predicate::{evaluate, Snapshot};

/// A ticker needs strictly more parsed observations than this to be screened.
pub const MIN_OBSERVATIONS: usize = 200;

/// Pipeline step at which a ticker failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Parse,
    Evaluate,
    Chart,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetch => "fetch",
            Stage::Parse => "parse",
            Stage::Evaluate => "evaluate",
            Stage::Chart => "chart",
        };
        f.write_str(name)
    }
}

/// What happened to one ticker.
#[derive(Debug)]
pub enum TickerOutcome {
    /// Passed every bound; the aligned chart frame is attached.
    Included { snapshot: Snapshot, frame: ChartFrame },
    /// Evaluated but rejected by at least one bound.
    Excluded(Snapshot),
    /// Too few observations to be considered.
    TooShort { observations: usize },
    /// Skipped because a step returned an error.
    Failed { stage: Stage, error: ScreenerError },
}

impl TickerOutcome {
    #[inline]
    pub fn is_included(&self) -> bool {
        matches!(self, TickerOutcome::Included { .. })
    }
}

/// Outcome for a named ticker.
#[derive(Debug)]
pub struct TickerResult {
    pub ticker: String,
    pub outcome: TickerOutcome,
}

/// Tally of outcomes in a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenCounts {
    pub included: usize,
    pub excluded: usize,
    pub too_short: usize,
    pub failed: usize,
}

/// Results of a screening run, in the order the tickers were given.
#[derive(Debug, Default)]
pub struct ScreenReport {
    pub results: Vec<TickerResult>,
}

impl ScreenReport {
    /// Chart frames of all included tickers.
    pub fn included(&self) -> impl Iterator<Item = &ChartFrame> {
        self.results.iter().filter_map(|result| match &result.outcome {
            TickerOutcome::Included { frame, .. } => Some(frame),
            _ => None,
        })
    }

    pub fn counts(&self) -> ScreenCounts {
        let mut counts = ScreenCounts::default();
        for result in &self.results {
            match result.outcome {
                TickerOutcome::Included { .. } => counts.included += 1,
                TickerOutcome::Excluded(_) => counts.excluded += 1,
                TickerOutcome::TooShort { .. } => counts.too_short += 1,
                TickerOutcome::Failed { .. } => counts.failed += 1,
            }
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Screening engine.
///
/// Holds only immutable configuration; every ticker is processed
/// independently, so a failure on one never affects the others.
#[derive(Debug, Clone)]
pub struct ScreenEngine {
    /// Criteria and chart windows.
    pub config: ScreenConfig,
    /// Observation count a ticker must exceed.
    pub min_observations: usize,
}

impl ScreenEngine {
    /// Create a new engine with the given configuration.
    pub fn new(config: ScreenConfig) -> Self {
        Self {
            config,
            min_observations: MIN_OBSERVATIONS,
        }
    }

    /// Set the minimum observation count.
    pub fn with_min_observations(mut self, min_observations: usize) -> Self {
        self.min_observations = min_observations;
        self
    }

    /// Screen an already-parsed series.
    pub fn screen_series(&self, ticker: &str, series: &TimeSeries) -> TickerOutcome {
        if series.len() <= self.min_observations {
            tracing::debug!(ticker, observations = series.len(), "not enough history");
            return TickerOutcome::TooShort {
                observations: series.len(),
            };
        }

        let snapshot = match evaluate(series, &self.config.criteria) {
            Ok(snapshot) => snapshot,
            Err(error) => return failed(ticker, Stage::Evaluate, error),
        };
        if !snapshot.included {
            tracing::debug!(
                ticker,
                close = snapshot.latest_close,
                rsi = snapshot.latest_rsi,
                avg_volume = snapshot.avg_volume,
                "excluded"
            );
            return TickerOutcome::Excluded(snapshot);
        }

        match ChartFrame::build(ticker, series, self.config.windows) {
            Ok(frame) => {
                tracing::info!(
                    ticker,
                    close = snapshot.latest_close,
                    rsi = snapshot.latest_rsi,
                    avg_volume = snapshot.avg_volume,
                    "included"
                );
                TickerOutcome::Included { snapshot, frame }
            }
            Err(error) => failed(ticker, Stage::Chart, error),
        }
    }

    /// Fetch, parse and screen one ticker.
    pub fn screen_ticker<S>(&self, ticker: &str, source: &S) -> TickerOutcome
    where
        S: QuoteSource + ?Sized,
    {
        let _span = tracing::debug_span!("screen_ticker", ticker).entered();

        let text = match source.quotes(ticker) {
            Ok(text) => text,
            Err(error) => return failed(ticker, Stage::Fetch, error),
        };
        let series = match parse_quotes(&text) {
            Ok(series) => series,
            Err(error) => return failed(ticker, Stage::Parse, error),
        };
        self.screen_series(ticker, &series)
    }

    /// Screen every ticker, in parallel, keeping input order in the report.
    pub fn screen<S>(&self, tickers: &[String], source: &S) -> ScreenReport
    where
        S: QuoteSource + ?Sized,
    {
        let results: Vec<TickerResult> = tickers
            .par_iter()
            .map(|ticker| TickerResult {
                ticker: ticker.clone(),
                outcome: self.screen_ticker(ticker, source),
            })
            .collect();

        let report = ScreenReport { results };
        let counts = report.counts();
        tracing::info!(
            tickers = report.len(),
            included = counts.included,
            excluded = counts.excluded,
            too_short = counts.too_short,
            failed = counts.failed,
            "screening finished"
        );
        report
    }

    /// Screen one ticker and return its chart frame, or the error that
    /// prevented it from being included.
    pub fn chart_for<S>(&self, ticker: &str, source: &S) -> Result<Option<ChartFrame>>
    where
        S: QuoteSource + ?Sized,
    {
        let series = parse_quotes(&source.quotes(ticker)?)?;
        if series.len() <= self.min_observations {
            return Ok(None);
        }
        if !evaluate(&series, &self.config.criteria)?.included {
            return Ok(None);
        }
        ChartFrame::build(ticker, &series, self.config.windows).map(Some)
    }
}

fn failed(ticker: &str, stage: Stage, error: ScreenerError) -> TickerOutcome {
    tracing::warn!(ticker, %stage, %error, "skipping ticker");
    TickerOutcome::Failed { stage, error }
}
