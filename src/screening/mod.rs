//! Screening: threshold predicate, series alignment and the ticker loop.

pub mod alignment;
pub mod engine;
pub mod predicate;

pub use alignment::{starting_point, trim_to, ChartFrame};
pub use engine::{
    ScreenCounts, ScreenEngine, ScreenReport, Stage, TickerOutcome, TickerResult,
    MIN_OBSERVATIONS,
};
pub use predicate::{evaluate, include, Snapshot};
