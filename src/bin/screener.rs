//! # screener
//!
//! Screens a ticker list against the filter parameter file using daily quote
//! files from a local directory, and prints the tickers that pass together
//! with the size of their aligned chart window.

use std::path::PathBuf;

use clap::Parser;

use stockscreen::ingest::{load_parameters, load_tickers, DirectorySource};
use stockscreen::logging::{init_logging, LogFormat};
use stockscreen::screening::{ScreenEngine, TickerOutcome, MIN_OBSERVATIONS};

#[derive(Parser)]
#[command(name = "screener")]
#[command(about = "Screen stock tickers by price, RSI and average volume", long_about = None)]
struct Cli {
    /// Ticker list, one symbol per line
    #[arg(short, long, default_value = "TickerList.csv")]
    tickers: PathBuf,

    /// Filter parameter file (alternating label/value lines)
    #[arg(short, long, default_value = "FilterParameters.csv")]
    params: PathBuf,

    /// Directory holding one <TICKER>.csv quote file per ticker
    #[arg(short, long)]
    data_dir: PathBuf,

    /// A ticker needs more observations than this to be screened
    #[arg(long, default_value_t = MIN_OBSERVATIONS)]
    min_observations: usize,

    /// Log format (pretty, json)
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,
}

fn main() -> stockscreen::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let config = load_parameters(&cli.params)?;
    let tickers = load_tickers(&cli.tickers)?;
    let source = DirectorySource::new(&cli.data_dir);

    let engine = ScreenEngine::new(config).with_min_observations(cli.min_observations);
    let report = engine.screen(&tickers, &source);

    for result in &report.results {
        if let TickerOutcome::Included { snapshot, frame } = &result.outcome {
            let last_date = frame
                .dates
                .last()
                .map(|d| d.to_string())
                .unwrap_or_default();
            println!(
                "{:<8} close={:>10.2} rsi={:>6.2} avg_volume={:>14.0} chart_points={:>4} last={}",
                result.ticker,
                snapshot.latest_close,
                snapshot.latest_rsi,
                snapshot.avg_volume,
                frame.len(),
                last_date
            );
        }
    }

    let counts = report.counts();
    println!(
        "{} screened: {} included, {} excluded, {} too short, {} failed",
        report.len(),
        counts.included,
        counts.excluded,
        counts.too_short,
        counts.failed
    );

    Ok(())
}
