//! Loader for the filter parameter file.
//!
//! The file alternates label lines and value lines:
//!
//! ```text
//! Min Price
//! 5
//! Max Price
//! 500
//! ...
//! ```
//!
//! Values are read positionally in the order MinPrice, MaxPrice, MinRSI,
//! MaxRSI, MinVol, MA1, MA2; the labels themselves are not interpreted.
//! Lines may end in `\r`, `\n` or `\r\n`; blank lines are ignored.

use std::path::Path;

use crate::core::error::ScreenerError;
use crate::core::types::{ChartWindows, ScreenConfig, ScreenCriteria};
use crate::core::Result;

const PARAMETER_NAMES: [&str; 7] = [
    "MinPrice", "MaxPrice", "MinRSI", "MaxRSI", "MinVol", "MA1", "MA2",
];

struct ParameterValues<'a> {
    lines: Vec<&'a str>,
}

impl<'a> ParameterValues<'a> {
    fn new(text: &'a str) -> Self {
        let lines = text
            .split(|c: char| c == '\r' || c == '\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self { lines }
    }

    fn number(&self, slot: usize) -> Result<f64> {
        let name = PARAMETER_NAMES[slot];
        let raw = self.lines.get(2 * slot + 1).ok_or_else(|| {
            ScreenerError::invalid_config(format!("missing value for {name}"))
        })?;
        let value = raw.parse::<f64>().map_err(|e| {
            ScreenerError::invalid_config(format!("{name} value '{raw}' is not a number: {e}"))
        })?;
        if !value.is_finite() {
            return Err(ScreenerError::invalid_config(format!(
                "{name} must be finite, got {raw}"
            )));
        }
        Ok(value)
    }

    fn window(&self, slot: usize) -> Result<usize> {
        let value = self.number(slot)?;
        if value < 1.0 || value.fract() != 0.0 {
            return Err(ScreenerError::invalid_config(format!(
                "{} must be a positive whole number, got {value}",
                PARAMETER_NAMES[slot]
            )));
        }
        Ok(value as usize)
    }
}

/// Parse parameter-file text into a screening configuration.
pub fn parse_parameters(text: &str) -> Result<ScreenConfig> {
    let values = ParameterValues::new(text);

    let criteria = ScreenCriteria::new(
        values.number(0)?,
        values.number(1)?,
        values.number(2)?,
        values.number(3)?,
        values.number(4)?,
    );
    let windows = ChartWindows::new(values.window(5)?, values.window(6)?);

    Ok(ScreenConfig { criteria, windows })
}

/// Read and parse a parameter file.
pub fn load_parameters(path: impl AsRef<Path>) -> Result<ScreenConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let config = parse_parameters(&text)?;
    tracing::info!(path = %path.display(), ?config, "loaded filter parameters");
    Ok(config)
}
