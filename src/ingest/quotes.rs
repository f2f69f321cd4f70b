//! Parsing of daily quote text into a [`TimeSeries`].
//!
//! The provider format interleaves metadata lines with data rows. A data row
//! has exactly six comma-separated fields in the order
//! `date,close,high,low,open,volume`, with the date written as `%Y%m%d`.
//! The column-name line also has six fields and is recognised by the
//! `values` marker it carries.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::core::error::ScreenerError;
use crate::core::types::TradeDate;
use crate::core::{Result, TimeSeries};

/// Number of fields in a data row.
pub const QUOTE_FIELDS: usize = 6;

const HEADER_MARKER: &str = "values";
const DATE_FORMAT: &str = "%Y%m%d";

fn is_data_row(record: &StringRecord) -> bool {
    record.len() == QUOTE_FIELDS && !record.iter().any(|field| field.contains(HEADER_MARKER))
}

fn records(text: &str) -> impl Iterator<Item = csv::Result<StringRecord>> + '_ {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes())
        .into_records()
}

/// Number of lines in `text` that qualify as data rows.
pub fn count_data_rows(text: &str) -> usize {
    records(text)
        .filter_map(|record| record.ok())
        .filter(is_data_row)
        .count()
}

fn parse_number(record: &StringRecord, index: usize, name: &str, line: usize) -> Result<f64> {
    let field = &record[index];
    field
        .parse::<f64>()
        .map_err(|e| ScreenerError::quote_parse(line, format!("{name} '{field}': {e}")))
}

/// Parse provider quote text into a validated series.
pub fn parse_quotes(text: &str) -> Result<TimeSeries> {
    let mut dates = Vec::new();
    let mut open = Vec::new();
    let mut high = Vec::new();
    let mut low = Vec::new();
    let mut close = Vec::new();
    let mut volume = Vec::new();

    for record in records(text) {
        let record = record.map_err(|e| {
            let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
            ScreenerError::quote_parse(line, e.to_string())
        })?;
        if !is_data_row(&record) {
            continue;
        }
        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

        let date = TradeDate::parse_from_str(&record[0], DATE_FORMAT)
            .map_err(|e| ScreenerError::quote_parse(line, format!("date '{}': {e}", &record[0])))?;
        dates.push(date);
        close.push(parse_number(&record, 1, "close", line)?);
        high.push(parse_number(&record, 2, "high", line)?);
        low.push(parse_number(&record, 3, "low", line)?);
        open.push(parse_number(&record, 4, "open", line)?);
        volume.push(parse_number(&record, 5, "volume", line)?);
    }

    if dates.is_empty() {
        return Err(ScreenerError::empty_data("quote text"));
    }
    tracing::trace!(rows = dates.len(), "parsed quote rows");

    TimeSeries::new(dates, open, high, low, close, volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "uri:/instrument/1.0/ACME/chartdata;type=quote;range=2y/csv\n\
        ticker:acme\n\
        Date:20240102,20240105\n\
        values:Date,close,high,low,open,volume\n\
        close:9.5,11.2\n\
        20240102,10.5,10.9,10.1,10.2,120000\n\
        20240103,10.8,11.0,10.4,10.5,98000\n\
        20240104,11.1,11.2,10.7,10.8,143000\n";

    #[test]
    fn test_parse_sample() {
        let series = parse_quotes(SAMPLE).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.close(), &[10.5, 10.8, 11.1]);
        assert_eq!(series.open(), &[10.2, 10.5, 10.8]);
        assert_eq!(series.high()[2], 11.2);
        assert_eq!(series.low()[0], 10.1);
        assert_eq!(series.volume()[1], 98000.0);
        assert_eq!(series.dates()[0], TradeDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_count_data_rows() {
        assert_eq!(count_data_rows(SAMPLE), 3);
        assert_eq!(count_data_rows(""), 0);
    }

    #[test]
    fn test_bad_number_reports_line() {
        let text = "20240102,10.5,10.9,10.1,10.2,120000\n20240103,abc,11.0,10.4,10.5,98000\n";
        match parse_quotes(text) {
            Err(ScreenerError::QuoteParse { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("close"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_no_rows() {
        assert!(matches!(
            parse_quotes("values:Date,close,high,low,open,volume\n"),
            Err(ScreenerError::EmptyData { .. })
        ));
    }
}
