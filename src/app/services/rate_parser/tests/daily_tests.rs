//! Tests for the daily snapshot parser

use super::super::daily::DailyRateParser;
use super::{create_temp_file, create_test_daily_csv, currency, target_currencies};
use crate::Error;

fn parser() -> DailyRateParser {
    DailyRateParser::new(&target_currencies())
}

#[test]
fn test_parse_complete_snapshot() {
    let result = parser()
        .parse_content(&create_test_daily_csv(), "eurofxref.csv")
        .unwrap();

    assert_eq!(result.rates.len(), 4);
    assert_eq!(result.rates.get(&currency("USD")), Some(1.10));
    assert_eq!(result.rates.get(&currency("SEK")), Some(11.5));
    assert_eq!(result.rates.get(&currency("GBP")), Some(0.85));
    assert_eq!(result.rates.get(&currency("JPY")), Some(165.20));

    assert_eq!(result.stats.total_rows, 1);
    assert_eq!(result.stats.rates_parsed, 4);
    assert_eq!(result.stats.cells_invalid, 0);
    assert!(result.stats.is_successful());
}

#[test]
fn test_trailing_empty_cell_is_missing() {
    // JPY cell is empty: the currency is absent, not an error
    let content = "USD,SEK,GBP,JPY\n1.10,11.5,0.85,\n";
    let result = parser().parse_content(content, "eurofxref.csv").unwrap();

    assert_eq!(result.rates.len(), 3);
    assert_eq!(result.rates.get(&currency("JPY")), None);
    assert_eq!(result.stats.cells_missing, 1);
    assert_eq!(result.stats.cells_invalid, 0);
}

#[test]
fn test_missing_value_marker() {
    let content = "USD,SEK\n1.10,N/A\n";
    let result = parser().parse_content(content, "eurofxref.csv").unwrap();

    assert_eq!(result.rates.get(&currency("SEK")), None);
    assert_eq!(result.stats.cells_missing, 1);
}

#[test]
fn test_non_numeric_cell_is_invalid_not_fatal() {
    let content = "USD,SEK\nabc,11.5\n";
    let result = parser().parse_content(content, "eurofxref.csv").unwrap();

    assert_eq!(result.rates.get(&currency("USD")), None);
    assert_eq!(result.rates.get(&currency("SEK")), Some(11.5));
    assert_eq!(result.stats.cells_invalid, 1);
    assert_eq!(result.stats.errors.len(), 1);
}

#[test]
fn test_non_positive_rate_is_invalid() {
    let content = "USD,SEK\n-1.10,0\n";
    let result = parser().parse_content(content, "eurofxref.csv").unwrap();

    assert!(result.rates.is_empty());
    assert_eq!(result.stats.cells_invalid, 2);
}

#[test]
fn test_missing_column_is_omitted() {
    let content = "Date,USD,SEK,JPY\ntoday,1.10,11.5,165.2\n";
    let result = parser().parse_content(content, "eurofxref.csv").unwrap();

    assert_eq!(result.rates.len(), 3);
    assert_eq!(result.rates.get(&currency("GBP")), None);
    assert_eq!(result.stats.missing_columns, vec!["GBP".to_string()]);
}

#[test]
fn test_header_matching_tolerates_case_and_whitespace() {
    let content = "date, usd , sek\n2026-08-06, 1.10, 11.5\n";
    let result = parser().parse_content(content, "eurofxref.csv").unwrap();

    assert_eq!(result.rates.get(&currency("USD")), Some(1.10));
    assert_eq!(result.rates.get(&currency("SEK")), Some(11.5));
}

#[test]
fn test_semicolon_delimited_snapshot() {
    let content = "Date;USD;SEK\n2026-08-06;1.10;11.5\n";
    let result = parser().parse_content(content, "eurofxref.csv").unwrap();

    assert_eq!(result.rates.get(&currency("USD")), Some(1.10));
    assert_eq!(result.rates.get(&currency("SEK")), Some(11.5));
}

#[test]
fn test_missing_data_row_is_format_error() {
    let content = "Date,USD,SEK,GBP,JPY\n";
    let result = parser().parse_content(content, "eurofxref.csv");

    assert!(matches!(result, Err(Error::Format { .. })));
}

#[test]
fn test_empty_content_is_format_error() {
    let result = parser().parse_content("", "eurofxref.csv");
    assert!(matches!(result, Err(Error::Format { .. })));

    let result = parser().parse_content("\n   \n", "eurofxref.csv");
    assert!(matches!(result, Err(Error::Format { .. })));
}

#[test]
fn test_parse_file_roundtrip() {
    let temp_file = create_temp_file(&create_test_daily_csv());
    let result = parser().parse_file(temp_file.path()).unwrap();

    assert_eq!(result.rates.len(), 4);
}

#[test]
fn test_parse_file_not_found() {
    let result = parser().parse_file(std::path::Path::new("/nonexistent/eurofxref.csv"));
    assert!(matches!(result, Err(Error::FileNotFound { .. })));
}
