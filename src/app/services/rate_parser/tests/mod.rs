//! Test utilities for rate-file parser testing
//!
//! This module provides common fixtures and helper functions used across
//! the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::models::CurrencyCode;

mod daily_tests;

/// The default target currency set, in report order
pub fn target_currencies() -> Vec<CurrencyCode> {
    ["USD", "SEK", "GBP", "JPY"]
        .iter()
        .map(|c| c.parse().unwrap())
        .collect()
}

/// Look up one of the target currencies by code
pub fn currency(code: &str) -> CurrencyCode {
    code.parse().unwrap()
}

/// Helper to create a complete daily snapshot in the ECB layout
pub fn create_test_daily_csv() -> String {
    "Date, USD, SEK, GBP, JPY\n06 August 2026, 1.10, 11.5, 0.85, 165.20\n".to_string()
}

/// Helper to create a historical series with gaps and a missing marker
pub fn create_test_historical_csv() -> String {
    "Date,USD,SEK,GBP,JPY\n\
     2026-08-06,1.05,11.2,0.84,164.0\n\
     2026-08-05,N/A,11.4,0.86,166.0\n\
     2026-08-04,1.15,,0.85,165.0\n"
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
