//! Field parsing utilities for ECB rate records
//!
//! This module provides helper functions for classifying and parsing
//! individual CSV cells. A cell is either a usable positive rate, missing
//! (empty or the feed's `N/A` marker), or invalid (present but unusable).

use crate::constants::{ECB_DATE_FORMAT, is_missing_value};
use chrono::NaiveDate;

/// Classification of one rate cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateCell {
    /// A usable positive rate
    Value(f64),
    /// Empty cell or missing-value marker
    Missing,
    /// Present but non-numeric or non-positive
    Invalid,
}

impl RateCell {
    /// The parsed rate, when the cell was usable
    pub fn value(self) -> Option<f64> {
        match self {
            RateCell::Value(rate) => Some(rate),
            RateCell::Missing | RateCell::Invalid => None,
        }
    }
}

/// Classify and parse a single rate cell
///
/// Rates are EUR reference quotes and must be strictly positive; zero or
/// negative values are treated as invalid rather than stored, so they can
/// never distort a downstream mean.
pub fn parse_rate_cell(value: &str) -> RateCell {
    if is_missing_value(value) {
        return RateCell::Missing;
    }

    match value.trim().parse::<f64>() {
        Ok(rate) if rate.is_finite() && rate > 0.0 => RateCell::Value(rate),
        _ => RateCell::Invalid,
    }
}

/// Parse an ECB date cell, `None` when absent or malformed
pub fn parse_date_cell(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, ECB_DATE_FORMAT).ok()
}

/// First non-blank line of the file content, used as the header row
pub fn header_line(content: &str) -> Option<&str> {
    content.lines().find(|line| !line.trim().is_empty())
}

/// Detect the field delimiter from a header line
///
/// The published ECB feed is comma-separated, but semicolon-separated
/// re-exports of the same feed exist. Whichever separator occurs more
/// often in the header row wins; ties fall back to the comma.
pub fn detect_delimiter(header_line: &str) -> u8 {
    let semicolons = header_line.matches(';').count();
    let commas = header_line.matches(',').count();

    if semicolons > commas { b';' } else { b',' }
}
