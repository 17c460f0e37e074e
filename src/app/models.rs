//! Core data models for the rate-report pipeline
//!
//! Every stage of the pipeline exchanges the plain records defined here.
//! All values that can be absent are `Option<f64>`; no sentinel values
//! are used for missing rates.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Three-letter ISO 4217 currency code, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// View the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a header cell names this currency.
    ///
    /// Header matching is case-insensitive and whitespace-tolerant.
    pub fn matches_header(&self, header: &str) -> bool {
        header.trim().eq_ignore_ascii_case(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::validation(format!(
                "Invalid currency code '{}': expected three ASCII letters",
                s
            )));
        }

        Ok(CurrencyCode(trimmed.to_ascii_uppercase()))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The most recent single-day snapshot of currency-to-EUR rates
///
/// A currency whose column was missing or whose cell was unusable is
/// simply absent from the map.
#[derive(Debug, Clone, Default)]
pub struct DailyRates {
    rates: HashMap<CurrencyCode, f64>,
}

impl DailyRates {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rate for a currency
    pub fn insert(&mut self, currency: CurrencyCode, rate: f64) {
        self.rates.insert(currency, rate);
    }

    /// Look up the rate for a currency
    pub fn get(&self, currency: &CurrencyCode) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    /// Number of currencies with a usable rate
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when no currency has a usable rate
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Per-currency time series of historical rate samples
///
/// Each series is aligned with the data rows of the historical file:
/// a malformed or empty cell contributes `None` at its row position so
/// the series never loses alignment.
#[derive(Debug, Clone, Default)]
pub struct HistoricalRates {
    series: HashMap<CurrencyCode, Vec<Option<f64>>>,

    /// Earliest date seen in the series, when the file carries one
    pub first_date: Option<NaiveDate>,

    /// Latest date seen in the series
    pub last_date: Option<NaiveDate>,
}

impl HistoricalRates {
    /// Create an empty series set covering the given currencies
    pub fn for_currencies(currencies: &[CurrencyCode]) -> Self {
        let series = currencies
            .iter()
            .map(|c| (c.clone(), Vec::new()))
            .collect();

        Self {
            series,
            first_date: None,
            last_date: None,
        }
    }

    /// Append one sample to a currency's series
    pub fn push_sample(&mut self, currency: &CurrencyCode, sample: Option<f64>) {
        self.series
            .entry(currency.clone())
            .or_default()
            .push(sample);
    }

    /// Record a row date, widening the known date span
    pub fn record_date(&mut self, date: NaiveDate) {
        self.first_date = Some(match self.first_date {
            Some(first) if first <= date => first,
            _ => date,
        });
        self.last_date = Some(match self.last_date {
            Some(last) if last >= date => last,
            _ => date,
        });
    }

    /// The sample series for a currency, empty when the currency is unknown
    pub fn samples(&self, currency: &CurrencyCode) -> &[Option<f64>] {
        self.series.get(currency).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of present (non-absent) samples for a currency
    pub fn present_count(&self, currency: &CurrencyCode) -> usize {
        self.samples(currency)
            .iter()
            .filter(|s| s.is_some())
            .count()
    }

    /// True when no currency has any present sample
    pub fn is_empty(&self) -> bool {
        self.series
            .values()
            .all(|samples| samples.iter().all(Option::is_none))
    }
}

/// Arithmetic means of historical samples, one per currency with data
///
/// A currency whose series had zero present samples is absent from the
/// map, never recorded as zero.
#[derive(Debug, Clone, Default)]
pub struct MeanRates {
    means: HashMap<CurrencyCode, f64>,
}

impl MeanRates {
    /// Create an empty mean set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the mean for a currency
    pub fn insert(&mut self, currency: CurrencyCode, mean: f64) {
        self.means.insert(currency, mean);
    }

    /// Look up the mean for a currency
    pub fn get(&self, currency: &CurrencyCode) -> Option<f64> {
        self.means.get(currency).copied()
    }

    /// Number of currencies with a computed mean
    pub fn len(&self) -> usize {
        self.means.len()
    }

    /// True when no currency has a computed mean
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}

/// One rendered report line: the join of daily rate and historical mean
///
/// The two sources are independently optional; a currency missing from
/// one input still produces a row with the other value populated.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub currency: CurrencyCode,
    pub rate: Option<f64>,
    pub mean: Option<f64>,
}
