//! Configuration management and validation.
//!
//! Provides the run configuration for the report pipeline: input and
//! output paths plus the ordered target currency list. The currency
//! list is carried as an explicit value into each pipeline component so
//! tests can reconfigure it freely.

use crate::app::models::CurrencyCode;
use crate::constants::{
    DAILY_RATES_FILENAME, HISTORICAL_RATES_FILENAME, REPORT_FILENAME, TARGET_CURRENCIES,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Global configuration for a report run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the daily reference-rate snapshot
    pub daily_path: PathBuf,

    /// Path to the historical reference-rate series
    pub historical_path: PathBuf,

    /// Path the HTML report is written to
    pub output_path: PathBuf,

    /// Currencies the report covers, in report order
    pub currencies: Vec<CurrencyCode>,
}

impl Default for Config {
    fn default() -> Self {
        let currencies = TARGET_CURRENCIES
            .iter()
            .map(|code| code.parse().expect("built-in currency code is valid"))
            .collect();

        Self {
            daily_path: PathBuf::from(DAILY_RATES_FILENAME),
            historical_path: PathBuf::from(HISTORICAL_RATES_FILENAME),
            output_path: PathBuf::from(REPORT_FILENAME),
            currencies,
        }
    }
}

impl Config {
    /// Create configuration with a custom daily snapshot path
    pub fn with_daily_path(mut self, path: PathBuf) -> Self {
        self.daily_path = path;
        self
    }

    /// Create configuration with a custom historical series path
    pub fn with_historical_path(mut self, path: PathBuf) -> Self {
        self.historical_path = path;
        self
    }

    /// Create configuration with a custom report output path
    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = path;
        self
    }

    /// Create configuration with a custom currency list
    pub fn with_currencies(mut self, currencies: Vec<CurrencyCode>) -> Self {
        self.currencies = currencies;
        self
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.currencies.is_empty() {
            return Err(Error::configuration(
                "Target currency list cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for currency in &self.currencies {
            if !seen.insert(currency) {
                return Err(Error::configuration(format!(
                    "Duplicate target currency: {}",
                    currency
                )));
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Output path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.daily_path, PathBuf::from("eurofxref.csv"));
        assert_eq!(config.historical_path, PathBuf::from("eurofxref-hist.csv"));
        assert_eq!(config.output_path, PathBuf::from("exchange_rates.html"));
        assert_eq!(config.currencies.len(), 4);
        assert_eq!(config.currencies[0].as_str(), "USD");
        assert_eq!(config.currencies[3].as_str(), "JPY");

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::default()
            .with_daily_path(PathBuf::from("/tmp/daily.csv"))
            .with_output_path(PathBuf::from("/tmp/report.html"));

        assert_eq!(config.daily_path, PathBuf::from("/tmp/daily.csv"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/report.html"));
        // Untouched fields keep their defaults
        assert_eq!(config.historical_path, PathBuf::from("eurofxref-hist.csv"));
    }

    #[test]
    fn test_validation_rejects_empty_currency_list() {
        let config = Config::default().with_currencies(vec![]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_currencies() {
        let usd: CurrencyCode = "USD".parse().unwrap();
        let config = Config::default().with_currencies(vec![usd.clone(), usd]);
        assert!(config.validate().is_err());
    }
}
