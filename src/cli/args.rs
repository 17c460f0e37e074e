//! Command-line argument definitions for the ECB reporter
//!
//! This module defines the CLI interface using the clap derive API. The
//! tool runs against the fixed ECB export filenames in the working
//! directory by default; every path can be overridden for testing or
//! alternative layouts.

use crate::app::models::CurrencyCode;
use crate::config::Config;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the ECB exchange-rate reporter
///
/// Reads the daily and historical euro foreign exchange reference CSV
/// exports and renders a styled HTML rate report.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ecb-reporter",
    version,
    about = "Convert ECB exchange-rate CSV exports into a styled HTML report",
    long_about = "Reads the European Central Bank euro foreign exchange reference exports \
                  (daily snapshot and historical series), computes the current rate and the \
                  historical mean for each target currency, and writes a self-contained HTML \
                  report. Runs against eurofxref.csv and eurofxref-hist.csv in the working \
                  directory unless told otherwise."
)]
pub struct Args {
    /// Path to the daily rates CSV
    ///
    /// Defaults to eurofxref.csv in the working directory.
    #[arg(
        long = "daily",
        value_name = "FILE",
        help = "Path to the daily rates CSV (default: eurofxref.csv)"
    )]
    pub daily_path: Option<PathBuf>,

    /// Path to the historical rates CSV
    ///
    /// Defaults to eurofxref-hist.csv in the working directory.
    #[arg(
        long = "historical",
        value_name = "FILE",
        help = "Path to the historical rates CSV (default: eurofxref-hist.csv)"
    )]
    pub historical_path: Option<PathBuf>,

    /// Output path for the HTML report
    ///
    /// Any existing report at this path is overwritten.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the HTML report (default: exchange_rates.html)"
    )]
    pub output_path: Option<PathBuf>,

    /// Target currencies to report (comma-separated list)
    ///
    /// Report rows appear in the order given here.
    /// If not specified, reports the default set: USD, SEK, GBP, JPY.
    #[arg(
        short = 'c',
        long = "currencies",
        value_name = "LIST",
        help = "Comma-separated list of target currency codes"
    )]
    pub currencies: Option<CurrencyList>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Wrapper for parsing comma-separated currency lists
#[derive(Debug, Clone)]
pub struct CurrencyList {
    pub currencies: Vec<CurrencyCode>,
}

impl FromStr for CurrencyList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let currencies = s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(CurrencyCode::from_str)
            .collect::<Result<Vec<_>>>()?;

        if currencies.is_empty() {
            return Err(Error::validation(
                "Currency list cannot be empty".to_string(),
            ));
        }

        Ok(CurrencyList { currencies })
    }
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Input paths are checked only when explicitly provided; the
        // default filenames are resolved at parse time.
        for (label, path) in [
            ("daily", &self.daily_path),
            ("historical", &self.historical_path),
        ] {
            if let Some(path) = path {
                if !path.exists() {
                    return Err(Error::configuration(format!(
                        "The {} rates file does not exist: {}",
                        label,
                        path.display()
                    )));
                }
                if !path.is_file() {
                    return Err(Error::configuration(format!(
                        "The {} rates path is not a file: {}",
                        label,
                        path.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Build the run configuration from defaults and overrides
    pub fn to_config(&self) -> Config {
        let mut config = Config::default();

        if let Some(path) = &self.daily_path {
            config = config.with_daily_path(path.clone());
        }
        if let Some(path) = &self.historical_path {
            config = config.with_historical_path(path.clone());
        }
        if let Some(path) = &self.output_path {
            config = config.with_output_path(path.clone());
        }
        if let Some(list) = &self.currencies {
            config = config.with_currencies(list.currencies.clone());
        }

        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
