//! Daily snapshot parser
//!
//! Parses the single-row daily reference-rate export: one header row
//! naming currency columns, one data row of rate values. A structural
//! problem (no header, no data row) aborts the parse; an unusable cell
//! only costs that currency its rate.

use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::field_parsers::{RateCell, detect_delimiter, header_line, parse_rate_cell};
use super::stats::{DailyParseResult, ParseStats};
use crate::app::models::{CurrencyCode, DailyRates};
use crate::{Error, Result};

/// Parser for the daily reference-rate snapshot
#[derive(Debug)]
pub struct DailyRateParser {
    currencies: Vec<CurrencyCode>,
}

impl DailyRateParser {
    /// Create a new parser for the given target currencies
    pub fn new(currencies: &[CurrencyCode]) -> Self {
        Self {
            currencies: currencies.to_vec(),
        }
    }

    /// Parse a daily snapshot file and return rates with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<DailyParseResult> {
        info!("Parsing daily rates file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        self.parse_content(&content, &file_path.display().to_string())
    }

    /// Parse daily snapshot content
    pub fn parse_content(&self, content: &str, file: &str) -> Result<DailyParseResult> {
        let header = header_line(content)
            .ok_or_else(|| Error::format(file, "no header row found"))?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(detect_delimiter(header))
            .trim(csv::Trim::All)
            .has_headers(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| Error::csv_parsing(file, "failed to read header row", Some(e)))?;

        let mapping = ColumnMapping::resolve(headers, &self.currencies);
        debug!(
            "Resolved {} of {} currency columns",
            mapping.resolved_count(),
            self.currencies.len()
        );

        let mut stats = ParseStats::new();
        stats.missing_columns = mapping.missing.iter().map(|c| c.to_string()).collect();
        if !stats.missing_columns.is_empty() {
            warn!("Missing columns in daily file: {}", stats.missing_columns.join(", "));
        }

        let record = match reader.records().next() {
            Some(Ok(record)) => record,
            Some(Err(e)) => {
                return Err(Error::csv_parsing(file, "malformed data row", Some(e)));
            }
            None => return Err(Error::format(file, "no data row found")),
        };
        stats.total_rows = 1;

        let mut rates = DailyRates::new();
        for currency in &self.currencies {
            let Some(index) = mapping.get_index(currency) else {
                continue;
            };

            let raw = record.get(index).unwrap_or("");
            match parse_rate_cell(raw) {
                RateCell::Value(rate) => {
                    rates.insert(currency.clone(), rate);
                    stats.rates_parsed += 1;
                }
                RateCell::Missing => {
                    stats.cells_missing += 1;
                    debug!("No daily rate for {}", currency);
                }
                RateCell::Invalid => {
                    stats.cells_invalid += 1;
                    stats
                        .errors
                        .push(format!("Unusable daily rate for {}: '{}'", currency, raw));
                    warn!("Unusable daily rate for {}: '{}'", currency, raw);
                }
            }
        }

        info!("Extracted {} daily rates", rates.len());

        Ok(DailyParseResult { rates, stats })
    }
}
