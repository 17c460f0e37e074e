//! Historical series parser
//!
//! Parses the multi-row historical reference-rate export: one header
//! row, then one data row per date. Every data row contributes exactly
//! one sample per resolved currency; unusable cells contribute an absent
//! sample so the series keep their row alignment. Rows the CSV reader
//! cannot decode at all are skipped individually and counted.

use std::path::Path;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::field_parsers::{
    RateCell, detect_delimiter, header_line, parse_date_cell, parse_rate_cell,
};
use super::stats::{HistoricalParseResult, ParseStats};
use crate::app::models::{CurrencyCode, HistoricalRates};
use crate::{Error, Result};

/// Parser for the historical reference-rate series
#[derive(Debug)]
pub struct HistoricalRateParser {
    currencies: Vec<CurrencyCode>,
}

impl HistoricalRateParser {
    /// Create a new parser for the given target currencies
    pub fn new(currencies: &[CurrencyCode]) -> Self {
        Self {
            currencies: currencies.to_vec(),
        }
    }

    /// Parse a historical series file and return samples with statistics
    pub fn parse_file(&self, file_path: &Path) -> Result<HistoricalParseResult> {
        info!("Parsing historical rates file: {}", file_path.display());

        if !file_path.exists() {
            return Err(Error::file_not_found(file_path.display().to_string()));
        }

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        self.parse_content(&content, &file_path.display().to_string())
    }

    /// Parse historical series content
    ///
    /// A header-only file is valid: every series stays empty and the
    /// downstream mean is absent for every currency.
    pub fn parse_content(&self, content: &str, file: &str) -> Result<HistoricalParseResult> {
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
            warn!(
                "Missing columns in historical file: {}",
                stats.missing_columns.join(", ")
            );
        }

        let mut rates = HistoricalRates::for_currencies(&self.currencies);

        for result in reader.records() {
            stats.total_rows += 1;

            match result {
                Ok(record) => {
                    if let Some(date_index) = mapping.date_index {
                        if let Some(date) =
                            record.get(date_index).and_then(parse_date_cell)
                        {
                            rates.record_date(date);
                        }
                    }

                    for currency in &self.currencies {
                        let Some(index) = mapping.get_index(currency) else {
                            continue;
                        };

                        let raw = record.get(index).unwrap_or("");
                        match parse_rate_cell(raw) {
                            RateCell::Value(rate) => {
                                rates.push_sample(currency, Some(rate));
                                stats.rates_parsed += 1;
                            }
                            RateCell::Missing => {
                                rates.push_sample(currency, None);
                                stats.cells_missing += 1;
                            }
                            RateCell::Invalid => {
                                rates.push_sample(currency, None);
                                stats.cells_invalid += 1;
                                stats.errors.push(format!(
                                    "Row {}: unusable rate '{}' for {}",
                                    stats.total_rows, raw, currency
                                ));
                            }
                        }
                    }
                }
                Err(e) => {
                    stats.rows_skipped += 1;
                    stats.errors.push(format!(
                        "CSV parse error at row {}: {}",
                        stats.total_rows, e
                    ));
                    debug!("Skipped row {}: {}", stats.total_rows, e);
                }
            }
        }

        for currency in &self.currencies {
            debug!(
                "{}: {} of {} samples usable",
                currency,
                rates.present_count(currency),
                rates.samples(currency).len()
            );
        }
        info!(
            "Extracted {} samples from {} rows ({} skipped)",
            stats.rates_parsed, stats.total_rows, stats.rows_skipped
        );

        Ok(HistoricalParseResult { rates, stats })
    }
}
