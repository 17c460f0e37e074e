//! Currency column resolution for ECB rate files
//!
//! This module analyzes a CSV header row once per file, producing a typed
//! {currency -> column index} lookup table used for strict indexed access
//! afterwards. Header matching is case-insensitive and whitespace-trimmed.

use crate::app::models::CurrencyCode;
use crate::constants::DATE_COLUMN;
use csv::StringRecord;
use std::collections::HashMap;

/// Column lookup table for one rate file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Currency to column index mapping
    name_to_index: HashMap<CurrencyCode, usize>,

    /// Target currencies with no matching column, in target order
    pub missing: Vec<CurrencyCode>,

    /// Index of the date column, when the file carries one
    pub date_index: Option<usize>,
}

impl ColumnMapping {
    /// Resolve target currency columns from a header row
    pub fn resolve(headers: &StringRecord, currencies: &[CurrencyCode]) -> Self {
        let mut name_to_index = HashMap::new();
        let mut date_index = None;

        for (index, header) in headers.iter().enumerate() {
            if header.trim().eq_ignore_ascii_case(DATE_COLUMN) {
                date_index.get_or_insert(index);
                continue;
            }

            for currency in currencies {
                if currency.matches_header(header) {
                    // First matching column wins
                    name_to_index.entry(currency.clone()).or_insert(index);
                }
            }
        }

        let missing = currencies
            .iter()
            .filter(|c| !name_to_index.contains_key(c))
            .cloned()
            .collect();

        ColumnMapping {
            name_to_index,
            missing,
            date_index,
        }
    }

    /// Get the column index for a currency
    pub fn get_index(&self, currency: &CurrencyCode) -> Option<usize> {
        self.name_to_index.get(currency).copied()
    }

    /// Check if a currency has a resolved column
    pub fn has_currency(&self, currency: &CurrencyCode) -> bool {
        self.name_to_index.contains_key(currency)
    }

    /// Number of resolved currency columns
    pub fn resolved_count(&self) -> usize {
        self.name_to_index.len()
    }
}
