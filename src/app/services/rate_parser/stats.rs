//! Parsing statistics and result structures for rate-file processing
//!
//! This module provides types for tracking parse success rates and
//! organizing parsed results for downstream processing.

use crate::app::models::{DailyRates, HistoricalRates};

/// Daily snapshot parse result with rates and statistics
#[derive(Debug, Clone)]
pub struct DailyParseResult {
    /// Rates extracted from the single data row
    pub rates: DailyRates,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Historical series parse result with sample series and statistics
#[derive(Debug, Clone)]
pub struct HistoricalParseResult {
    /// Per-currency sample series
    pub rates: HistoricalRates,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Number of rate cells successfully parsed
    pub rates_parsed: usize,

    /// Number of cells that were empty or carried the missing marker
    pub cells_missing: usize,

    /// Number of cells that were present but unusable
    pub cells_invalid: usize,

    /// Number of rows skipped due to CSV errors
    pub rows_skipped: usize,

    /// Target currencies whose column was absent from the header
    pub missing_columns: Vec<String>,

    /// List of parsing errors for reporting
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_rows: 0,
            rates_parsed: 0,
            cells_missing: 0,
            cells_invalid: 0,
            rows_skipped: 0,
            missing_columns: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Total number of rate cells examined
    pub fn cells_examined(&self) -> usize {
        self.rates_parsed + self.cells_missing + self.cells_invalid
    }

    /// Calculate cell success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let examined = self.cells_examined();
        if examined == 0 {
            0.0
        } else {
            (self.rates_parsed as f64 / examined as f64) * 100.0
        }
    }

    /// Check if parsing was mostly successful (>90% success rate)
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
