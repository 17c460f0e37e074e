//! CSV parsers for ECB reference-rate files
//!
//! This module provides parsers for the two ECB exports: the single-row
//! daily snapshot and the multi-row historical series. The design keeps
//! per-cell problems local (an unusable cell becomes an absent value)
//! while structural problems abort the parse.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`daily`] - Daily snapshot parsing (one data row)
//! - [`historical`] - Historical series parsing (one row per date)
//! - [`column_mapping`] - Header analysis and currency column resolution
//! - [`field_parsers`] - Utility functions for cell parsing and validation
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use ecb_reporter::app::services::rate_parser::DailyRateParser;
//! use ecb_reporter::app::models::CurrencyCode;
//!
//! # fn example() -> ecb_reporter::Result<()> {
//! let currencies: Vec<CurrencyCode> = vec!["USD".parse()?, "SEK".parse()?];
//! let parser = DailyRateParser::new(&currencies);
//! let result = parser.parse_content("USD,SEK\n1.10,11.5\n", "eurofxref.csv")?;
//!
//! println!("Extracted {} rates from {} cells",
//!          result.stats.rates_parsed,
//!          result.stats.cells_examined());
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod daily;
pub mod field_parsers;
pub mod historical;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use daily::DailyRateParser;
pub use historical::HistoricalRateParser;
pub use stats::{DailyParseResult, HistoricalParseResult, ParseStats};
