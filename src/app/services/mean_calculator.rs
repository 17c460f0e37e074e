//! Historical mean calculation
//!
//! Reduces each currency's historical sample series to a single
//! arithmetic mean over the present samples. Absent samples are excluded
//! from both the sum and the count; a series with zero present samples
//! yields no mean at all, so the report can render a placeholder instead
//! of a misleading zero. No rounding happens here; formatting is a
//! rendering concern.

use crate::app::models::{CurrencyCode, HistoricalRates, MeanRates};
use tracing::{debug, info};

/// Calculator for per-currency historical means
#[derive(Debug)]
pub struct MeanCalculator {
    currencies: Vec<CurrencyCode>,
}

impl MeanCalculator {
    /// Create a new calculator for the given target currencies
    pub fn new(currencies: &[CurrencyCode]) -> Self {
        Self {
            currencies: currencies.to_vec(),
        }
    }

    /// Compute the mean historical rate for each currency with data
    pub fn calculate(&self, historical: &HistoricalRates) -> MeanRates {
        let mut means = MeanRates::new();

        for currency in &self.currencies {
            let mut sum = 0.0_f64;
            let mut count = 0_usize;

            for sample in historical.samples(currency).iter().flatten() {
                sum += sample;
                count += 1;
            }

            if count == 0 {
                debug!("No usable historical samples for {}", currency);
                continue;
            }

            let mean = sum / count as f64;
            debug!("{}: mean {:.4} over {} samples", currency, mean, count);
            means.insert(currency.clone(), mean);
        }

        info!(
            "Calculated means for {} of {} currencies",
            means.len(),
            self.currencies.len()
        );

        means
    }
}
