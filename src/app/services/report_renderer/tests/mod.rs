//! Test utilities for report rendering and persistence

use crate::app::models::{CurrencyCode, DailyRates, MeanRates};

mod writer_tests;

/// The default target currency set, in report order
pub fn target_currencies() -> Vec<CurrencyCode> {
    ["USD", "SEK", "GBP", "JPY"]
        .iter()
        .map(|c| c.parse().unwrap())
        .collect()
}

/// Look up one of the target currencies by code
pub fn currency(code: &str) -> CurrencyCode {
    code.parse().unwrap()
}

/// Daily rates fixture matching the documented scenario
pub fn sample_daily_rates() -> DailyRates {
    let mut rates = DailyRates::new();
    rates.insert(currency("USD"), 1.10);
    rates.insert(currency("SEK"), 11.5);
    rates.insert(currency("GBP"), 0.85);
    rates
}

/// Mean rates fixture with USD only
pub fn sample_mean_rates() -> MeanRates {
    let mut means = MeanRates::new();
    means.insert(currency("USD"), 1.10);
    means
}
