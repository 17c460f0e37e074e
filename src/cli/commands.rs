//! Pipeline orchestration for the ECB reporter CLI
//!
//! This module contains the complete report workflow: argument
//! validation, the four pipeline stages in sequence, and the final
//! summary. Per-cell and per-row problems are counted and summarized;
//! structural and I/O problems abort the run.

use colored::*;
use indicatif::HumanDuration;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::app::services::mean_calculator::MeanCalculator;
use crate::app::services::rate_parser::{DailyRateParser, HistoricalRateParser, ParseStats};
use crate::app::services::report_renderer::{ReportRenderer, ReportWriter};
use crate::cli::args::Args;
use crate::config::Config;
use crate::{Error, Result};

/// Pipeline statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Number of currencies with a usable daily rate
    pub daily_rates_found: usize,
    /// Number of currencies with a computed historical mean
    pub means_computed: usize,
    /// Number of report rows rendered
    pub rows_rendered: usize,
    /// Number of historical data rows encountered
    pub historical_rows: usize,
    /// Number of historical rows skipped due to CSV errors
    pub rows_skipped: usize,
    /// Number of unusable cells across both inputs
    pub cells_invalid: usize,
    /// Number of missing cells across both inputs
    pub cells_missing: usize,
    /// Size of the written report in bytes
    pub report_bytes: u64,
    /// Total processing time
    pub processing_time: Duration,
}

/// Set up structured logging from the verbosity flags
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ecb_reporter={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Run the full report pipeline
///
/// Sequences daily parse, historical parse, mean calculation, rendering
/// and the final write. Returns the collected statistics on success.
pub fn run(args: Args) -> Result<PipelineStats> {
    let start_time = Instant::now();

    info!("Starting exchange-rate report pipeline");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args.to_config();
    config.validate()?;

    // Stage 1: daily snapshot
    let daily = DailyRateParser::new(&config.currencies).parse_file(&config.daily_path)?;

    // Stage 2: historical series
    let historical =
        HistoricalRateParser::new(&config.currencies).parse_file(&config.historical_path)?;

    // Stage 3: historical means
    let means = MeanCalculator::new(&config.currencies).calculate(&historical.rates);

    // The two sources are independently optional per currency, but a run
    // where neither yielded anything produces a report of placeholders
    // only, which is treated as a data error.
    let missing_everywhere: Vec<String> = config
        .currencies
        .iter()
        .filter(|c| daily.rates.get(c).is_none() && means.get(c).is_none())
        .map(|c| c.to_string())
        .collect();

    if !missing_everywhere.is_empty() {
        warn!("No data found for currencies: {}", missing_everywhere.join(", "));
    }

    if daily.rates.is_empty() && means.is_empty() {
        return Err(Error::validation(
            "No exchange rate data found in either the daily or the historical file".to_string(),
        ));
    }

    // Stage 4: render and persist
    let renderer = ReportRenderer::new(&config.currencies);
    let rows = renderer.build_rows(&daily.rates, &means);

    let period = match (historical.rates.first_date, historical.rates.last_date) {
        (Some(first), Some(last)) => Some((first, last)),
        _ => None,
    };

    let html = renderer.render(&rows, period);
    let report_bytes = ReportWriter::write(&config.output_path, &html)?;

    let stats = PipelineStats {
        daily_rates_found: daily.rates.len(),
        means_computed: means.len(),
        rows_rendered: rows.len(),
        historical_rows: historical.stats.total_rows,
        rows_skipped: historical.stats.rows_skipped,
        cells_invalid: daily.stats.cells_invalid + historical.stats.cells_invalid,
        cells_missing: daily.stats.cells_missing + historical.stats.cells_missing,
        report_bytes,
        processing_time: start_time.elapsed(),
    };

    if !args.quiet {
        print_summary(&config, &stats, &daily.stats, &historical.stats);
    }

    Ok(stats)
}

/// Print the human-readable run summary
fn print_summary(
    config: &Config,
    stats: &PipelineStats,
    daily: &ParseStats,
    historical: &ParseStats,
) {
    println!("\n{}", "Report Summary".bright_green().bold());
    println!("{}", "==============".bright_green());

    println!(
        "  Daily rates found:   {} of {}",
        stats.daily_rates_found.to_string().bright_white().bold(),
        config.currencies.len()
    );
    println!(
        "  Historical means:    {} of {}",
        stats.means_computed.to_string().bright_white().bold(),
        config.currencies.len()
    );
    println!(
        "  Historical rows:     {}",
        stats.historical_rows.to_string().bright_white().bold()
    );

    if stats.rows_skipped > 0 {
        println!(
            "  Rows skipped:        {}",
            stats.rows_skipped.to_string().bright_red().bold()
        );
    }
    if stats.cells_invalid > 0 {
        println!(
            "  Invalid cells:       {}",
            stats.cells_invalid.to_string().yellow().bold()
        );
    }

    for column in daily.missing_columns.iter() {
        println!("  {} {}", "Missing daily column:".yellow(), column);
    }
    for column in historical.missing_columns.iter() {
        println!("  {} {}", "Missing historical column:".yellow(), column);
    }

    println!(
        "  Report written:      {} ({} bytes)",
        config.output_path.display().to_string().bright_white().bold(),
        stats.report_bytes
    );
    println!("  Elapsed:             {}", HumanDuration(stats.processing_time));
}
