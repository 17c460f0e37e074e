//! HTML report generation
//!
//! Builds one report row per target currency in the configured order,
//! then renders a self-contained static HTML page with inline styling.
//! Rendering is deterministic: identical rows produce byte-identical
//! output, which the tests rely on.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::app::models::{CurrencyCode, DailyRates, MeanRates, ReportRow};
use crate::constants::{RATE_DECIMAL_PLACES, REPORT_PLACEHOLDER, REPORT_TITLE};

/// HTML report generator
#[derive(Debug)]
pub struct ReportRenderer {
    currencies: Vec<CurrencyCode>,
}

impl ReportRenderer {
    /// Create a new renderer for the given target currencies
    pub fn new(currencies: &[CurrencyCode]) -> Self {
        Self {
            currencies: currencies.to_vec(),
        }
    }

    /// Join daily rates and historical means into report rows
    ///
    /// Produces exactly one row per target currency in target order,
    /// regardless of which inputs carried data for it.
    pub fn build_rows(&self, daily: &DailyRates, means: &MeanRates) -> Vec<ReportRow> {
        let rows: Vec<ReportRow> = self
            .currencies
            .iter()
            .map(|currency| ReportRow {
                currency: currency.clone(),
                rate: daily.get(currency),
                mean: means.get(currency),
            })
            .collect();

        debug!("Built {} report rows", rows.len());
        rows
    }

    /// Render the report rows as a complete HTML document
    ///
    /// `period` is the known date span of the historical series, shown
    /// in the footer when available.
    pub fn render(&self, rows: &[ReportRow], period: Option<(NaiveDate, NaiveDate)>) -> String {
        let mut html = String::new();

        html.push_str(&format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            max-width: 800px;
            margin: 50px auto;
            padding: 20px;
            background-color: #f5f5f5;
        }}
        h1 {{
            color: #333;
            text-align: center;
            margin-bottom: 30px;
        }}
        table {{
            width: 100%;
            border-collapse: collapse;
            background-color: white;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
        }}
        th {{
            background-color: #4CAF50;
            color: white;
            padding: 12px;
            text-align: left;
            font-weight: bold;
        }}
        td {{
            padding: 10px 12px;
            border-bottom: 1px solid #ddd;
        }}
        tr:hover {{
            background-color: #f5f5f5;
        }}
        .footer {{
            text-align: center;
            margin-top: 20px;
            color: #666;
            font-size: 14px;
        }}
    </style>
</head>
<body>
    <h1>{title}</h1>
"#,
            title = REPORT_TITLE
        ));

        html.push_str(
            r#"    <table class="rate-table">
        <thead>
            <tr>
                <th>Currency Code</th>
                <th>Rate</th>
                <th>Mean Historical Rate</th>
            </tr>
        </thead>
        <tbody>
"#,
        );

        for row in rows {
            html.push_str(&format!(
                r#"            <tr>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
            </tr>
"#,
                row.currency,
                format_rate(row.rate),
                format_rate(row.mean)
            ));
        }

        html.push_str(
            r#"        </tbody>
    </table>
    <div class="footer">
        <p>Exchange rates relative to EUR | Source: European Central Bank</p>
"#,
        );

        if let Some((first, last)) = period {
            html.push_str(&format!(
                "        <p>Historical period: {} to {}</p>\n",
                first, last
            ));
        }

        html.push_str(
            r#"    </div>
</body>
</html>
"#,
        );

        info!("Rendered report with {} rows ({} bytes)", rows.len(), html.len());
        html
    }
}

/// Format a rate for display: fixed decimal places, placeholder when absent
fn format_rate(value: Option<f64>) -> String {
    match value {
        Some(rate) => format!("{:.*}", RATE_DECIMAL_PLACES, rate),
        None => REPORT_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod format_tests {
    use super::format_rate;

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(Some(1.1)), "1.1000");
        assert_eq!(format_rate(Some(11.5)), "11.5000");
        assert_eq!(format_rate(Some(0.857142857)), "0.8571");
        assert_eq!(format_rate(None), "N/A");
    }
}
