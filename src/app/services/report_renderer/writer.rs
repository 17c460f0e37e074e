//! Report persistence
//!
//! Writes the fully rendered HTML document to disk, overwriting any
//! prior report. The document is rendered in full before this writer is
//! invoked, so a failed write never leaves a partially generated report
//! of a successful run behind.

use std::path::Path;
use tracing::info;

use crate::{Error, Result};

/// Writer for the rendered HTML report
#[derive(Debug)]
pub struct ReportWriter;

impl ReportWriter {
    /// Persist the rendered report, returning its size in bytes
    ///
    /// The parent directory is created when missing.
    pub fn write(output_path: &Path, html: &str) -> Result<u64> {
        if html.trim().is_empty() {
            return Err(Error::validation(
                "Refusing to write an empty report".to_string(),
            ));
        }

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::io(
                        format!("Failed to create output directory {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        std::fs::write(output_path, html).map_err(|e| {
            Error::io(
                format!("Failed to write report to {}", output_path.display()),
                e,
            )
        })?;

        let size = html.len() as u64;
        info!("Report saved to {} ({} bytes)", output_path.display(), size);
        Ok(size)
    }
}
