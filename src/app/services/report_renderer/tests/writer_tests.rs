//! Tests for report persistence

use super::super::writer::ReportWriter;
use crate::Error;
use tempfile::TempDir;

const SAMPLE_HTML: &str = "<!DOCTYPE html>\n<html><body>report</body></html>\n";

#[test]
fn test_write_report() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("exchange_rates.html");

    let size = ReportWriter::write(&output_path, SAMPLE_HTML).unwrap();

    assert_eq!(size, SAMPLE_HTML.len() as u64);
    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, SAMPLE_HTML);
}

#[test]
fn test_write_overwrites_existing_report() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("exchange_rates.html");

    std::fs::write(&output_path, "stale report").unwrap();
    ReportWriter::write(&output_path, SAMPLE_HTML).unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, SAMPLE_HTML);
}

#[test]
fn test_write_creates_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("reports").join("exchange_rates.html");

    ReportWriter::write(&output_path, SAMPLE_HTML).unwrap();
    assert!(output_path.exists());
}

#[test]
fn test_empty_report_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("exchange_rates.html");

    let result = ReportWriter::write(&output_path, "   \n");
    assert!(matches!(result, Err(Error::Validation { .. })));
    assert!(!output_path.exists());
}

#[test]
fn test_unwritable_path_is_io_error() {
    let temp_dir = TempDir::new().unwrap();

    // The "parent directory" is actually a file
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let output_path = blocker.join("exchange_rates.html");

    let result = ReportWriter::write(&output_path, SAMPLE_HTML);
    assert!(matches!(result, Err(Error::Io { .. })));
}
