//! Report serialization and persistence.

use std::path::{Path, PathBuf};

use tracing::info;

use dirsnap_core::{Report, ScanError};

use crate::aggregate::current_timestamp;

/// Report file name for a capture timestamp.
///
/// Spaces become underscores and colons become periods, e.g.
/// `report_2024-01-05_14.30.02.json`.
pub fn report_filename(timestamp: &str) -> String {
    format!(
        "report_{}.json",
        timestamp.replace(' ', "_").replace(':', ".")
    )
}

/// Serialize a report 2-space indented.
fn to_pretty_json(report: &Report) -> Result<String, ScanError> {
    serde_json::to_string_pretty(report).map_err(|e| ScanError::other(e.to_string()))
}

/// Print a report to stdout.
pub fn print_report(report: &Report) -> Result<(), ScanError> {
    println!("{}", to_pretty_json(report)?);
    Ok(())
}

/// Write a report into `dir` under its timestamped file name.
///
/// A write failure propagates; the report is the tool's primary output,
/// so losing it must surface in the exit code.
pub fn write_report(report: &Report, dir: &Path) -> Result<PathBuf, ScanError> {
    let timestamp = report
        .timestamp()
        .map(str::to_string)
        .unwrap_or_else(current_timestamp);
    let path = dir.join(report_filename(&timestamp));

    let mut json = to_pretty_json(report)?;
    json.push('\n');
    std::fs::write(&path, json).map_err(|source| ScanError::ReportWrite {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "report written");
    Ok(path)
}
