//! Report aggregation and the pipeline entry point.

use chrono::Local;
use tracing::info;

use dirsnap_core::{MultiRootReport, Report, ScanConfig, ScanError, ScanReport};
use dirsnap_scan::collect_paths;

use crate::grouper::{Grouping, group_paths};

/// Current local time formatted as `YYYY-MM-DD HH:MM:SS`.
pub fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Wrap one root's grouping into a dated report.
pub fn build_report(grouping: Grouping) -> ScanReport {
    ScanReport {
        timestamp: current_timestamp(),
        total_files: grouping.total_files,
        groups: grouping.groups,
    }
}

/// Run the scan pipeline for every configured root.
///
/// Roots are processed in configuration order, each through a fresh
/// collect/group/wrap pass; no grouping or count state survives from one
/// root to the next. A traversal failure on any root aborts the whole
/// invocation. More than one root produces the multi-root shape.
pub fn run_scan(config: &ScanConfig) -> Result<Report, ScanError> {
    let mut reports = Vec::with_capacity(config.roots.len());
    for root in &config.roots {
        info!(root = %root.display(), "scanning");
        let paths = collect_paths(root, config)?;
        let report = build_report(group_paths(&paths));
        info!(root = %root.display(), files = report.total_files, groups = report.groups.len(), "scanned");
        reports.push(report);
    }

    if reports.len() == 1 {
        Ok(Report::Single(reports.remove(0)))
    } else {
        Ok(Report::Multi(MultiRootReport::new(reports)))
    }
}
