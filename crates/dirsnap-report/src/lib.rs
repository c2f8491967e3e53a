//! Directory grouping and report production for dirsnap.
//!
//! This crate turns the sorted path lists produced by `dirsnap-scan` into
//! the report entities of `dirsnap-core`:
//!
//! - **Grouping** - partition a sorted path list into per-directory groups
//! - **Aggregation** - stamp a root's grouping into a dated report, wrap
//!   multi-root runs
//! - **Writing** - serialize a report to stdout or a timestamped file
//!
//! # Example
//!
//! ```rust,no_run
//! use dirsnap_core::ScanConfig;
//! use dirsnap_report::run_scan;
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let report = run_scan(&config).unwrap();
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! ```

mod aggregate;
mod grouper;
mod writer;

pub use aggregate::{build_report, current_timestamp, run_scan};
pub use grouper::{Grouping, group_paths};
pub use writer::{print_report, report_filename, write_report};

// Re-export core types for convenience
pub use dirsnap_core::{
    DirectoryGroup, FileEntry, MultiRootReport, Report, ScanConfig, ScanError, ScanReport,
};
