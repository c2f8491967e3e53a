//! Report entities produced by a scan.
//!
//! Field names are renamed on serialization to match the report format:
//! `{date, count, result: [{path, quantity, files: [{file, hash}]}]}` for
//! a single root, `{Directories: [...], Count}` for a multi-root run.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One scanned file: its name and content digest.
///
/// Created once per file and immutable afterwards. `digest` is the empty
/// string for files that could not be read (degraded entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// File name without its directory.
    #[serde(rename = "file")]
    pub name: CompactString,

    /// Lowercase hex content digest, or empty when the read failed.
    #[serde(rename = "hash")]
    pub digest: String,
}

impl FileEntry {
    /// Create a new file entry.
    pub fn new(name: impl Into<CompactString>, digest: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            digest: digest.into(),
        }
    }
}

/// All files sharing one immediate parent directory within a root's scan.
///
/// Invariant: `file_count == files.len()` for every sealed group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryGroup {
    /// The shared parent directory.
    pub path: String,

    /// Number of files in this group.
    #[serde(rename = "quantity")]
    pub file_count: usize,

    /// Entries in sorted path order.
    pub files: Vec<FileEntry>,
}

/// The scan result for a single root.
///
/// `total_files` counts every entry across this report's groups and is
/// never shared with or reset by another report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Capture time, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "date")]
    pub timestamp: String,

    /// Total number of file entries in this report.
    #[serde(rename = "count")]
    pub total_files: usize,

    /// Per-directory groups in scan order.
    #[serde(rename = "result")]
    pub groups: Vec<DirectoryGroup>,
}

/// Wrapper over the per-root reports of a multi-root invocation.
///
/// Each contained [`ScanReport`] is self-contained; nothing is merged or
/// deduplicated across roots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiRootReport {
    /// One report per root, in the order the roots were scanned.
    #[serde(rename = "Directories")]
    pub reports: Vec<ScanReport>,

    /// Number of roots processed.
    #[serde(rename = "Count")]
    pub root_count: usize,
}

impl MultiRootReport {
    /// Wrap per-root reports, recording the root count.
    pub fn new(reports: Vec<ScanReport>) -> Self {
        Self {
            root_count: reports.len(),
            reports,
        }
    }
}

/// Either output shape of a scan invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Report {
    /// Single-root invocation.
    Single(ScanReport),
    /// Multi-root invocation.
    Multi(MultiRootReport),
}

impl Report {
    /// The timestamp used for naming the report file.
    ///
    /// For multi-root runs this is the first root's capture time.
    pub fn timestamp(&self) -> Option<&str> {
        match self {
            Report::Single(report) => Some(&report.timestamp),
            Report::Multi(multi) => multi.reports.first().map(|r| r.timestamp.as_str()),
        }
    }
}
