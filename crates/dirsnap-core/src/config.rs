//! Scan configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Substrings always excluded from a scan, regardless of user configuration.
///
/// A path containing any of these anywhere is dropped. User-supplied
/// exclusions are merged with this set, never replacing it.
pub const BUILTIN_EXCLUDES: &[&str] = &[
    ".DS_Store",
    ".git",
    ".gitignore",
    ".idea",
    ".vscode",
    "##Attributes.ini",
    ".log",
];

/// Configuration for a scan invocation.
///
/// This is the explicit parameter bundle handed to the pipeline entry
/// point; the pipeline reads no ambient process state.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Root directories to scan, in invocation order.
    pub roots: Vec<PathBuf>,

    /// User-supplied exclusion substrings, merged with [`BUILTIN_EXCLUDES`].
    #[builder(default)]
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Print the report to stdout instead of writing a report file.
    #[builder(default = "false")]
    #[serde(default)]
    pub stdout: bool,
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.roots {
            Some(ref roots) if roots.is_empty() => Err("At least one root is required".to_string()),
            Some(_) => Ok(()),
            None => Err("At least one root is required".to_string()),
        }
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a simple config for scanning a single root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            roots: vec![root.into()],
            exclude: Vec::new(),
            stdout: false,
        }
    }

    /// Check if a path should be excluded.
    ///
    /// Substring containment against the full path, not glob or exact
    /// match; built-in and user exclusions apply as a union.
    pub fn is_excluded(&self, path: &str) -> bool {
        BUILTIN_EXCLUDES
            .iter()
            .copied()
            .chain(self.exclude.iter().map(String::as_str))
            .any(|pattern| path.contains(pattern))
    }
}
