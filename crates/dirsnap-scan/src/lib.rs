//! Directory traversal and content hashing for dirsnap.
//!
//! This crate provides the two leaf components of the pipeline:
//!
//! - [`collect_paths`] walks a root and returns the sorted, filtered list
//!   of regular-file paths.
//! - [`hash_file`] produces the content digest for one file.
//!
//! Traversal is deliberately single-threaded; the grouping stage depends
//! on the sorted order produced here.
//!
//! # Example
//!
//! ```rust,no_run
//! use dirsnap_core::ScanConfig;
//! use dirsnap_scan::{collect_paths, hash_file};
//!
//! let config = ScanConfig::new("/path/to/scan");
//! let paths = collect_paths(&config.roots[0], &config).unwrap();
//! for path in &paths {
//!     println!("{} {}", hash_file(path).unwrap_or_default(), path.display());
//! }
//! ```

mod collector;
mod hasher;

pub use collector::collect_paths;
pub use hasher::hash_file;

// Re-export core types for convenience
pub use dirsnap_core::{ScanConfig, ScanError};
