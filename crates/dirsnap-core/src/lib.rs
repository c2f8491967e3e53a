//! Core types for dirsnap.
//!
//! This crate provides the fundamental data structures shared across
//! the dirsnap pipeline: report entities, scan configuration, and errors.

mod config;
mod error;
mod report;

pub use config::{BUILTIN_EXCLUDES, ScanConfig, ScanConfigBuilder};
pub use error::ScanError;
pub use report::{DirectoryGroup, FileEntry, MultiRootReport, Report, ScanReport};
