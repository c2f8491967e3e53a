//! Serial directory walker with exclusion filtering.

use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};
use tracing::debug;

use dirsnap_core::{ScanConfig, ScanError};

/// Collect the sorted list of regular-file paths under `root`.
///
/// Paths containing any configured or built-in excluded substring are
/// dropped; directories are never emitted. The result is sorted by the
/// full path, ascending byte order, which the grouping stage relies on
/// for same-directory files being contiguous.
///
/// A missing root, a root that is not a directory, or an unreadable
/// subdirectory fails the whole collection; partial traversals are not
/// usable for grouping.
pub fn collect_paths(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>, ScanError> {
    let metadata = std::fs::metadata(root).map_err(|e| ScanError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    debug!(root = %root.display(), "collecting paths");

    let walker = WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .follow_links(false);

    let mut paths = Vec::new();
    for entry_result in walker {
        let entry = entry_result.map_err(|err| {
            let path = err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            match err.into_io_error() {
                Some(io_err) => ScanError::io(path, io_err),
                None => ScanError::other(format!("Traversal failed under {}", path.display())),
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if config.is_excluded(&path.to_string_lossy()) {
            continue;
        }
        paths.push(path);
    }

    // Byte order over the whole path string, not component order.
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    debug!(root = %root.display(), count = paths.len(), "collection complete");
    Ok(paths)
}
