//! Partitioning of a sorted path list into per-directory groups.

use std::path::{Path, PathBuf};

use tracing::warn;

use dirsnap_core::{DirectoryGroup, FileEntry};
use dirsnap_scan::hash_file;

/// One root's grouping result: sealed groups plus the root total.
#[derive(Debug, Clone, Default)]
pub struct Grouping {
    /// Per-directory groups in input order.
    pub groups: Vec<DirectoryGroup>,

    /// Number of file entries produced, independent of group boundaries.
    pub total_files: usize,
}

/// The group currently being filled, before its count is fixed.
struct OpenGroup {
    path: String,
    files: Vec<FileEntry>,
}

impl OpenGroup {
    fn new(path: String) -> Self {
        Self {
            path,
            files: Vec::new(),
        }
    }

    /// Fix the file count and convert into a sealed group.
    fn seal(self) -> DirectoryGroup {
        DirectoryGroup {
            path: self.path,
            file_count: self.files.len(),
            files: self.files,
        }
    }
}

/// Group a sorted path list into contiguous per-directory runs.
///
/// Precondition: `paths` is sorted ascending by full path, so files
/// sharing a parent directory are contiguous; calling this on an
/// unsorted list produces meaningless groups. Each call starts from an
/// empty accumulator, so results never carry state across roots.
///
/// Every path yields an entry. Files that cannot be read get the empty
/// digest and a warning rather than failing the scan.
pub fn group_paths(paths: &[PathBuf]) -> Grouping {
    let mut grouping = Grouping::default();
    let mut open: Option<OpenGroup> = None;

    for path in paths {
        let parent = parent_of(path);
        let entry = FileEntry::new(name_of(path), digest_or_empty(path));
        grouping.total_files += 1;

        match open {
            Some(ref mut group) if group.path == parent => group.files.push(entry),
            Some(group) => {
                grouping.groups.push(group.seal());
                let mut next = OpenGroup::new(parent);
                next.files.push(entry);
                open = Some(next);
            }
            None => {
                let mut first = OpenGroup::new(parent);
                first.files.push(entry);
                open = Some(first);
            }
        }
    }

    if let Some(group) = open {
        grouping.groups.push(group.seal());
    }

    grouping
}

fn parent_of(path: &Path) -> String {
    path.parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn digest_or_empty(path: &Path) -> String {
    match hash_file(path) {
        Ok(digest) => digest,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to hash file, recording empty digest");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        paths
    }

    #[test]
    fn test_groups_split_on_parent_change() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("a")).unwrap();
        fs::create_dir(root.join("b")).unwrap();
        fs::write(root.join("a/x.txt"), "hello").unwrap();
        fs::write(root.join("a/y.txt"), "hello").unwrap();
        fs::write(root.join("b/z.txt"), "world").unwrap();

        let paths = sorted(vec![
            root.join("a/x.txt"),
            root.join("a/y.txt"),
            root.join("b/z.txt"),
        ]);
        let grouping = group_paths(&paths);

        assert_eq!(grouping.total_files, 3);
        assert_eq!(grouping.groups.len(), 2);

        let a = &grouping.groups[0];
        assert_eq!(a.path, root.join("a").to_string_lossy());
        assert_eq!(a.file_count, 2);
        // Identical content digests identically.
        assert_eq!(a.files[0].digest, a.files[1].digest);

        let b = &grouping.groups[1];
        assert_eq!(b.path, root.join("b").to_string_lossy());
        assert_eq!(b.file_count, 1);
        assert_ne!(a.files[0].digest, b.files[0].digest);
    }

    #[test]
    fn test_single_group_is_sealed_at_end_of_input() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("only.txt"), "content").unwrap();

        let grouping = group_paths(&[root.join("only.txt")]);

        assert_eq!(grouping.groups.len(), 1);
        assert_eq!(grouping.groups[0].path, root.to_string_lossy());
        assert_eq!(grouping.groups[0].file_count, 1);
        assert_eq!(grouping.total_files, 1);
    }

    #[test]
    fn test_one_group_per_file_when_no_parents_shared() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        for dir in ["a", "b", "c"] {
            fs::create_dir(root.join(dir)).unwrap();
            fs::write(root.join(dir).join("f.txt"), dir).unwrap();
        }

        let paths = sorted(vec![
            root.join("a/f.txt"),
            root.join("b/f.txt"),
            root.join("c/f.txt"),
        ]);
        let grouping = group_paths(&paths);

        assert_eq!(grouping.groups.len(), 3);
        assert!(grouping.groups.iter().all(|g| g.file_count == 1));
        assert_eq!(grouping.total_files, 3);
    }

    #[test]
    fn test_concatenated_files_reproduce_input_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("a")).unwrap();
        fs::create_dir(root.join("a/c")).unwrap();
        fs::write(root.join("a/b.txt"), "1").unwrap();
        fs::write(root.join("a/c/d.txt"), "2").unwrap();
        fs::write(root.join("a/e.txt"), "3").unwrap();

        let paths = sorted(vec![
            root.join("a/b.txt"),
            root.join("a/c/d.txt"),
            root.join("a/e.txt"),
        ]);
        let grouping = group_paths(&paths);

        let names: Vec<&str> = grouping
            .groups
            .iter()
            .flat_map(|g| g.files.iter().map(|f| f.name.as_str()))
            .collect();
        assert_eq!(names, vec!["b.txt", "d.txt", "e.txt"]);

        // Interleaved subdirectory splits the parent into two runs.
        assert_eq!(grouping.groups.len(), 3);
        assert_eq!(grouping.groups[0].path, grouping.groups[2].path);
    }

    #[test]
    fn test_count_invariant_holds_for_all_groups() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("x")).unwrap();
        fs::write(root.join("x/1.txt"), "a").unwrap();
        fs::write(root.join("x/2.txt"), "b").unwrap();
        fs::write(root.join("top.txt"), "c").unwrap();

        let paths = sorted(vec![
            root.join("x/1.txt"),
            root.join("x/2.txt"),
            root.join("top.txt"),
        ]);
        let grouping = group_paths(&paths);

        for group in &grouping.groups {
            assert_eq!(group.file_count, group.files.len());
        }
        let summed: usize = grouping.groups.iter().map(|g| g.file_count).sum();
        assert_eq!(summed, grouping.total_files);
    }

    #[test]
    fn test_vanished_file_gets_empty_digest() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("present.txt"), "here").unwrap();

        // Enumerated but deleted before hashing.
        let paths = sorted(vec![root.join("gone.txt"), root.join("present.txt")]);
        let grouping = group_paths(&paths);

        assert_eq!(grouping.total_files, 2);
        let gone = grouping
            .groups
            .iter()
            .flat_map(|g| g.files.iter())
            .find(|f| f.name == "gone.txt")
            .unwrap();
        assert!(gone.digest.is_empty());
        let present = grouping
            .groups
            .iter()
            .flat_map(|g| g.files.iter())
            .find(|f| f.name == "present.txt")
            .unwrap();
        assert_eq!(present.digest.len(), 64);
    }

    #[test]
    fn test_empty_input_yields_empty_grouping() {
        let grouping = group_paths(&[]);
        assert!(grouping.groups.is_empty());
        assert_eq!(grouping.total_files, 0);
    }

    #[test]
    fn test_consecutive_calls_start_from_empty_state() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("first")).unwrap();
        fs::create_dir(root.join("second")).unwrap();
        fs::write(root.join("first/a.txt"), "a").unwrap();
        fs::write(root.join("second/b.txt"), "b").unwrap();
        fs::write(root.join("second/c.txt"), "c").unwrap();

        let first = group_paths(&[root.join("first/a.txt")]);
        let second = group_paths(&sorted(vec![
            root.join("second/b.txt"),
            root.join("second/c.txt"),
        ]));

        // The second grouping inherits nothing from the first.
        assert_eq!(first.total_files, 1);
        assert_eq!(second.total_files, 2);
        assert_eq!(second.groups.len(), 1);
        assert!(
            second
                .groups
                .iter()
                .all(|g| !g.path.ends_with("first"))
        );
    }
}
