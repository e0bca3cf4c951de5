/// Recursive tree walker - discovers files and hands them off as tasks
///
/// Depth-first, pre-order: a subdirectory is fully descended into before
/// the sibling scan continues. Symlinks are followed whenever the platform
/// reports the target as a directory; a cyclic symlink structure therefore
/// does not terminate. That is accepted residual behavior, not defended
/// against.
use std::fs;
use std::path::Path;

use crate::error::WipeError;
use crate::report::Reporter;
use crate::wipe::FileTask;

/// Counters collected while walking
#[derive(Debug, Default)]
pub struct WalkStats {
    /// Files discovered and dispatched
    pub files: u64,
    /// Subtrees skipped because they could not be listed
    pub skipped_dirs: u64,
}

/// Walk the tree under `root`, calling `dispatch` once per discovered file
///
/// Directories that cannot be listed are reported through `reporter` and
/// skipped; the walk continues with their siblings. Sequence indices are
/// 1-based in discovery order.
pub fn walk_tree(
    root: &Path,
    reporter: &Reporter,
    dispatch: &mut dyn FnMut(FileTask),
) -> WalkStats {
    let mut stats = WalkStats::default();
    let mut next_index = 1u64;
    walk_dir(root, reporter, dispatch, &mut next_index, &mut stats);
    stats
}

fn walk_dir(
    dir: &Path,
    reporter: &Reporter,
    dispatch: &mut dyn FnMut(FileTask),
    next_index: &mut u64,
    stats: &mut WalkStats,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            stats.skipped_dirs += 1;
            reporter.skipped_dir(&WipeError::DirectoryAccess {
                path: dir.to_path_buf(),
                source,
            });
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                // Listing broke partway; report it and keep scanning
                reporter.skipped_dir(&WipeError::DirectoryAccess {
                    path: dir.to_path_buf(),
                    source,
                });
                continue;
            }
        };

        let path = entry.path();

        // fs::metadata follows symlinks, so a link to a directory is
        // traversed as one. A broken link falls through to the worker,
        // which reports it as an overwrite failure.
        let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);

        if is_dir {
            walk_dir(&path, reporter, dispatch, next_index, stats);
        } else {
            dispatch(FileTask {
                path,
                index: *next_index,
            });
            *next_index += 1;
            stats.files += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn silent_reporter() -> Reporter {
        Reporter::new(Box::new(io::sink()))
    }

    fn collect_tasks(root: &Path) -> (Vec<FileTask>, WalkStats) {
        let mut tasks = Vec::new();
        let stats = walk_tree(root, &silent_reporter(), &mut |task| tasks.push(task));
        (tasks, stats)
    }

    #[test]
    fn test_deep_tree_visits_every_file_once() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        // Depth 3 with mixed file/directory siblings
        fs::write(root.join("a.txt"), b"a").unwrap();
        fs::create_dir(root.join("sub1")).unwrap();
        fs::write(root.join("sub1/b.txt"), b"b").unwrap();
        fs::write(root.join("sub1/c.txt"), b"c").unwrap();
        fs::create_dir_all(root.join("sub1/deep/deeper")).unwrap();
        fs::write(root.join("sub1/deep/deeper/d.txt"), b"d").unwrap();
        fs::create_dir(root.join("sub2")).unwrap();
        fs::write(root.join("sub2/e.txt"), b"e").unwrap();
        fs::write(root.join("z.txt"), b"z").unwrap();

        let (tasks, stats) = collect_tasks(root);

        assert_eq!(stats.files, 6);
        assert_eq!(stats.skipped_dirs, 0);

        let paths: HashSet<PathBuf> = tasks.iter().map(|t| t.path.clone()).collect();
        assert_eq!(paths.len(), 6, "no file dispatched twice");
        assert!(paths.contains(&root.join("sub1/deep/deeper/d.txt")));

        // Indices are 1-based and dense
        let mut indices: Vec<u64> = tasks.iter().map(|t| t.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_empty_directory_dispatches_nothing() {
        let dir = tempdir().unwrap();
        let (tasks, stats) = collect_tasks(dir.path());
        assert!(tasks.is_empty());
        assert_eq!(stats.files, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subtree_skipped_siblings_survive() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let root = dir.path();

        fs::create_dir(root.join("forbidden")).unwrap();
        fs::write(root.join("forbidden/hidden.txt"), b"x").unwrap();
        fs::create_dir(root.join("open")).unwrap();
        fs::write(root.join("open/visible.txt"), b"y").unwrap();

        fs::set_permissions(root.join("forbidden"), fs::Permissions::from_mode(0o000)).unwrap();

        let (tasks, stats) = collect_tasks(root);

        // Restore so tempdir cleanup can remove the tree
        fs::set_permissions(root.join("forbidden"), fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(stats.skipped_dirs, 1);
        assert_eq!(stats.files, 1);
        assert_eq!(tasks[0].path, root.join("open/visible.txt"));
    }
}
