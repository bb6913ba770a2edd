//! Shared filesystem helpers.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rustc_hash::FxHashSet;

use crate::constants::get_default_exclude_folders;

/// Collects the Python files under `root`.
///
/// Honors `.gitignore` files in addition to the default and configured
/// folder exclusions. Paths come back sorted so processing order, and with
/// it every tie-break downstream, is reproducible.
#[must_use]
pub fn collect_python_files(root: &Path, extra_excludes: &[String]) -> Vec<PathBuf> {
    let extra: FxHashSet<String> = extra_excludes.iter().cloned().collect();
    let walker = WalkBuilder::new(root)
        .follow_links(false)
        .filter_entry(move |entry| {
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                let name = entry.file_name().to_string_lossy();
                return !get_default_exclude_folders().contains(name.as_ref())
                    && !extra.contains(name.as_ref());
            }
            true
        })
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|path| path.extension().is_some_and(|ext| ext == "py"))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_python_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("pkg");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("main.py"), "x = 1\n").unwrap();
        std::fs::write(nested.join("util.py"), "y = 2\n").unwrap();
        std::fs::write(dir.path().join("README.md"), "docs\n").unwrap();

        let files = collect_python_files(dir.path(), &[]);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().is_some_and(|e| e == "py")));
    }

    #[test]
    fn default_excluded_folders_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("__pycache__");
        std::fs::create_dir_all(&cache).unwrap();
        std::fs::write(cache.join("cached.py"), "x = 1\n").unwrap();
        std::fs::write(dir.path().join("real.py"), "y = 2\n").unwrap();

        let files = collect_python_files(dir.path(), &[]);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.py"));
    }

    #[test]
    fn configured_excludes_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let vendored = dir.path().join("vendored");
        std::fs::create_dir_all(&vendored).unwrap();
        std::fs::write(vendored.join("third_party.py"), "x = 1\n").unwrap();
        std::fs::write(dir.path().join("ours.py"), "y = 2\n").unwrap();

        let files = collect_python_files(dir.path(), &["vendored".to_owned()]);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("ours.py"));
    }

    #[test]
    fn results_are_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("zeta.py"), "").unwrap();
        std::fs::write(dir.path().join("alpha.py"), "").unwrap();
        let files = collect_python_files(dir.path(), &[]);
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted);
    }
}
