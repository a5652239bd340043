//! File discovery (pure, no side effects).

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

/// Collect files under `dir` whose extension is in `extensions`, recursively.
///
/// Returns absolute paths, sorted. A missing `dir` yields nothing.
pub fn collect_files(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| has_extension(path, extensions))
        .collect();
    files.sort();
    files
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.contains(&ext))
}
