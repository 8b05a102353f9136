//! Directory Scanning
//!
//! Pure file enumeration helpers. The filter predicate is separate from the
//! directory walk so it can be tested in isolation.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension identifying eligible corpus files, matched
/// case-insensitively against the end of the file name.
pub const CORPUS_EXTENSION: &str = ".trectext";

/// Returns the regular files directly under `dir` accepted by `matches`,
/// sorted by path. Subdirectories are not descended into.
pub fn list_files_matching(
    dir: &Path,
    matches: impl Fn(&Path) -> bool,
) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("cannot read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && matches(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// True when the file name ends with `extension`, ignoring case.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_lowercase().ends_with(&extension.to_lowercase()))
        .unwrap_or(false)
}

/// Lists the eligible corpus files of a source directory.
pub fn list_corpus_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    list_files_matching(dir, |path| has_extension(path, CORPUS_EXTENSION))
}
