//! Corpus Module Tests
//!
//! Validates directory scanning and the extension filter.
//!
//! ## Test Scopes
//! - **Filter**: Case-insensitive extension matching on bare paths.
//! - **Scan**: Directory enumeration, ordering, and error reporting.

#[cfg(test)]
mod tests {
    use crate::corpus::{has_extension, list_corpus_files, list_files_matching};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    // ============================================================
    // FILTER TESTS - has_extension
    // ============================================================

    #[test]
    fn test_has_extension_exact_match() {
        assert!(has_extension(Path::new("ap890101.trectext"), ".trectext"));
    }

    #[test]
    fn test_has_extension_case_insensitive() {
        assert!(has_extension(Path::new("AP890101.TRECTEXT"), ".trectext"));
        assert!(has_extension(Path::new("ap890101.TrecText"), ".trectext"));
    }

    #[test]
    fn test_has_extension_rejects_other_extensions() {
        assert!(!has_extension(Path::new("notes.txt"), ".trectext"));
        assert!(!has_extension(Path::new("trectext.bak"), ".trectext"));
    }

    // ============================================================
    // SCAN TESTS - list_corpus_files
    // ============================================================

    #[test]
    fn test_list_corpus_files_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.trectext"), "beta").unwrap();
        fs::write(dir.path().join("a.TRECTEXT"), "alpha").unwrap();
        fs::write(dir.path().join("ignored.txt"), "nope").unwrap();
        fs::create_dir(dir.path().join("sub.trectext")).unwrap();

        let files = list_corpus_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();

        // Sorted by path; the directory and the .txt file are excluded.
        assert_eq!(names, vec!["a.TRECTEXT", "b.trectext"]);
    }

    #[test]
    fn test_list_corpus_files_empty_directory() {
        let dir = TempDir::new().unwrap();
        let files = list_corpus_files(dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_list_corpus_files_missing_directory_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        assert!(list_corpus_files(&missing).is_err());
    }

    #[test]
    fn test_list_files_matching_custom_predicate() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("keep.dat"), "x").unwrap();
        fs::write(dir.path().join("drop.log"), "y").unwrap();

        let files = list_files_matching(dir.path(), |p| has_extension(p, ".dat")).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.dat"));
    }
}
