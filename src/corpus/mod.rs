//! Corpus Loader Module
//!
//! Handles the enumeration of corpus files on disk.
//!
//! ## Workflow
//! 1. **Scan**: List the entries of the source directory.
//! 2. **Filter**: Keep regular files whose name ends with the corpus
//!    extension, matched case-insensitively.
//! 3. **Order**: Sort the surviving paths so every indexing pass visits the
//!    corpus in a deterministic order.

pub mod scan;

pub use scan::{has_extension, list_corpus_files, list_files_matching, CORPUS_EXTENSION};

#[cfg(test)]
mod tests;
