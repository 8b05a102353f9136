//! Statistics Reporter Module
//!
//! Read-only inspection of a completed store. Reports the corpus-level and
//! field-level aggregate counts the assignment compares across analyzer
//! configurations: document count, probe-term frequencies, vocabulary size,
//! token count, and postings count.
//!
//! All numbers come straight out of the tantivy segment data structures; the
//! store is never mutated and the reader handle is released when the
//! collection function returns, on every exit path.
//!
//! ## Submodules
//! - **`collect`**: Walks the term dictionary and postings of a store.
//! - **`types`**: The statistics report structure and its console printer.

pub mod collect;
pub mod types;

pub use collect::gather_stats;
pub use types::CorpusStats;
