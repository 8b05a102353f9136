//! TREC Tag Parser Module
//!
//! Parses the tag-delimited TREC newswire format into field-tagged records.
//!
//! ## Format
//! A corpus file holds zero or more document blocks delimited by literal
//! `<DOC>` / `</DOC>` markers. Each block may contain zero or more of five
//! sub-fields (`DOCNO`, `HEAD`, `BYLINE`, `DATELINE`, `TEXT`), each delimited
//! by its own start/end marker pair. Markers are plain string literals, not
//! XML: nesting is not interpreted and an unmatched start marker is silently
//! ignored rather than treated as malformed input.
//!
//! ## Submodules
//! - **`markers`**: The static tag-marker table (field name to start/end pair).
//! - **`extract`**: The substring extraction routines and block splitting.
//! - **`types`**: The parsed record structure submitted to the index.

pub mod extract;
pub mod markers;
pub mod types;

#[cfg(test)]
mod tests;
