//! TREC Corpus Indexer Library
//!
//! This library crate defines the modules that make up the indexing pipeline.
//! It serves as the foundation for the two binary executables (`indexer` and
//! `index-comparison`).
//!
//! ## Architecture Modules
//! The system is composed of five small, loosely coupled subsystems:
//!
//! - **`corpus`**: The file intake layer. Enumerates eligible corpus files in a
//!   source directory using a case-insensitive extension filter.
//! - **`parser`**: The TREC tag parser. Splits raw file text into document
//!   blocks and extracts the bracket-delimited sub-fields of each block.
//! - **`analyzers`**: The tokenizer configurations compared by the assignment,
//!   each mirroring one of the stock Lucene analyzers.
//! - **`index`**: The indexing driver. Builds the tantivy schema, creates a
//!   fresh store per configuration, submits records and seals the store.
//! - **`stats`**: The statistics reporter. Opens a completed store read-only
//!   and gathers corpus-level and field-level aggregate counts.

pub mod analyzers;
pub mod corpus;
pub mod index;
pub mod parser;
pub mod stats;
