//! Statistics Data Types

use serde::{Deserialize, Serialize};

/// Aggregate counts gathered from a completed store for one field and one
/// probe term. The console printer and the tests consume the same values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Total number of documents in the store.
    pub num_docs: u64,
    /// Field the remaining counts were gathered for.
    pub field: String,
    /// Probe term the per-term counts were gathered for.
    pub probe_term: String,
    /// Number of documents containing the probe term in the field.
    pub probe_doc_freq: u64,
    /// Total number of occurrences of the probe term in the field.
    pub probe_total_term_freq: u64,
    /// Number of distinct terms in the field.
    pub vocabulary_size: u64,
    /// Number of documents with at least one term in the field.
    pub docs_with_field: u64,
    /// Total number of tokens in the field.
    pub total_tokens: u64,
    /// Total number of postings for the field (sum of per-term doc freqs).
    pub total_postings: u64,
}

impl CorpusStats {
    /// Prints the report in the banner format of the original assignment.
    pub fn log(&self) {
        tracing::info!("**************************************************************************");
        tracing::info!("Total number of documents in the Corpus: {}", self.num_docs);
        tracing::info!(
            "Number of documents containing the term \"{}\" for field \"{}\": {}",
            self.probe_term,
            self.field,
            self.probe_doc_freq
        );
        tracing::info!(
            "Number of occurrences of \"{}\" in the field \"{}\": {}",
            self.probe_term,
            self.field,
            self.probe_total_term_freq
        );
        tracing::info!(
            "Size of the vocabulary for this field: {}",
            self.vocabulary_size
        );
        tracing::info!(
            "Number of documents that have at least one term for this field: {}",
            self.docs_with_field
        );
        tracing::info!("Number of tokens for this field: {}", self.total_tokens);
        tracing::info!("Number of postings for this field: {}", self.total_postings);
        tracing::info!("**************************************************************************");
    }
}
