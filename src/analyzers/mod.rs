//! Analyzer Configurations Module
//!
//! The four tokenization strategies compared by the assignment, each built
//! from tantivy tokenizer primitives to mirror one of the stock Lucene
//! analyzers:
//!
//! 1. **StandardAnalyzer**: word splitting, long-token removal, lowercasing.
//! 2. **SimpleAnalyzer**: word splitting and lowercasing only.
//! 3. **StopAnalyzer**: SimpleAnalyzer plus the classic English stop-word set.
//! 4. **KeywordAnalyzer**: the whole field value kept as a single token.
//!
//! Every configuration is applied uniformly to all free-text fields of an
//! indexing pass; the identifier field always uses the built-in raw tokenizer
//! regardless of configuration.

use tantivy::tokenizer::{
    LowerCaser, RawTokenizer, RemoveLongFilter, SimpleTokenizer, StopWordFilter, TextAnalyzer,
};
use tantivy::Index;


/// The classic Lucene English stop-word list used by StopAnalyzer.
const ENGLISH_STOP_WORDS: [&str; 33] = [
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

/// One analyzer configuration. The variant name doubles as the on-disk store
/// directory name (via [`AnalyzerKind::name`]) in comparison runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerKind {
    Standard,
    Simple,
    Stop,
    Keyword,
}

/// The fixed set of configurations exercised by the comparison binary,
/// in report order.
pub const ALL_ANALYZERS: [AnalyzerKind; 4] = [
    AnalyzerKind::Standard,
    AnalyzerKind::Simple,
    AnalyzerKind::Stop,
    AnalyzerKind::Keyword,
];

impl AnalyzerKind {
    /// Human-readable configuration name, matching the Lucene analyzer class
    /// it mirrors. Also used as the per-configuration store directory name.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyzerKind::Standard => "StandardAnalyzer",
            AnalyzerKind::Simple => "SimpleAnalyzer",
            AnalyzerKind::Stop => "StopAnalyzer",
            AnalyzerKind::Keyword => "KeywordAnalyzer",
        }
    }

    /// Name under which the tokenizer pipeline is registered on the index.
    /// The schema's free-text fields reference this name.
    pub fn tokenizer_name(&self) -> &'static str {
        match self {
            AnalyzerKind::Standard => "trec_standard",
            AnalyzerKind::Simple => "trec_simple",
            AnalyzerKind::Stop => "trec_stop",
            AnalyzerKind::Keyword => "trec_keyword",
        }
    }

    /// Builds the tokenizer pipeline for this configuration.
    pub fn text_analyzer(&self) -> TextAnalyzer {
        match self {
            AnalyzerKind::Standard => TextAnalyzer::from(SimpleTokenizer)
                .filter(RemoveLongFilter::limit(40))
                .filter(LowerCaser),
            AnalyzerKind::Simple => TextAnalyzer::from(SimpleTokenizer).filter(LowerCaser),
            AnalyzerKind::Stop => TextAnalyzer::from(SimpleTokenizer)
                .filter(LowerCaser)
                .filter(StopWordFilter::remove(
                    ENGLISH_STOP_WORDS.iter().map(|word| word.to_string()),
                )),
            AnalyzerKind::Keyword => TextAnalyzer::from(RawTokenizer),
        }
    }

    /// Registers the pipeline on an index under [`Self::tokenizer_name`].
    /// Must be called before opening a writer against a store whose schema
    /// references this configuration.
    pub fn register_on(&self, index: &Index) {
        index
            .tokenizers()
            .register(self.tokenizer_name(), self.text_analyzer());
    }
}

impl std::fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
