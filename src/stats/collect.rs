//! Statistics Collection
//!
//! Gathers the aggregate counts of a completed store by walking its term
//! dictionaries and posting lists segment by segment. After a sealed pass the
//! store holds a single segment, so the per-segment sums are exact totals.

use super::types::CorpusStats;
use anyhow::anyhow;
use std::path::Path;
use tantivy::{DocSet, Index, Postings, Term, TERMINATED};

/// Opens the store at `index_dir` read-only and reports its statistics for
/// `field_name` and `probe_term`. The store is not mutated; all handles are
/// dropped before returning.
pub fn gather_stats(
    index_dir: &Path,
    field_name: &str,
    probe_term: &str,
) -> anyhow::Result<CorpusStats> {
    let index = Index::open_in_dir(index_dir)?;
    let reader = index.reader()?;
    let searcher = reader.searcher();

    let field = index
        .schema()
        .get_field(field_name)
        .ok_or_else(|| anyhow!("field {field_name} is not part of the store schema"))?;
    let term = Term::from_field_text(field, probe_term);

    let probe_doc_freq = searcher.doc_freq(&term)?;
    let mut probe_total_term_freq = 0u64;
    let mut vocabulary_size = 0u64;
    let mut docs_with_field = 0u64;
    let mut total_tokens = 0u64;
    let mut total_postings = 0u64;

    for segment_reader in searcher.segment_readers() {
        let inverted_index = segment_reader.inverted_index(field)?;

        // Occurrences of the probe term in this segment.
        if let Some(mut postings) =
            inverted_index.read_postings(&term, tantivy::schema::IndexRecordOption::WithFreqs)?
        {
            let mut doc_id = postings.doc();
            while doc_id != TERMINATED {
                probe_total_term_freq += u64::from(postings.term_freq());
                doc_id = postings.advance();
            }
        }

        // One pass over the term dictionary yields the vocabulary size, the
        // postings count, the token count, and the set of documents with at
        // least one term in the field.
        let term_dict = inverted_index.terms();
        vocabulary_size += term_dict.num_terms() as u64;

        let mut seen = vec![false; segment_reader.max_doc() as usize];
        let mut stream = term_dict.stream()?;
        while stream.advance() {
            let term_info = stream.value();
            total_postings += u64::from(term_info.doc_freq);

            let mut postings = inverted_index.read_postings_from_terminfo(
                term_info,
                tantivy::schema::IndexRecordOption::WithFreqs,
            )?;
            let mut doc_id = postings.doc();
            while doc_id != TERMINATED {
                total_tokens += u64::from(postings.term_freq());
                seen[doc_id as usize] = true;
                doc_id = postings.advance();
            }
        }
        docs_with_field += seen.iter().filter(|marked| **marked).count() as u64;
    }

    Ok(CorpusStats {
        num_docs: searcher.num_docs(),
        field: field_name.to_string(),
        probe_term: probe_term.to_string(),
        probe_doc_freq,
        probe_total_term_freq,
        vocabulary_size,
        docs_with_field,
        total_tokens,
        total_postings,
    })
}
