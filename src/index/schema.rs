//! Index Schema
//!
//! Builds the tantivy schema for one analyzer configuration. Field names are
//! taken from the parser's tag-marker table so the index and the parser can
//! never drift apart.

use crate::parser::markers;
use tantivy::schema::{
    Field, IndexRecordOption, Schema, TextFieldIndexing, TextOptions, STORED, STRING,
};

/// Resolved field handles for the five record fields. Returned alongside the
/// schema so callers never need fallible name lookups.
#[derive(Debug, Clone, Copy)]
pub struct IndexFields {
    pub docno: Field,
    pub head: Field,
    pub byline: Field,
    pub dateline: Field,
    pub text: Field,
}

/// Builds the record schema.
///
/// `DOCNO` is indexed raw (exact matching) and stored. The four free-text
/// fields are stored and tokenized with the pipeline registered under
/// `tokenizer_name`, with term frequencies and positions recorded so the
/// statistics reporter can count occurrences.
pub fn build_schema(tokenizer_name: &str) -> (Schema, IndexFields) {
    let mut builder = Schema::builder();

    let docno = builder.add_text_field(markers::DOCNO.field, STRING | STORED);

    let indexing = TextFieldIndexing::default()
        .set_tokenizer(tokenizer_name)
        .set_index_option(IndexRecordOption::WithFreqsAndPositions);
    let text_options = TextOptions::default()
        .set_indexing_options(indexing)
        .set_stored();

    let head = builder.add_text_field(markers::HEAD.field, text_options.clone());
    let byline = builder.add_text_field(markers::BYLINE.field, text_options.clone());
    let dateline = builder.add_text_field(markers::DATELINE.field, text_options.clone());
    let text = builder.add_text_field(markers::TEXT.field, text_options);

    let schema = builder.build();
    let fields = IndexFields {
        docno,
        head,
        byline,
        dateline,
        text,
    };

    (schema, fields)
}
