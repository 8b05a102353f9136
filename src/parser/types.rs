//! Parser Data Types
//!
//! The parsed record structure produced from one document block. This is the
//! unit handed to the indexing driver; every field is optional because a block
//! may omit any of them.

use serde::{Deserialize, Serialize};

/// One TREC document, extracted from a single `<DOC>` block.
///
/// `docno` is the identifier field, indexed untokenized for exact matching.
/// The remaining fields are free text, tokenized with the analyzer of the
/// indexing pass. A `None` field was absent from the block (or yielded an
/// empty value) and is left out of the indexed document entirely.
///
/// No uniqueness is enforced on `docno`: duplicate identifiers simply create
/// distinct entries in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrecRecord {
    pub docno: Option<String>,
    pub head: Option<String>,
    pub byline: Option<String>,
    pub dateline: Option<String>,
    pub text: Option<String>,
}

impl TrecRecord {
    /// True when no field was extracted from the block. Such records are
    /// still submitted to the store and count toward the document total.
    pub fn is_empty(&self) -> bool {
        self.docno.is_none()
            && self.head.is_none()
            && self.byline.is_none()
            && self.dateline.is_none()
            && self.text.is_none()
    }
}
