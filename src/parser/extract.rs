//! Substring Extraction
//!
//! The core tag-extraction routines. Everything here operates on plain string
//! slices; no I/O and no knowledge of the indexing library.

use super::markers::{self, TagMarkers};
use super::types::TrecRecord;

/// Returns the ordered sequence of substrings found strictly between each
/// matching `start`/`end` marker occurrence, scanning left to right.
///
/// Matching is non-overlapping and non-nested: the first end marker after a
/// start marker closes it. A start marker with no following end marker is
/// silently ignored, so trailing unmatched tags never produce an error.
pub fn substrings_between<'a>(text: &'a str, start: &str, end: &str) -> Vec<&'a str> {
    let mut values = Vec::new();
    let mut cursor = 0;

    while let Some(open) = text[cursor..].find(start) {
        let value_start = cursor + open + start.len();
        match text[value_start..].find(end) {
            Some(close) => {
                values.push(&text[value_start..value_start + close]);
                cursor = value_start + close + end.len();
            }
            // Unbalanced start marker, nothing more to extract.
            None => break,
        }
    }

    values
}

/// Extracts every occurrence of a field within a block and joins the values
/// with single spaces, in encounter order.
///
/// Returns `None` when the field does not occur in the block or when the
/// joined value is empty, so absent fields are omitted from the record rather
/// than stored as empty strings.
pub fn extract_joined(block: &str, field_markers: &TagMarkers) -> Option<String> {
    let values = substrings_between(block, field_markers.start, field_markers.end);
    if values.is_empty() {
        return None;
    }
    let joined = values.join(" ");
    if joined.is_empty() {
        return None;
    }
    Some(joined)
}

/// Splits raw file text into its document blocks using the `<DOC>` boundary
/// markers. Blocks are independent; a file may contain any number of them.
pub fn split_blocks(file_text: &str) -> Vec<&str> {
    substrings_between(file_text, markers::DOC.start, markers::DOC.end)
}

/// Builds a record from one document block by applying the tag extractor for
/// each entry of the field-marker table.
pub fn parse_block(block: &str) -> TrecRecord {
    let mut record = TrecRecord::default();

    for field_markers in &markers::FIELD_MARKERS {
        let value = extract_joined(block, field_markers);
        match field_markers.field {
            "DOCNO" => record.docno = value,
            "HEAD" => record.head = value,
            "BYLINE" => record.byline = value,
            "DATELINE" => record.dateline = value,
            "TEXT" => record.text = value,
            other => unreachable!("unmapped field marker {other}"),
        }
    }

    record
}
