//! Parser Module Tests
//!
//! Validates the tag extraction and record assembly logic.
//!
//! ## Test Scopes
//! - **Extractor**: Ensures substrings between markers are found in order and
//!   unbalanced markers are tolerated.
//! - **Record Builder**: Verifies field-to-record mapping, multi-occurrence
//!   joining, and omission of absent fields.
//! - **Serialization**: Checks JSON compatibility of the record type.

#[cfg(test)]
mod tests {
    use crate::parser::extract::{extract_joined, parse_block, split_blocks, substrings_between};
    use crate::parser::markers;
    use crate::parser::types::TrecRecord;

    // ============================================================
    // EXTRACTOR TESTS - substrings_between
    // ============================================================

    #[test]
    fn test_substrings_between_single_occurrence() {
        let values = substrings_between("<HEAD>Breaking News</HEAD>", "<HEAD>", "</HEAD>");
        assert_eq!(values, vec!["Breaking News"]);
    }

    #[test]
    fn test_substrings_between_multiple_occurrences_in_order() {
        let text = "<P>first</P> filler <P>second</P><P>third</P>";
        let values = substrings_between(text, "<P>", "</P>");
        assert_eq!(values, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_substrings_between_no_start_marker() {
        let values = substrings_between("no tags at all", "<HEAD>", "</HEAD>");
        assert!(values.is_empty());
    }

    #[test]
    fn test_substrings_between_unbalanced_start_ignored() {
        // The trailing open tag has no close tag and must not error.
        let text = "<P>kept</P><P>dangling";
        let values = substrings_between(text, "<P>", "</P>");
        assert_eq!(values, vec!["kept"]);
    }

    #[test]
    fn test_substrings_between_end_without_start_ignored() {
        let values = substrings_between("orphan</P> <P>value</P>", "<P>", "</P>");
        assert_eq!(values, vec!["value"]);
    }

    #[test]
    fn test_substrings_between_nested_start_not_special() {
        // First end marker after a start marker closes it; a nested start
        // marker of the same kind is just content.
        let values = substrings_between("<P><P>inner</P></P>", "<P>", "</P>");
        assert_eq!(values, vec!["<P>inner"]);
    }

    #[test]
    fn test_substrings_between_empty_value() {
        let values = substrings_between("<P></P>", "<P>", "</P>");
        assert_eq!(values, vec![""]);
    }

    // ============================================================
    // EXTRACTOR TESTS - extract_joined
    // ============================================================

    #[test]
    fn test_extract_joined_single_value() {
        let joined = extract_joined("<TEXT>hello new world</TEXT>", &markers::TEXT);
        assert_eq!(joined.as_deref(), Some("hello new world"));
    }

    #[test]
    fn test_extract_joined_joins_with_single_space() {
        let block = "<TEXT>part one</TEXT> noise <TEXT>part two</TEXT>";
        let joined = extract_joined(block, &markers::TEXT);
        assert_eq!(joined.as_deref(), Some("part one part two"));
    }

    #[test]
    fn test_extract_joined_absent_field_is_none() {
        let joined = extract_joined("<TEXT>body only</TEXT>", &markers::HEAD);
        assert!(joined.is_none());
    }

    #[test]
    fn test_extract_joined_empty_value_is_none() {
        // An empty joined value is omitted, not stored as an empty string.
        let joined = extract_joined("<HEAD></HEAD>", &markers::HEAD);
        assert!(joined.is_none());
    }

    // ============================================================
    // BLOCK SPLITTING TESTS
    // ============================================================

    #[test]
    fn test_split_blocks_count_matches_doc_markers() {
        let text = "\
            <DOC><DOCNO>D1</DOCNO><TEXT>one</TEXT></DOC>\n\
            <DOC><DOCNO>D2</DOCNO><TEXT>two</TEXT></DOC>\n\
            <DOC><DOCNO>D3</DOCNO><TEXT>three</TEXT></DOC>";
        let blocks = split_blocks(text);
        assert_eq!(blocks.len(), text.matches("<DOC>").count());
        assert_eq!(blocks.len(), 3);
    }

    #[test]
    fn test_split_blocks_empty_file() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("plain text, no markers").is_empty());
    }

    #[test]
    fn test_split_blocks_ignores_text_outside_blocks() {
        let text = "preamble <DOC><TEXT>inside</TEXT></DOC> trailer";
        let blocks = split_blocks(text);
        assert_eq!(blocks, vec!["<TEXT>inside</TEXT>"]);
    }

    // ============================================================
    // RECORD BUILDER TESTS - parse_block
    // ============================================================

    #[test]
    fn test_parse_block_all_fields() {
        let block = "<DOCNO>AP890101-0001</DOCNO>\
                     <HEAD>Headline</HEAD>\
                     <BYLINE>By A. Reporter</BYLINE>\
                     <DATELINE>NEW YORK, Jan 1</DATELINE>\
                     <TEXT>Body of the article.</TEXT>";
        let record = parse_block(block);

        assert_eq!(record.docno.as_deref(), Some("AP890101-0001"));
        assert_eq!(record.head.as_deref(), Some("Headline"));
        assert_eq!(record.byline.as_deref(), Some("By A. Reporter"));
        assert_eq!(record.dateline.as_deref(), Some("NEW YORK, Jan 1"));
        assert_eq!(record.text.as_deref(), Some("Body of the article."));
    }

    #[test]
    fn test_parse_block_missing_fields_are_none() {
        let record = parse_block("<DOCNO>D1</DOCNO><TEXT>just a body</TEXT>");

        assert_eq!(record.docno.as_deref(), Some("D1"));
        assert!(record.head.is_none());
        assert!(record.byline.is_none());
        assert!(record.dateline.is_none());
    }

    #[test]
    fn test_parse_block_unmatched_head_tag_omitted() {
        // An unmatched <HEAD> in an otherwise well-formed block must not
        // raise an error and must omit the HEAD field.
        let record = parse_block("<DOCNO>D1</DOCNO><HEAD>never closed <TEXT>body</TEXT>");

        assert!(record.head.is_none());
        assert_eq!(record.docno.as_deref(), Some("D1"));
        assert_eq!(record.text.as_deref(), Some("body"));
    }

    #[test]
    fn test_parse_block_repeated_text_fields_joined() {
        let record = parse_block("<TEXT>first paragraph</TEXT><TEXT>second paragraph</TEXT>");
        assert_eq!(
            record.text.as_deref(),
            Some("first paragraph second paragraph")
        );
    }

    #[test]
    fn test_parse_block_empty_block_yields_empty_record() {
        let record = parse_block("   ");
        assert!(record.is_empty());
    }

    // ============================================================
    // TYPES TESTS - TrecRecord
    // ============================================================

    #[test]
    fn test_record_serialization_round_trip() {
        let record = TrecRecord {
            docno: Some("AP890101-0001".to_string()),
            head: Some("Headline".to_string()),
            byline: None,
            dateline: None,
            text: Some("Body text".to_string()),
        };

        let json = serde_json::to_string(&record).expect("Serialization failed");
        let restored: TrecRecord = serde_json::from_str(&json).expect("Deserialization failed");

        assert_eq!(restored, record);
    }

    #[test]
    fn test_record_is_empty() {
        assert!(TrecRecord::default().is_empty());

        let record = TrecRecord {
            text: Some("something".to_string()),
            ..TrecRecord::default()
        };
        assert!(!record.is_empty());
    }
}
