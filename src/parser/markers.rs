//! Tag-Marker Table
//!
//! Maps each recognized TREC field name to its literal start/end marker pair.
//! The table is passed explicitly to the extraction routines so the extractor
//! itself stays format-agnostic.

/// One entry of the tag-marker table: a field name and the literal marker
/// strings that delimit its values inside a document block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMarkers {
    pub field: &'static str,
    pub start: &'static str,
    pub end: &'static str,
}

/// Document boundary markers. These demarcate blocks and are never
/// re-extracted as a field.
pub const DOC: TagMarkers = TagMarkers {
    field: "DOC",
    start: "<DOC>",
    end: "</DOC>",
};

/// Unique document identifier, indexed untokenized for exact matching.
pub const DOCNO: TagMarkers = TagMarkers {
    field: "DOCNO",
    start: "<DOCNO>",
    end: "</DOCNO>",
};

/// Headline of the article.
pub const HEAD: TagMarkers = TagMarkers {
    field: "HEAD",
    start: "<HEAD>",
    end: "</HEAD>",
};

/// Author attribution line.
pub const BYLINE: TagMarkers = TagMarkers {
    field: "BYLINE",
    start: "<BYLINE>",
    end: "</BYLINE>",
};

/// Location and date line.
pub const DATELINE: TagMarkers = TagMarkers {
    field: "DATELINE",
    start: "<DATELINE>",
    end: "</DATELINE>",
};

/// Free-text body of the article.
pub const TEXT: TagMarkers = TagMarkers {
    field: "TEXT",
    start: "<TEXT>",
    end: "</TEXT>",
};

/// The five sub-field marker pairs recognized inside a document block,
/// in the order they are mapped onto a record.
pub const FIELD_MARKERS: [TagMarkers; 5] = [DOCNO, HEAD, BYLINE, DATELINE, TEXT];
