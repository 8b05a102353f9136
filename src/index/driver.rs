//! Indexing Pass
//!
//! The driver loop that feeds parsed records into a tantivy store.

use super::schema::{build_schema, IndexFields};
use crate::analyzers::AnalyzerKind;
use crate::corpus::list_corpus_files;
use crate::parser::extract::{parse_block, split_blocks};
use crate::parser::types::TrecRecord;
use std::fs;
use std::path::Path;
use tantivy::schema::Document;
use tantivy::{Index, IndexWriter};

/// Writer heap budget. The pass is single-threaded, so this is also the
/// total indexing memory.
const WRITER_HEAP_BYTES: usize = 50_000_000;

/// Runs one indexing pass over `data_dir` into a fresh store at `index_dir`.
///
/// Existing store contents are destroyed, never appended to. Files that fail
/// to read or index are logged and skipped. On success the store holds a
/// single committed segment; the number of submitted records is returned.
pub fn build_index(
    data_dir: &Path,
    index_dir: &Path,
    analyzer: AnalyzerKind,
) -> anyhow::Result<usize> {
    let files = list_corpus_files(data_dir)?;
    tracing::info!("Number of files to be processed: {}", files.len());

    if index_dir.exists() {
        fs::remove_dir_all(index_dir)?;
    }
    fs::create_dir_all(index_dir)?;

    let (schema, fields) = build_schema(analyzer.tokenizer_name());
    let index = Index::create_in_dir(index_dir, schema)?;
    analyzer.register_on(&index);

    let mut writer = index.writer_with_num_threads(1, WRITER_HEAP_BYTES)?;

    let mut submitted = 0;
    for (file_no, path) in files.iter().enumerate() {
        tracing::info!(
            "Indexing file {}/{}: {}",
            file_no + 1,
            files.len(),
            path.display()
        );

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("Skipping unreadable file {}: {}", path.display(), err);
                continue;
            }
        };

        match index_file_text(&writer, &fields, &text) {
            Ok(count) => submitted += count,
            Err(err) => {
                tracing::warn!("Skipping file {}: {}", path.display(), err);
            }
        }
    }

    writer.commit()?;
    force_merge(&index, &mut writer)?;
    writer.wait_merging_threads()?;

    Ok(submitted)
}

/// Splits one file's text into document blocks and submits a record per
/// block. Records with no extracted fields still count toward the total.
fn index_file_text(
    writer: &IndexWriter,
    fields: &IndexFields,
    text: &str,
) -> tantivy::Result<usize> {
    let blocks = split_blocks(text);
    for block in &blocks {
        let record = parse_block(block);
        writer.add_document(record_to_document(&record, fields))?;
    }
    Ok(blocks.len())
}

/// Maps a parsed record onto a tantivy document. Absent fields are left out
/// of the document entirely.
fn record_to_document(record: &TrecRecord, fields: &IndexFields) -> Document {
    let mut document = Document::default();
    if let Some(docno) = &record.docno {
        document.add_text(fields.docno, docno);
    }
    if let Some(head) = &record.head {
        document.add_text(fields.head, head);
    }
    if let Some(byline) = &record.byline {
        document.add_text(fields.byline, byline);
    }
    if let Some(dateline) = &record.dateline {
        document.add_text(fields.dateline, dateline);
    }
    if let Some(text) = &record.text {
        document.add_text(fields.text, text);
    }
    document
}

/// Compacts the committed store into a single physical segment.
fn force_merge(index: &Index, writer: &mut IndexWriter) -> tantivy::Result<()> {
    let segment_ids = index.searchable_segment_ids()?;
    if segment_ids.len() > 1 {
        writer.merge(&segment_ids).wait()?;
    }
    Ok(())
}
