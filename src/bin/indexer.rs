//! Single-analyzer indexing run.
//!
//! Indexes a TREC corpus with the StandardAnalyzer configuration, writing the
//! store directly at the destination root, then reports the corpus
//! statistics.
//!
//! Usage: `indexer <corpus-dir> <index-dir>`

use std::path::PathBuf;
use std::time::Instant;
use trec_indexer::analyzers::AnalyzerKind;
use trec_indexer::index::build_index;
use trec_indexer::stats::gather_stats;

/// Field and probe term the statistics report is gathered for.
const STATS_FIELD: &str = "TEXT";
const PROBE_TERM: &str = "new";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <corpus-dir> <index-dir>", args[0]);
        std::process::exit(1);
    }

    let corpus_dir = PathBuf::from(&args[1]);
    let index_dir = PathBuf::from(&args[2]);

    let started = Instant::now();
    let analyzer = AnalyzerKind::Standard;
    tracing::info!("Analyzer Type: {}", analyzer);

    if let Err(err) = build_index(&corpus_dir, &index_dir, analyzer) {
        tracing::error!("Indexing pass failed: {err:#}");
    }

    match gather_stats(&index_dir, STATS_FIELD, PROBE_TERM) {
        Ok(stats) => stats.log(),
        Err(err) => tracing::error!("Failed to gather statistics: {err:#}"),
    }

    tracing::info!("Time taken: {:.2?}", started.elapsed());
    Ok(())
}
