//! Analyzer comparison run.
//!
//! Indexes the same TREC corpus once per analyzer configuration
//! (StandardAnalyzer, SimpleAnalyzer, StopAnalyzer, KeywordAnalyzer), each
//! into its own subdirectory of the destination root, and reports the corpus
//! statistics after every pass so the configurations can be compared.
//!
//! Usage: `index-comparison <corpus-dir> <index-root-dir>`

use std::path::PathBuf;
use std::time::Instant;
use trec_indexer::analyzers::ALL_ANALYZERS;
use trec_indexer::index::build_index;
use trec_indexer::stats::gather_stats;

/// Field and probe term the statistics reports are gathered for.
const STATS_FIELD: &str = "TEXT";
const PROBE_TERM: &str = "new";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 3 {
        eprintln!("Usage: {} <corpus-dir> <index-root-dir>", args[0]);
        std::process::exit(1);
    }

    let corpus_dir = PathBuf::from(&args[1]);
    let index_root = PathBuf::from(&args[2]);

    let started = Instant::now();

    // A failing configuration is logged and the run continues with the next
    // one; there is no retry and no cleanup of a half-written store.
    for analyzer in ALL_ANALYZERS {
        tracing::info!("------------------------------------");
        tracing::info!("Analyzer Type: {}", analyzer);
        tracing::info!("------------------------------------");

        let index_dir = index_root.join(analyzer.name());

        if let Err(err) = build_index(&corpus_dir, &index_dir, analyzer) {
            tracing::error!("Indexing pass for {} failed: {err:#}", analyzer);
        }

        match gather_stats(&index_dir, STATS_FIELD, PROBE_TERM) {
            Ok(stats) => stats.log(),
            Err(err) => {
                tracing::error!("Failed to gather statistics for {}: {err:#}", analyzer);
            }
        }
    }

    tracing::info!("Time taken: {:.2?}", started.elapsed());
    Ok(())
}
