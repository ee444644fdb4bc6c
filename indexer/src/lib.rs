use anyhow::{Context, Result};
use layerdex_core::persist::{load_index, load_records, write_index};
use layerdex_core::{build_index, IndexStats, IndexerConfig, Position};
use serde::Serialize;

/// Rebuild the index from the dataset and write it out, replacing any previous index.
pub fn run_build(config: &IndexerConfig) -> Result<IndexStats> {
    tracing::info!(input = %config.input_path.display(), "loading dataset");
    let records = load_records(&config.input_path).context("loading dataset")?;

    let (index, stats) = build_index(&records).context("building index")?;
    tracing::info!(records = stats.records, tokens = stats.tokens, postings = stats.postings, "indexed records");
    if stats.empty_records > 0 {
        tracing::debug!(empty_records = stats.empty_records, "records without indexable text");
    }

    tracing::info!(output = %config.output_path.display(), "writing index");
    write_index(&index, &config.output_path).context("writing index")?;

    tracing::info!(output = %config.output_path.display(), "search index updated");
    Ok(stats)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub records: usize,
    pub tokens_on_disk: usize,
    /// True when the index on disk is exactly what a rebuild would produce.
    pub up_to_date: bool,
    /// Postings on disk pointing past the last record.
    pub out_of_range: Vec<(String, Position)>,
}

impl CheckReport {
    pub fn is_stale(&self) -> bool { !self.up_to_date || !self.out_of_range.is_empty() }
}

/// Compare the index on disk with a fresh in-memory rebuild of the dataset.
pub fn run_check(config: &IndexerConfig) -> Result<CheckReport> {
    let records = load_records(&config.input_path).context("loading dataset")?;
    let on_disk = load_index(&config.output_path).context("loading index")?;
    let (rebuilt, _) = build_index(&records).context("building index")?;

    let out_of_range: Vec<(String, Position)> =
        on_disk.out_of_range(records.len()).into_iter().map(|(t, p)| (t.to_owned(), p)).collect();
    let report = CheckReport { records: records.len(), tokens_on_disk: on_disk.len(), up_to_date: on_disk == rebuilt, out_of_range };

    if report.is_stale() {
        tracing::warn!(
            index = %config.output_path.display(),
            out_of_range = report.out_of_range.len(),
            "index is stale, rebuild it"
        );
    } else {
        tracing::info!(index = %config.output_path.display(), tokens = report.tokens_on_disk, "index is up to date");
    }
    Ok(report)
}
