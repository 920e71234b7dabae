//! Directory-level aggregation of captured logs into one dataset.
//!
//! Walks the training-data directory, runs every record through
//! parse → quality gate → level classification → band flattening, and
//! appends the survivors to a single [`Dataset`].

use std::path::Path;

use chrono::Utc;
use mindwave_core::error::{MindwaveError, Result};
use mindwave_core::flatten::flatten_bands;
use mindwave_core::gate::is_reliable;
use mindwave_core::levels::classify_level;
use mindwave_core::models::{
    int_field, Record, ATTENTION, ATTENTION_LEVEL, MEDITATION, MEDITATION_LEVEL,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::dataset::Dataset;
use crate::reader::{find_log_files, read_records};

// ── Public types ──────────────────────────────────────────────────────────────

/// Counters produced alongside the aggregated dataset.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RunSummary {
    /// ISO-8601 timestamp when this aggregation finished.
    pub generated_at: String,
    /// Number of log files processed.
    pub files_scanned: usize,
    /// Total records parsed across all files.
    pub records_read: usize,
    /// Records that passed the gate and flattened cleanly.
    pub records_accepted: usize,
    /// Records dropped by the gate or by a missing band.
    pub records_rejected: usize,
}

/// The complete output of [`aggregate_logs`].
#[derive(Debug, Clone)]
pub struct AggregateResult {
    pub dataset: Dataset,
    pub summary: RunSummary,
}

// ── Public function ───────────────────────────────────────────────────────────

/// Run the full aggregation pass over `data_path`.
///
/// Files are processed in sorted-path order, lines in file order.
/// Gate rejections are dropped silently (debug trace only). A record
/// whose `eeg` mapping is incomplete is rejected with a warning
/// rather than aborting the run. A malformed line aborts the whole
/// pass with the parse error.
///
/// A directory with zero matching files yields an empty dataset and
/// an accepted count of 0, not an error.
pub fn aggregate_logs(data_path: &Path, extension: &str) -> Result<AggregateResult> {
    let files = find_log_files(data_path, extension);
    if files.is_empty() {
        warn!(
            "No .{} log files found under {}",
            extension,
            data_path.display()
        );
    }

    let mut dataset = Dataset::new();
    let mut records_read = 0usize;
    let mut records_rejected = 0usize;

    for file_path in &files {
        let records = read_records(file_path)?;
        let file_total = records.len();
        records_read += file_total;

        for mut record in records {
            if !is_reliable(&record) {
                records_rejected += 1;
                continue;
            }

            match enrich(&mut record) {
                Ok(()) => dataset.push(record),
                Err(
                    err @ (MindwaveError::MissingEeg | MindwaveError::MissingBand(_)),
                ) => {
                    records_rejected += 1;
                    warn!("Rejected record in {}: {}", file_path.display(), err);
                }
                Err(err) => return Err(err),
            }
        }

        debug!(
            "File {}: {} read, {} accepted so far",
            file_path.display(),
            file_total,
            dataset.len()
        );
    }

    let summary = RunSummary {
        generated_at: Utc::now().to_rfc3339(),
        files_scanned: files.len(),
        records_read,
        records_accepted: dataset.len(),
        records_rejected,
    };

    info!(
        "Aggregated {} samples from {} files ({} rejected)",
        summary.records_accepted, summary.files_scanned, summary.records_rejected
    );

    Ok(AggregateResult { dataset, summary })
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Enrich one gated record in place: derive both level fields, then
/// flatten the band values.
fn enrich(record: &mut Record) -> Result<()> {
    apply_level(record, ATTENTION, ATTENTION_LEVEL);
    apply_level(record, MEDITATION, MEDITATION_LEVEL);
    flatten_bands(record)?;
    Ok(())
}

/// Derive the ordinal level for `source_key` and store it under
/// `level_key`.
///
/// An out-of-range value (which the gate should never let through)
/// logs a diagnostic and leaves the level field absent; the record is
/// not rejected.
fn apply_level(record: &mut Record, source_key: &str, level_key: &str) {
    let Some(value) = int_field(record, source_key) else {
        return;
    };
    match classify_level(value) {
        Some(level) => {
            record.insert(level_key.to_string(), Value::from(level));
        }
        None => warn!("{} value {} out of range, level omitted", source_key, value),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
