//! Outcome of a bulk insert.

use serde::{Deserialize, Serialize};

/// Per-item accounting for a batch insert.
///
/// Ingestion batches come from repeated, possibly overlapping scrape runs;
/// a duplicate id is counted, never treated as fatal, so a batch always
/// makes forward progress. `inserted + duplicates == total` holds whenever
/// the batch commits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkInsertReport {
    /// Number of rows newly inserted.
    pub inserted: u64,
    /// Number of records skipped because their id already existed
    /// (in the catalog or earlier in the same batch).
    pub duplicates: u64,
    /// Ids of the skipped records, in batch order.
    pub duplicate_ids: Vec<String>,
    /// Reserved for per-row storage failures other than duplicate ids;
    /// no such failure is classified yet, so this is always 0.
    pub failed: u64,
    /// Number of records in the batch.
    pub total: u64,
}
