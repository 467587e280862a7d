//! Store contract for the job catalog.

use std::collections::HashMap;

use async_trait::async_trait;

use offerhub_core::result::AppResult;

use super::filter::JobFilter;
use super::model::{Job, NewJob};
use super::report::BulkInsertReport;

/// The single seam between the catalog operations and the persistence
/// engine.
///
/// There is one production implementation backed by PostgreSQL and an
/// in-memory one for tests; the operations never see engine vocabulary.
/// Every method may fail with a `Database`-kind error wrapping the
/// underlying cause.
#[async_trait]
pub trait JobStore: Send + Sync + 'static {
    /// Insert a single job. Fails with a `Conflict` error naming the id if
    /// it already exists; never silently overwrites.
    async fn save(&self, job: &NewJob) -> AppResult<Job>;

    /// Insert a batch with per-item duplicate detection.
    ///
    /// One duplicate never aborts the batch: all non-duplicate records are
    /// committed together and duplicates are counted in the report.
    async fn save_many(&self, jobs: &[NewJob]) -> AppResult<BulkInsertReport>;

    /// Look up a job by id. Absence is `None`, not an error.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Job>>;

    /// Check whether a job with the given id exists.
    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;

    /// Search the catalog. Filters are AND-combined; results are ordered
    /// newest-first and windowed by the filter's limit/offset.
    ///
    /// The result must be consistent with the [`Job`] matching predicates.
    async fn search(&self, filter: &JobFilter) -> AppResult<Vec<Job>>;

    /// Total number of jobs in the catalog.
    async fn count_total(&self) -> AppResult<u64>;

    /// Number of distinct companies.
    async fn count_distinct_companies(&self) -> AppResult<u64>;

    /// Number of distinct locations.
    async fn count_distinct_locations(&self) -> AppResult<u64>;

    /// Job counts grouped by source, one entry per source present.
    async fn count_by_source(&self) -> AppResult<HashMap<String, u64>>;

    /// Delete a job by id. Returns `false` (not an error) when absent.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;

    /// Overwrite all mutable fields of an existing job and set its
    /// `updated_at`. Fails with a `NotFound` error if the id is absent.
    /// `created_at` is never touched.
    async fn update(&self, job: &NewJob) -> AppResult<Job>;
}
