//! Catalog operations over the job store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use offerhub_core::error::AppError;
use offerhub_core::result::AppResult;
use offerhub_entity::job::filter::JobFilter;
use offerhub_entity::job::model::{DEFAULT_SOURCE, Job, NewJob};
use offerhub_entity::job::store::JobStore;

/// A raw job record as produced by the scraper, before validation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct JobSubmission {
    /// Producer-assigned unique identifier.
    pub id: String,
    /// Job title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Job location.
    pub location: String,
    /// Posting URL.
    pub url: String,
    /// Free-form posting date text.
    pub posted_date: Option<String>,
    /// Posting description.
    pub description: Option<String>,
    /// Originating job board tag; defaults to "linkedin" when absent.
    pub source: Option<String>,
    /// When the producer captured the record.
    pub scraped_at: Option<DateTime<Utc>>,
}

/// Result of a batch submission.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SubmitOutcome {
    /// Always true when the submission was processed.
    pub success: bool,
    /// Number of newly inserted jobs.
    pub inserted: u64,
    /// Number of duplicate jobs skipped.
    pub duplicates: u64,
    /// Number of jobs in the submission.
    pub total: u64,
}

impl SubmitOutcome {
    fn empty() -> Self {
        Self {
            success: true,
            inserted: 0,
            duplicates: 0,
            total: 0,
        }
    }
}

/// Aggregate catalog statistics.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CatalogStats {
    /// Total number of jobs.
    pub total_jobs: u64,
    /// Number of distinct companies.
    pub total_companies: u64,
    /// Number of distinct locations.
    pub total_locations: u64,
    /// Job counts grouped by source.
    pub jobs_by_source: HashMap<String, u64>,
}

/// Orchestrates the job store for the three catalog operations.
///
/// Each call is a request-scoped unit of work; the service holds no
/// mutable state and performs no retries.
#[derive(Clone)]
pub struct CatalogService {
    /// The persistence seam.
    store: Arc<dyn JobStore>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    /// Validates and persists a batch of scraped job records.
    ///
    /// An empty batch short-circuits without touching the store. Any record
    /// failing validation aborts the whole submission before persistence;
    /// duplicate ids within a valid batch are counted, not raised.
    pub async fn submit_jobs(&self, submissions: Vec<JobSubmission>) -> AppResult<SubmitOutcome> {
        if submissions.is_empty() {
            return Ok(SubmitOutcome::empty());
        }

        let mut jobs = Vec::with_capacity(submissions.len());
        for submission in submissions {
            let source = submission
                .source
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
            let job = NewJob::new(
                submission.id,
                submission.title,
                submission.company,
                submission.location,
                submission.url,
                source,
                submission.posted_date,
                submission.description,
                submission.scraped_at,
            )
            .map_err(|e| AppError::validation(format!("Invalid job data: {}", e.message)))?;
            jobs.push(job);
        }

        let report = self.store.save_many(&jobs).await?;

        info!(
            inserted = report.inserted,
            duplicates = report.duplicates,
            total = report.total,
            "Job submission processed"
        );

        Ok(SubmitOutcome {
            success: true,
            inserted: report.inserted,
            duplicates: report.duplicates,
            total: report.total,
        })
    }

    /// Searches the catalog.
    ///
    /// Pagination bounds are checked before the store is consulted; the
    /// store's result is returned unmodified.
    pub async fn search_jobs(&self, filter: &JobFilter) -> AppResult<Vec<Job>> {
        filter.validate()?;
        self.store.search(filter).await
    }

    /// Assembles catalog statistics from four independent aggregate queries.
    ///
    /// The queries may observe slightly different snapshots under
    /// concurrent writes; stats are informational, not authoritative.
    pub async fn stats(&self) -> AppResult<CatalogStats> {
        let (total_jobs, total_companies, total_locations, jobs_by_source) = tokio::try_join!(
            self.store.count_total(),
            self.store.count_distinct_companies(),
            self.store.count_distinct_locations(),
            self.store.count_by_source(),
        )?;

        Ok(CatalogStats {
            total_jobs,
            total_companies,
            total_locations,
            jobs_by_source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offerhub_core::error::ErrorKind;
    use offerhub_database::repositories::memory::InMemoryJobStore;

    fn service() -> (CatalogService, Arc<InMemoryJobStore>) {
        let store = Arc::new(InMemoryJobStore::new());
        (CatalogService::new(store.clone()), store)
    }

    fn submission(n: u32) -> JobSubmission {
        JobSubmission {
            id: n.to_string(),
            title: format!("Job Title {n}"),
            company: format!("Company {n}"),
            location: format!("Location {n}"),
            url: format!("https://example.com/jobs/{n}"),
            posted_date: Some("1 week ago".to_string()),
            description: None,
            source: None,
            scraped_at: None,
        }
    }

    #[tokio::test]
    async fn test_empty_submission_short_circuits() {
        let (service, store) = service();
        let outcome = service.submit_jobs(Vec::new()).await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.inserted, 0);
        assert_eq!(outcome.duplicates, 0);
        assert_eq!(outcome.total, 0);
        assert_eq!(store.count_total().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_submission_defaults_source_to_linkedin() {
        let (service, store) = service();
        service.submit_jobs(vec![submission(1)]).await.unwrap();
        let job = store.find_by_id("1").await.unwrap().unwrap();
        assert_eq!(job.source, "linkedin");
    }

    #[tokio::test]
    async fn test_invalid_record_aborts_whole_submission() {
        let (service, store) = service();
        let mut bad = submission(2);
        bad.title = "   ".to_string();

        let err = service
            .submit_jobs(vec![submission(1), bad])
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.starts_with("Invalid job data:"));

        // Fail-fast: nothing was persisted, not even the valid record.
        assert_eq!(store.count_total().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_submission_relays_dedup_counters() {
        let (service, _) = service();
        service
            .submit_jobs(vec![submission(1), submission(2)])
            .await
            .unwrap();

        let outcome = service
            .submit_jobs(vec![submission(1), submission(2), submission(3)])
            .await
            .unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.inserted, 1);
        assert_eq!(outcome.duplicates, 2);
        assert_eq!(outcome.total, 3);
    }

    #[tokio::test]
    async fn test_search_rejects_invalid_criteria_before_store() {
        let (service, _) = service();
        let filter = JobFilter {
            limit: 0,
            ..JobFilter::default()
        };
        let err = service.search_jobs(&filter).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCriteria);
    }

    #[tokio::test]
    async fn test_search_delegates_to_store() {
        let (service, _) = service();
        service
            .submit_jobs(vec![submission(1), submission(2)])
            .await
            .unwrap();

        let filter = JobFilter {
            search: Some("Job Title 2".to_string()),
            ..JobFilter::default()
        };
        let jobs = service.search_jobs(&filter).await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, "2");
    }

    #[tokio::test]
    async fn test_stats_assembly() {
        let (service, _) = service();
        let mut indeed = submission(3);
        indeed.source = Some("indeed".to_string());
        service
            .submit_jobs(vec![submission(1), submission(2), indeed])
            .await
            .unwrap();

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_jobs, 3);
        assert_eq!(stats.total_companies, 3);
        assert_eq!(stats.total_locations, 3);
        assert_eq!(stats.jobs_by_source.get("linkedin"), Some(&2));
        assert_eq!(stats.jobs_by_source.get("indeed"), Some(&1));
    }
}
