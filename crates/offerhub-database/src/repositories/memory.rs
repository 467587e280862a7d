//! In-memory job store for tests and local development.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use offerhub_core::error::AppError;
use offerhub_core::result::AppResult;
use offerhub_entity::job::filter::JobFilter;
use offerhub_entity::job::model::{Job, NewJob};
use offerhub_entity::job::report::BulkInsertReport;
use offerhub_entity::job::store::JobStore;

/// [`JobStore`] backed by a plain `Vec` behind a mutex.
///
/// Duplicate detection falls back to per-row existence checks, and search
/// filters through the entity predicates, so results agree with the SQL
/// adapter by construction. Intended for unit tests and offline
/// development; never wired into the server binary.
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> AppResult<std::sync::MutexGuard<'_, Vec<Job>>> {
        self.jobs
            .lock()
            .map_err(|_| AppError::internal("Job store lock poisoned"))
    }
}

fn materialize(job: &NewJob) -> Job {
    Job {
        id: job.id.clone(),
        title: job.title.clone(),
        company: job.company.clone(),
        location: job.location.clone(),
        url: job.url.clone(),
        source: job.source.clone(),
        posted_date: job.posted_date.clone(),
        description: job.description.clone(),
        scraped_at: job.scraped_at,
        created_at: Utc::now(),
        updated_at: None,
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn save(&self, job: &NewJob) -> AppResult<Job> {
        let mut jobs = self.guard()?;
        if jobs.iter().any(|j| j.id == job.id) {
            return Err(AppError::conflict(format!(
                "Job with ID '{}' already exists",
                job.id
            )));
        }
        if jobs.iter().any(|j| j.url == job.url) {
            return Err(AppError::conflict(format!(
                "Job URL '{}' already exists",
                job.url
            )));
        }
        let row = materialize(job);
        jobs.push(row.clone());
        Ok(row)
    }

    async fn save_many(&self, new_jobs: &[NewJob]) -> AppResult<BulkInsertReport> {
        let mut jobs = self.guard()?;
        let mut report = BulkInsertReport {
            total: new_jobs.len() as u64,
            ..BulkInsertReport::default()
        };

        // Staged so a url collision leaves the store untouched, like the
        // SQL adapter's aborted transaction. Only id conflicts are
        // dedup-counted; a url conflict on a fresh id is an error.
        let mut staged: Vec<Job> = Vec::new();
        for job in new_jobs {
            if jobs.iter().chain(staged.iter()).any(|j| j.id == job.id) {
                report.duplicates += 1;
                report.duplicate_ids.push(job.id.clone());
            } else if jobs.iter().chain(staged.iter()).any(|j| j.url == job.url) {
                return Err(AppError::database("Failed to save jobs"));
            } else {
                staged.push(materialize(job));
                report.inserted += 1;
            }
        }

        jobs.extend(staged);
        Ok(report)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Job>> {
        Ok(self.guard()?.iter().find(|j| j.id == id).cloned())
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(self.guard()?.iter().any(|j| j.id == id))
    }

    async fn search(&self, filter: &JobFilter) -> AppResult<Vec<Job>> {
        let term = filter.search.as_deref().unwrap_or("");
        let location = filter.location.as_deref().unwrap_or("");
        let company = filter.company.as_deref().unwrap_or("");
        let source = filter.source.as_deref().unwrap_or("");

        let mut matches: Vec<Job> = self
            .guard()?
            .iter()
            .filter(|j| j.matches_search_term(term))
            .filter(|j| j.matches_location(location))
            .filter(|j| j.matches_company(company))
            .filter(|j| source.is_empty() || j.source == source)
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(matches
            .into_iter()
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .collect())
    }

    async fn count_total(&self) -> AppResult<u64> {
        Ok(self.guard()?.len() as u64)
    }

    async fn count_distinct_companies(&self) -> AppResult<u64> {
        let companies: HashSet<String> =
            self.guard()?.iter().map(|j| j.company.clone()).collect();
        Ok(companies.len() as u64)
    }

    async fn count_distinct_locations(&self) -> AppResult<u64> {
        let locations: HashSet<String> =
            self.guard()?.iter().map(|j| j.location.clone()).collect();
        Ok(locations.len() as u64)
    }

    async fn count_by_source(&self) -> AppResult<HashMap<String, u64>> {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for job in self.guard()?.iter() {
            *counts.entry(job.source.clone()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut jobs = self.guard()?;
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        Ok(jobs.len() < before)
    }

    async fn update(&self, job: &NewJob) -> AppResult<Job> {
        let mut jobs = self.guard()?;
        let row = jobs
            .iter_mut()
            .find(|j| j.id == job.id)
            .ok_or_else(|| AppError::not_found(format!("Job with ID '{}' not found", job.id)))?;

        row.title = job.title.clone();
        row.company = job.company.clone();
        row.location = job.location.clone();
        row.url = job.url.clone();
        row.source = job.source.clone();
        row.posted_date = job.posted_date.clone();
        row.description = job.description.clone();
        row.scraped_at = job.scraped_at;
        row.updated_at = Some(Utc::now());

        Ok(row.clone())
    }
}
