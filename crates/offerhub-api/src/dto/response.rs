//! Response DTOs.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use offerhub_entity::Job;
use offerhub_service::{CatalogStats, SubmitOutcome};

/// A job posting as returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    /// Producer-assigned identifier.
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
    /// Originating job board tag.
    pub source: String,
    /// When the producer captured the record.
    pub scraped_at: Option<DateTime<Utc>>,
    /// When the catalog persisted the record.
    pub created_at: DateTime<Utc>,
    /// When the record was last overwritten, if ever.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            location: job.location,
            url: job.url,
            posted_date: job.posted_date,
            description: job.description,
            source: job.source,
            scraped_at: job.scraped_at,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// Response of `POST /api/jobs/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitJobsResponse {
    /// Whether the submission was processed.
    pub success: bool,
    /// Number of newly inserted jobs.
    pub inserted: u64,
    /// Number of duplicate jobs skipped.
    pub duplicates: u64,
    /// Number of jobs in the submission.
    pub total: u64,
}

impl From<SubmitOutcome> for SubmitJobsResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        Self {
            success: outcome.success,
            inserted: outcome.inserted,
            duplicates: outcome.duplicates,
            total: outcome.total,
        }
    }
}

/// Response of `GET /api/jobs/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Total number of jobs.
    pub total_jobs: u64,
    /// Number of distinct companies.
    pub total_companies: u64,
    /// Number of distinct locations.
    pub total_locations: u64,
    /// Job counts grouped by source.
    pub jobs_by_source: HashMap<String, u64>,
}

impl From<CatalogStats> for StatsResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            total_jobs: stats.total_jobs,
            total_companies: stats.total_companies,
            total_locations: stats.total_locations,
            jobs_by_source: stats.jobs_by_source,
        }
    }
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the process is serving.
    pub status: String,
    /// Server version.
    pub version: String,
}
