//! Request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use offerhub_entity::job::filter::{DEFAULT_LIMIT, JobFilter};
use offerhub_service::JobSubmission;

/// A scraped job record as the producer submits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
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
    /// Originating job board tag; defaults to "linkedin" when absent.
    pub source: Option<String>,
    /// ISO-8601 capture time.
    pub scraped_at: Option<DateTime<Utc>>,
}

impl From<JobRecord> for JobSubmission {
    fn from(record: JobRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            company: record.company,
            location: record.location,
            url: record.url,
            posted_date: record.posted_date,
            description: record.description,
            source: record.source,
            scraped_at: record.scraped_at,
        }
    }
}

/// Body of `POST /api/jobs/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitJobsRequest {
    /// The batch of scraped records.
    pub jobs: Vec<JobRecord>,
}

/// Body of `POST /api/jobs/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchJobsRequest {
    /// Free-text term matched against title, company, or description.
    pub search: Option<String>,
    /// Location substring filter.
    pub location: Option<String>,
    /// Company substring filter.
    pub company: Option<String>,
    /// Exact source filter.
    pub source: Option<String>,
    /// Maximum number of results.
    pub limit: Option<i64>,
    /// Number of results to skip.
    pub offset: Option<i64>,
}

impl SearchJobsRequest {
    /// Convert into a domain filter, applying the default window.
    pub fn into_filter(self) -> JobFilter {
        JobFilter {
            search: self.search,
            location: self.location,
            company: self.company,
            source: self.source,
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            offset: self.offset.unwrap_or(0),
        }
    }
}
