//! Job entity model and validation rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use offerhub_core::error::AppError;
use offerhub_core::result::AppResult;

/// Maximum length of the producer-assigned job identifier.
pub const MAX_ID_LEN: usize = 50;
/// Maximum length of the job title.
pub const MAX_TITLE_LEN: usize = 255;
/// Maximum length of the company name.
pub const MAX_COMPANY_LEN: usize = 255;
/// Maximum length of the location.
pub const MAX_LOCATION_LEN: usize = 255;
/// Maximum length of the posting URL.
pub const MAX_URL_LEN: usize = 500;
/// Maximum length of the source tag.
pub const MAX_SOURCE_LEN: usize = 50;

/// Source tag recorded when the producer does not supply one.
pub const DEFAULT_SOURCE: &str = "linkedin";

/// A persisted job posting.
///
/// The `id` is assigned by the producer (the scraper), not generated here.
/// `created_at` and `updated_at` are owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Producer-assigned unique identifier.
    pub id: String,
    /// Job title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Job location.
    pub location: String,
    /// Posting URL, unique across the catalog.
    pub url: String,
    /// Originating job board tag (e.g. "linkedin").
    pub source: String,
    /// Free-form posting date text as scraped (e.g. "2 weeks ago").
    pub posted_date: Option<String>,
    /// Posting description.
    pub description: Option<String>,
    /// When the producer captured the record.
    pub scraped_at: Option<DateTime<Utc>>,
    /// When this system persisted the record.
    pub created_at: DateTime<Utc>,
    /// When the record was last overwritten, if ever.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Check whether this job originated from the given source
    /// (case-insensitive equality).
    pub fn is_from_source(&self, name: &str) -> bool {
        self.source.to_lowercase() == name.to_lowercase()
    }

    /// Check whether this job matches a free-text search term.
    ///
    /// Matches case-insensitively against title, company, or description;
    /// a missing description never matches. An empty term matches every job.
    pub fn matches_search_term(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.company.to_lowercase().contains(&term)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }

    /// Check whether this job's location contains the given term
    /// (case-insensitive). An empty term matches every job.
    pub fn matches_location(&self, term: &str) -> bool {
        term.is_empty() || self.location.to_lowercase().contains(&term.to_lowercase())
    }

    /// Check whether this job's company contains the given term
    /// (case-insensitive). An empty term matches every job.
    pub fn matches_company(&self, term: &str) -> bool {
        term.is_empty() || self.company.to_lowercase().contains(&term.to_lowercase())
    }
}

/// A validated job record that has not been persisted yet.
///
/// [`NewJob::new`] is the only way to obtain one, so every instance that
/// reaches a store already satisfies the field invariants. The store
/// assigns `created_at`/`updated_at` on insert and update respectively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJob {
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
    /// Originating job board tag.
    pub source: String,
    /// Free-form posting date text.
    pub posted_date: Option<String>,
    /// Posting description.
    pub description: Option<String>,
    /// When the producer captured the record.
    pub scraped_at: Option<DateTime<Utc>>,
}

impl NewJob {
    /// Build a validated job record.
    ///
    /// Fails with a validation error naming the offending field when any of
    /// id/title/company/location/url/source is blank or exceeds its maximum
    /// length. A field exactly at its maximum is valid.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        url: impl Into<String>,
        source: impl Into<String>,
        posted_date: Option<String>,
        description: Option<String>,
        scraped_at: Option<DateTime<Utc>>,
    ) -> AppResult<Self> {
        let id = id.into();
        let title = title.into();
        let company = company.into();
        let location = location.into();
        let url = url.into();
        let source = source.into();

        require_non_blank("ID", &id)?;
        require_non_blank("title", &title)?;
        require_non_blank("company", &company)?;
        require_non_blank("location", &location)?;
        require_non_blank("URL", &url)?;
        require_non_blank("source", &source)?;

        require_max_len("ID", &id, MAX_ID_LEN)?;
        require_max_len("title", &title, MAX_TITLE_LEN)?;
        require_max_len("company", &company, MAX_COMPANY_LEN)?;
        require_max_len("location", &location, MAX_LOCATION_LEN)?;
        require_max_len("URL", &url, MAX_URL_LEN)?;
        require_max_len("source", &source, MAX_SOURCE_LEN)?;

        Ok(Self {
            id,
            title,
            company,
            location,
            url,
            source,
            posted_date,
            description,
            scraped_at,
        })
    }
}

fn require_non_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("Job {field} cannot be empty")));
    }
    Ok(())
}

fn require_max_len(field: &str, value: &str, max: usize) -> AppResult<()> {
    if value.chars().count() > max {
        return Err(AppError::validation(format!(
            "Job {field} cannot exceed {max} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use offerhub_core::error::ErrorKind;

    fn valid_new_job() -> AppResult<NewJob> {
        NewJob::new(
            "job-1",
            "Rust Engineer",
            "Acme",
            "Paris, France",
            "https://example.com/jobs/1",
            "linkedin",
            Some("2 weeks ago".to_string()),
            Some("Build backend services".to_string()),
            None,
        )
    }

    fn sample_job() -> Job {
        Job {
            id: "job-1".to_string(),
            title: "Rust Engineer".to_string(),
            company: "Acme".to_string(),
            location: "Paris, France".to_string(),
            url: "https://example.com/jobs/1".to_string(),
            source: "linkedin".to_string(),
            posted_date: None,
            description: Some("Build backend services in Rust".to_string()),
            scraped_at: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_valid_job_construction() {
        let job = valid_new_job().unwrap();
        assert_eq!(job.id, "job-1");
        assert_eq!(job.source, "linkedin");
    }

    #[test]
    fn test_blank_fields_rejected() {
        let cases = [
            ("", "Title", "Co", "Loc", "https://x", "linkedin"),
            ("id", "", "Co", "Loc", "https://x", "linkedin"),
            ("id", "Title", "", "Loc", "https://x", "linkedin"),
            ("id", "Title", "Co", "", "https://x", "linkedin"),
            ("id", "Title", "Co", "Loc", "", "linkedin"),
            ("id", "Title", "Co", "Loc", "https://x", ""),
        ];
        for (id, title, company, location, url, source) in cases {
            let err = NewJob::new(id, title, company, location, url, source, None, None, None)
                .unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
            assert!(err.message.contains("cannot be empty"), "{}", err.message);
        }
    }

    #[test]
    fn test_whitespace_only_fields_rejected() {
        let err = NewJob::new("   ", "Title", "Co", "Loc", "https://x", "linkedin", None, None, None)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("ID"));
    }

    #[test]
    fn test_length_boundaries() {
        // Exactly at the maximum is valid.
        let job = NewJob::new(
            "a".repeat(MAX_ID_LEN),
            "t".repeat(MAX_TITLE_LEN),
            "c".repeat(MAX_COMPANY_LEN),
            "l".repeat(MAX_LOCATION_LEN),
            "u".repeat(MAX_URL_LEN),
            "s".repeat(MAX_SOURCE_LEN),
            None,
            None,
            None,
        );
        assert!(job.is_ok());

        // One character over fails, naming the field.
        let err = NewJob::new(
            "a".repeat(MAX_ID_LEN + 1),
            "Title",
            "Co",
            "Loc",
            "https://x",
            "linkedin",
            None,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("50 characters"));

        let err = NewJob::new(
            "id",
            "Title",
            "Co",
            "Loc",
            "u".repeat(MAX_URL_LEN + 1),
            "linkedin",
            None,
            None,
            None,
        )
        .unwrap_err();
        assert!(err.message.contains("500 characters"));
    }

    #[test]
    fn test_is_from_source_case_insensitive() {
        let job = sample_job();
        assert!(job.is_from_source("LinkedIn"));
        assert!(job.is_from_source("LINKEDIN"));
        assert!(!job.is_from_source("indeed"));
    }

    #[test]
    fn test_is_from_source_folds_non_ascii() {
        let mut job = sample_job();
        job.source = "börse".to_string();
        assert!(job.is_from_source("BÖRSE"));
    }

    #[test]
    fn test_matches_search_term() {
        let job = sample_job();
        assert!(job.matches_search_term("rust"));
        assert!(job.matches_search_term("ACME"));
        assert!(job.matches_search_term("backend"));
        assert!(job.matches_search_term(""));
        assert!(!job.matches_search_term("python"));
    }

    #[test]
    fn test_missing_description_never_matches() {
        let mut job = sample_job();
        job.description = None;
        assert!(!job.matches_search_term("backend"));
        assert!(job.matches_search_term("rust"));
    }

    #[test]
    fn test_matches_location_and_company() {
        let job = sample_job();
        assert!(job.matches_location("paris"));
        assert!(job.matches_location(""));
        assert!(!job.matches_location("london"));
        assert!(job.matches_company("acme"));
        assert!(!job.matches_company("globex"));
    }
}
