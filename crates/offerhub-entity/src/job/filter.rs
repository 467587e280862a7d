//! Search filter for the job catalog.

use serde::{Deserialize, Serialize};

use offerhub_core::error::AppError;
use offerhub_core::result::AppResult;

/// Default number of results returned by a search.
pub const DEFAULT_LIMIT: i64 = 50;
/// Maximum number of results a single search may request.
pub const MAX_LIMIT: i64 = 1000;

/// Filter criteria for searching the catalog.
///
/// Absent filters impose no constraint; present filters are AND-combined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFilter {
    /// Free-text term matched against title, company, or description.
    pub search: Option<String>,
    /// Case-insensitive substring match against the location.
    pub location: Option<String>,
    /// Case-insensitive substring match against the company.
    pub company: Option<String>,
    /// Exact match against the source tag.
    pub source: Option<String>,
    /// Maximum number of results (1..=1000).
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Number of results to skip.
    #[serde(default)]
    pub offset: i64,
}

impl JobFilter {
    /// Validate the pagination bounds.
    ///
    /// Called by the search operation before the store is consulted.
    pub fn validate(&self) -> AppResult<()> {
        if self.limit < 1 || self.limit > MAX_LIMIT {
            return Err(AppError::invalid_criteria(format!(
                "Limit must be between 1 and {MAX_LIMIT}"
            )));
        }
        if self.offset < 0 {
            return Err(AppError::invalid_criteria("Offset must be non-negative"));
        }
        Ok(())
    }
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            search: None,
            location: None,
            company: None,
            source: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[cfg(test)]
mod tests {
    use super::*;
    use offerhub_core::error::ErrorKind;

    #[test]
    fn test_default_filter_is_valid() {
        let filter = JobFilter::default();
        assert_eq!(filter.limit, 50);
        assert_eq!(filter.offset, 0);
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        let mut filter = JobFilter::default();

        filter.limit = 0;
        assert_eq!(filter.validate().unwrap_err().kind, ErrorKind::InvalidCriteria);

        filter.limit = 1001;
        assert_eq!(filter.validate().unwrap_err().kind, ErrorKind::InvalidCriteria);

        filter.limit = 1;
        assert!(filter.validate().is_ok());
        filter.limit = 1000;
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_negative_offset_rejected() {
        let filter = JobFilter {
            offset: -1,
            ..JobFilter::default()
        };
        let err = filter.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCriteria);
        assert!(err.message.contains("non-negative"));
    }

    #[test]
    fn test_deserialization_defaults() {
        let filter: JobFilter = serde_json::from_str(r#"{"search": "rust"}"#).unwrap();
        assert_eq!(filter.search.as_deref(), Some("rust"));
        assert_eq!(filter.limit, DEFAULT_LIMIT);
        assert_eq!(filter.offset, 0);
    }
}
