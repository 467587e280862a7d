//! Catalog operations: submit, search, stats.

pub mod service;

pub use service::{CatalogService, CatalogStats, JobSubmission, SubmitOutcome};
