//! # offerhub-service
//!
//! Catalog operations for OfferHub. [`catalog::CatalogService`] orchestrates
//! the job store for the three operations the HTTP layer exposes:
//! submission, search, and statistics.

pub mod catalog;

pub use catalog::{CatalogService, CatalogStats, JobSubmission, SubmitOutcome};
