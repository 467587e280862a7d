//! # offerhub-entity
//!
//! Domain model for OfferHub. Contains the `Job` entity with its
//! validation rules and matching predicates, the search filter, the bulk
//! insert report, and the [`job::JobStore`] contract that every
//! persistence adapter implements.

pub mod job;

pub use job::{BulkInsertReport, Job, JobFilter, JobStore, NewJob};
