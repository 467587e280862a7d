//! # offerhub-database
//!
//! PostgreSQL connection management, the migration runner, and the
//! concrete [`offerhub_entity::JobStore`] adapters: the production
//! Postgres repository and an in-memory store for tests.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
