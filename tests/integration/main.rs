//! Integration test entry point.
//!
//! These tests drive the full HTTP stack against a live PostgreSQL
//! database. They are `#[ignore]`d by default; run them with
//! `cargo test -- --ignored` after exporting `OFFERHUB_TEST_DATABASE_URL`.

mod helpers;
mod jobs_test;
