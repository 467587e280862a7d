//! # offerhub-api
//!
//! HTTP API layer for OfferHub built on Axum.
//!
//! Provides the job submission/search/stats endpoints, the health probe,
//! CORS, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
