//! Route definitions for the OfferHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`. Middleware layers are applied
/// by [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(job_routes()).merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Job catalog endpoints: submit, search, stats
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs/submit", post(handlers::jobs::submit_jobs))
        .route("/jobs/search", post(handlers::jobs::search_jobs))
        .route("/jobs/stats", get(handlers::jobs::get_stats))
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
