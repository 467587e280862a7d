//! Job catalog handlers: submit, search, stats.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{SearchJobsRequest, SubmitJobsRequest};
use crate::dto::response::{JobResponse, StatsResponse, SubmitJobsResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/jobs/submit
pub async fn submit_jobs(
    State(state): State<AppState>,
    Json(req): Json<SubmitJobsRequest>,
) -> Result<Json<SubmitJobsResponse>, ApiError> {
    let submissions = req.jobs.into_iter().map(Into::into).collect();
    let outcome = state.catalog.submit_jobs(submissions).await?;
    Ok(Json(outcome.into()))
}

/// POST /api/jobs/search
pub async fn search_jobs(
    State(state): State<AppState>,
    Json(req): Json<SearchJobsRequest>,
) -> Result<Json<Vec<JobResponse>>, ApiError> {
    let filter = req.into_filter();
    let jobs = state.catalog.search_jobs(&filter).await?;
    Ok(Json(jobs.into_iter().map(Into::into).collect()))
}

/// GET /api/jobs/stats
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.catalog.stats().await?;
    Ok(Json(stats.into()))
}
