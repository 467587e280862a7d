//! Application state shared across all handlers.

use std::sync::Arc;

use offerhub_core::config::AppConfig;
use offerhub_service::CatalogService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Catalog operations over the job store.
    pub catalog: Arc<CatalogService>,
}
