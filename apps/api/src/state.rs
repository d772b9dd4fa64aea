use std::sync::Arc;

use crate::analysis::orchestrator::JobAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<JobAnalyzer>,
    pub config: Config,
}
