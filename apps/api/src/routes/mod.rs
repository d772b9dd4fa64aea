pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job analysis API
        .route(
            "/api/v1/job-analysis/analyze",
            post(handlers::handle_analyze),
        )
        .route("/api/v1/job-analysis/bulk", post(handlers::handle_bulk))
        .route(
            "/api/v1/job-analysis/extract-skills",
            post(handlers::handle_extract_skills),
        )
        .route(
            "/api/v1/job-analysis/metrics",
            get(handlers::handle_metrics),
        )
        .route(
            "/api/v1/job-analysis/backends",
            get(handlers::handle_backends),
        )
        .with_state(state)
}
