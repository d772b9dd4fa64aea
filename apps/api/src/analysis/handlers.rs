//! HTTP handlers for the job-analysis API.
//!
//! Request-shape validation happens here and maps to 400; everything past
//! the boundary reports per-item outcomes in the response body instead of
//! failing the whole request.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::metrics::MetricsSnapshot;
use crate::analysis::models::{
    BulkJobAnalysisRequest, BulkJobAnalysisResponse, ExtractedSkill, JobAnalysisRequest,
    JobAnalysisResponse,
};
use crate::backend::registry::BackendInfo;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/job-analysis/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<JobAnalysisRequest>,
) -> Result<Json<JobAnalysisResponse>, AppError> {
    request.validate().map_err(AppError::Validation)?;
    let response = state.analyzer.analyze_job_description(&request).await;
    Ok(Json(response))
}

/// POST /api/v1/job-analysis/bulk
pub async fn handle_bulk(
    State(state): State<AppState>,
    Json(request): Json<BulkJobAnalysisRequest>,
) -> Result<Json<BulkJobAnalysisResponse>, AppError> {
    request.validate().map_err(AppError::Validation)?;
    let response = state.analyzer.bulk_analyze_jobs(request).await;
    Ok(Json(response))
}

fn default_context_type() -> String {
    "general".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
    #[serde(default = "default_context_type")]
    pub context_type: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<ExtractedSkill>,
    pub total_count: usize,
    pub context_type: String,
}

/// POST /api/v1/job-analysis/extract-skills
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let skills = state
        .analyzer
        .extract_skills_from_text(&request.text, &request.context_type)
        .await?;

    Ok(Json(ExtractSkillsResponse {
        total_count: skills.len(),
        skills,
        context_type: request.context_type,
    }))
}

/// GET /api/v1/job-analysis/metrics
pub async fn handle_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.analyzer.metrics())
}

/// GET /api/v1/job-analysis/backends
/// Diagnostic listing of registered backends and their health.
pub async fn handle_backends(State(state): State<AppState>) -> Json<Vec<BackendInfo>> {
    Json(state.analyzer.backend_info().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::heuristic::{HeuristicBackend, HeuristicConfig};
    use crate::backend::registry::{BackendKind, BackendRegistry};
    use crate::config::Config;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_state() -> AppState {
        let mut registry = BackendRegistry::new(BackendKind::Heuristic, vec![]);
        registry.register(
            BackendKind::Heuristic,
            Arc::new(HeuristicBackend::new(HeuristicConfig::default())),
        );
        AppState {
            analyzer: Arc::new(crate::analysis::orchestrator::JobAnalyzer::new(
                registry,
                None,
                Duration::from_secs(3600),
            )),
            config: Config {
                redis_url: None,
                default_backend: BackendKind::Heuristic,
                fallback_backends: vec![],
                heuristic_delay_ms: 0,
                heuristic_failure_rate: 0.0,
                cache_ttl_hours: 24,
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_description_with_validation_error() {
        let request = JobAnalysisRequest {
            job_description: "  ".to_string(),
            job_title: None,
            company_name: None,
            company_context: None,
            analysis_depth: Default::default(),
            user_id: None,
        };
        let result = handle_analyze(State(test_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_analyze_returns_completed_response() {
        let request = JobAnalysisRequest {
            job_description: "Backend developer. Python and PostgreSQL required.".to_string(),
            job_title: None,
            company_name: Some("Acme".to_string()),
            company_context: None,
            analysis_depth: Default::default(),
            user_id: None,
        };
        let Json(response) = handle_analyze(State(test_state()), Json(request))
            .await
            .unwrap();
        assert!(response.success);
        let result = response.result.unwrap();
        assert_eq!(result.company_name.as_deref(), Some("Acme"));
        assert!(!result.skill_recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_bulk_rejects_oversized_batch() {
        let request = BulkJobAnalysisRequest {
            job_descriptions: vec!["role".to_string(); 51],
            analysis_depth: Default::default(),
            user_id: None,
            batch_id: None,
        };
        let result = handle_bulk(State(test_state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_extract_skills_counts_results() {
        let request = ExtractSkillsRequest {
            text: "Python and Docker experience".to_string(),
            context_type: "resume".to_string(),
        };
        let Json(response) = handle_extract_skills(State(test_state()), Json(request))
            .await
            .unwrap();
        assert_eq!(response.total_count, response.skills.len());
        assert_eq!(response.context_type, "resume");
    }

    #[tokio::test]
    async fn test_backends_lists_default_heuristic() {
        let Json(info) = handle_backends(State(test_state())).await;
        assert_eq!(info.len(), 1);
        assert!(info[0].is_default);
        assert_eq!(info[0].name, "heuristic");
    }
}
