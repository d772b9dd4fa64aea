//! Pipeline orchestrator: backend selection, retry with backoff, caching,
//! normalization, recommendation generation, and metrics accounting.
//!
//! `analyze_job_description` is deliberately infallible at the type level:
//! every failure mode is folded into a failed `JobAnalysisResponse` so that
//! bulk processing can report per-item outcomes positionally.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::Semaphore;
use tokio::time::{sleep, Instant};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::metrics::{AnalysisMetrics, MetricsSnapshot};
use crate::analysis::models::{
    AnalysisStatus, BulkJobAnalysisRequest, BulkJobAnalysisResponse, ExtractedSkill,
    JobAnalysisRequest, JobAnalysisResponse, JobAnalysisResult, NormalizedSkill, SkillType,
};
use crate::analysis::normalizer::{map_difficulty, normalize};
use crate::analysis::recommend::generate_recommendations;
use crate::backend::registry::{BackendInfo, BackendRegistry};
use crate::backend::{AnalysisOutcome, BackendError};
use crate::cache::{cache_key, AnalysisCache, CachedAnalysis};

const MAX_ATTEMPTS: u32 = 3;
const RETRY_BASE: Duration = Duration::from_secs(1);
/// Bulk requests run at most this many analyses concurrently.
const BULK_CONCURRENCY: usize = 5;

pub struct JobAnalyzer {
    registry: BackendRegistry,
    cache: Option<Arc<dyn AnalysisCache>>,
    cache_ttl: Duration,
    metrics: AnalysisMetrics,
    bulk_permits: Arc<Semaphore>,
    max_attempts: u32,
    retry_base: Duration,
}

impl JobAnalyzer {
    pub fn new(
        registry: BackendRegistry,
        cache: Option<Arc<dyn AnalysisCache>>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            registry,
            cache,
            cache_ttl,
            metrics: AnalysisMetrics::new(),
            bulk_permits: Arc::new(Semaphore::new(BULK_CONCURRENCY)),
            max_attempts: MAX_ATTEMPTS,
            retry_base: RETRY_BASE,
        }
    }

    /// Runs the full pipeline for one job description. Never returns an
    /// error: validation and backend failures come back as a failed response
    /// and count as failed analyses in the metrics.
    pub async fn analyze_job_description(
        &self,
        request: &JobAnalysisRequest,
    ) -> JobAnalysisResponse {
        let start = Instant::now();
        let analysis_id = Uuid::new_v4();

        if let Err(message) = request.validate() {
            self.metrics.record_failure();
            return failed_response(analysis_id, message, elapsed_ms(start));
        }

        let key = cache_key(
            &request.job_description,
            request.company_context.as_deref(),
        );
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key).await {
                self.metrics.record_cache_hit();
                info!(%analysis_id, "analysis served from cache");
                return JobAnalysisResponse {
                    success: true,
                    status: AnalysisStatus::Completed,
                    result: Some(hit.result),
                    error_message: None,
                    processing_time_ms: elapsed_ms(start),
                    backend: Some(hit.backend),
                    tokens_used: Some(hit.tokens_used),
                    cache_hit: true,
                    analysis_id,
                };
            }
            self.metrics.record_cache_miss();
        }

        let outcome = match self.analyze_with_retry(request).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.metrics.record_failure();
                warn!(%analysis_id, "analysis failed: {e}");
                return failed_response(analysis_id, e.to_string(), elapsed_ms(start));
            }
        };

        let result = self.build_result(request, &outcome);
        let processing_time_ms = elapsed_ms(start);

        let skill_names: Vec<String> = result
            .skill_recommendations
            .iter()
            .map(|r| r.name.clone())
            .collect();
        self.metrics
            .record_success(processing_time_ms, outcome.tokens_used, &skill_names);

        if let Some(cache) = &self.cache {
            let entry = CachedAnalysis {
                result: result.clone(),
                backend: outcome.backend.clone(),
                tokens_used: outcome.tokens_used,
            };
            cache.put(&key, &entry, self.cache_ttl).await;
        }

        info!(
            %analysis_id,
            backend = %outcome.backend,
            recommendations = result.skill_recommendations.len(),
            "analysis completed"
        );

        JobAnalysisResponse {
            success: true,
            status: AnalysisStatus::Completed,
            result: Some(result),
            error_message: None,
            processing_time_ms,
            backend: Some(outcome.backend),
            tokens_used: Some(outcome.tokens_used),
            cache_hit: false,
            analysis_id,
        }
    }

    /// Analyzes every description in the batch with bounded concurrency,
    /// preserving input order in the results. Callers validate the request
    /// shape first.
    pub async fn bulk_analyze_jobs(
        self: &Arc<Self>,
        request: BulkJobAnalysisRequest,
    ) -> BulkJobAnalysisResponse {
        let start = Instant::now();
        let batch_id = request.batch_id.unwrap_or_else(Uuid::new_v4);
        let total_jobs = request.job_descriptions.len();

        let mut handles = Vec::with_capacity(total_jobs);
        for (i, description) in request.job_descriptions.iter().enumerate() {
            let analyzer = Arc::clone(self);
            let permits = Arc::clone(&self.bulk_permits);
            let item = JobAnalysisRequest {
                job_description: description.clone(),
                job_title: Some(format!("Job {}", i + 1)),
                company_name: None,
                company_context: None,
                analysis_depth: request.analysis_depth,
                user_id: request.user_id,
            };
            handles.push(tokio::spawn(async move {
                // The semaphore lives as long as the analyzer, so acquire
                // only fails if it was closed; run unthrottled in that case.
                let _permit = permits.acquire_owned().await.ok();
                analyzer.analyze_job_description(&item).await
            }));
        }

        let mut results = Vec::with_capacity(total_jobs);
        for handle in handles {
            match handle.await {
                Ok(response) => results.push(response),
                Err(e) => {
                    self.metrics.record_failure();
                    results.push(failed_response(
                        Uuid::new_v4(),
                        format!("analysis task failed: {e}"),
                        0.0,
                    ));
                }
            }
        }

        let successful_analyses = results.iter().filter(|r| r.success).count();
        let failed_analyses = total_jobs - successful_analyses;
        let total_tokens_used: u64 = results
            .iter()
            .filter_map(|r| r.tokens_used.map(u64::from))
            .sum();

        info!(
            %batch_id,
            total_jobs,
            successful_analyses,
            failed_analyses,
            "bulk analysis completed"
        );

        BulkJobAnalysisResponse {
            // The batch counts as successful unless every item failed.
            success: failed_analyses < total_jobs,
            batch_id,
            total_jobs,
            successful_analyses,
            failed_analyses,
            results,
            processing_time_ms: elapsed_ms(start),
            // Omitted entirely when no item reported usage.
            total_tokens_used: (total_tokens_used > 0).then_some(total_tokens_used),
        }
    }

    /// Extracts raw skills from arbitrary text via the selected backend.
    pub async fn extract_skills_from_text(
        &self,
        text: &str,
        context_type: &str,
    ) -> Result<Vec<ExtractedSkill>, BackendError> {
        let backend = self.registry.get_available().await?;
        backend.extract_skills(text, context_type).await
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub async fn backend_info(&self) -> Vec<BackendInfo> {
        self.registry.backend_info().await
    }

    /// Backend call with retry. The backend is selected once; retryable
    /// errors back off exponentially (1s, 2s, ...) against that same
    /// backend, and fatal errors and exhausted attempts surface as-is.
    async fn analyze_with_retry(
        &self,
        request: &JobAnalysisRequest,
    ) -> Result<AnalysisOutcome, BackendError> {
        let backend = self.registry.get_available().await?;
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match backend
                .analyze(
                    &request.job_description,
                    request.company_context.as_deref(),
                )
                .await
            {
                Ok(outcome) => return Ok(outcome),
                Err(e) if e.is_retryable() && attempt < self.max_attempts => {
                    let backoff = self.retry_base * (1 << (attempt - 1));
                    warn!(
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        "retryable backend error: {e}"
                    );
                    sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn build_result(
        &self,
        request: &JobAnalysisRequest,
        outcome: &AnalysisOutcome,
    ) -> JobAnalysisResult {
        let analysis = &outcome.analysis;

        // Technical skills first, then soft skills; the first occurrence of
        // a name (case-insensitive) wins.
        let mut seen: HashSet<String> = HashSet::new();
        let mut normalized: Vec<NormalizedSkill> = Vec::new();
        for raw in &analysis.technical_skills {
            if seen.insert(raw.name.to_lowercase()) {
                normalized.push(normalize(raw, None));
            }
        }
        for raw in &analysis.soft_skills {
            if seen.insert(raw.name.to_lowercase()) {
                normalized.push(normalize(raw, Some(SkillType::SoftSkill)));
            }
        }

        let skill_recommendations = generate_recommendations(normalized);

        let mut analysis_metadata = HashMap::new();
        analysis_metadata.insert("backend".to_string(), json!(outcome.backend));
        analysis_metadata.insert(
            "analysis_depth".to_string(),
            json!(request.analysis_depth.as_str()),
        );
        analysis_metadata.insert("analyzed_at".to_string(), json!(outcome.timestamp));
        analysis_metadata.insert("tokens_used".to_string(), json!(outcome.tokens_used));
        analysis_metadata.insert(
            "technical_skills_extracted".to_string(),
            json!(analysis.technical_skills.len()),
        );
        analysis_metadata.insert(
            "soft_skills_extracted".to_string(),
            json!(analysis.soft_skills.len()),
        );

        JobAnalysisResult {
            // The backend-extracted title wins; the caller-supplied title is
            // only a fallback when extraction found nothing.
            job_title: analysis
                .job_title
                .clone()
                .or_else(|| request.job_title.clone()),
            company_name: request.company_name.clone(),
            industry: analysis.industry.clone(),
            key_requirements: analysis.key_requirements.clone(),
            skill_recommendations,
            experience_level: analysis.experience_level.clone(),
            difficulty_assessment: map_difficulty(&analysis.difficulty_assessment),
            role_summary: analysis.summary.clone(),
            analysis_metadata,
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

fn failed_response(
    analysis_id: Uuid,
    error_message: String,
    processing_time_ms: f64,
) -> JobAnalysisResponse {
    JobAnalysisResponse {
        success: false,
        status: AnalysisStatus::Failed,
        result: None,
        error_message: Some(error_message),
        processing_time_ms,
        backend: None,
        tokens_used: None,
        cache_hit: false,
        analysis_id,
    }
}
