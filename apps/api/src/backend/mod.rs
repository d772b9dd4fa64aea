//! Analysis backend abstraction — the single seam through which unstructured
//! job text becomes a structured `JobAnalysis`.
//!
//! Backends are stateless between calls except for their own configuration,
//! and are swapped via the registry (`registry::BackendRegistry`). The error
//! kinds carry the retry classification so the orchestrator's retry policy
//! is a pure function of attempt count and error kind.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::models::{ExtractedSkill, JobAnalysis};

pub mod heuristic;
pub mod registry;

#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// Transient; the orchestrator retries with backoff.
    #[error("[{backend}] rate limited: {message}")]
    RateLimited { backend: String, message: String },

    /// Permanent; surfaced immediately, never retried.
    #[error("[{backend}] authentication failed: {message}")]
    AuthenticationFailed { backend: String, message: String },

    /// Generic provider failure; retried up to the attempt ceiling.
    #[error("[{backend}] provider error: {message}")]
    Provider { backend: String, message: String },

    /// Permanent; the request itself is malformed.
    #[error("[{backend}] invalid request: {message}")]
    InvalidRequest { backend: String, message: String },

    /// The selector exhausted the whole preference order.
    #[error("no healthy backend available, tried: {tried}")]
    NoneAvailable { tried: String },
}

impl BackendError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BackendError::RateLimited { .. } | BackendError::Provider { .. }
        )
    }
}

/// Raw analysis result plus backend accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub analysis: JobAnalysis,
    pub backend: String,
    /// Coarse resource-usage proxy; unit is backend-defined.
    pub tokens_used: u32,
    pub processing_time_ms: f64,
    pub timestamp: DateTime<Utc>,
}

/// A pluggable text-analysis backend.
///
/// Implementations must be stateless between calls except for their own
/// configuration. Failure kinds are communicated through `BackendError`
/// variants, never by panicking.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    fn name(&self) -> &str;

    /// Analyzes one job description into a structured `JobAnalysis`.
    async fn analyze(
        &self,
        job_description: &str,
        company_context: Option<&str>,
    ) -> Result<AnalysisOutcome, BackendError>;

    /// Extracts skills from arbitrary text content.
    async fn extract_skills(
        &self,
        text: &str,
        context_type: &str,
    ) -> Result<Vec<ExtractedSkill>, BackendError>;

    /// Probes the backend with a minimal extraction call.
    async fn health_check(&self) -> bool {
        self.extract_skills("Python programming", "health_check")
            .await
            .is_ok()
    }
}

/// Rough token estimate: ~4 characters per token.
pub fn estimate_tokens(text: &str) -> u32 {
    (text.len() / 4) as u32
}
