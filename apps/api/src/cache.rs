//! Best-effort result cache keyed by request content.
//!
//! The cache is an optimization only: every operation swallows store errors
//! (logged at warn) and the pipeline behaves identically with the cache
//! disabled, minus the latency win on repeat submissions.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::analysis::models::JobAnalysisResult;

const KEY_PREFIX: &str = "job-analysis:";

/// Payload stored per cache entry — enough to rebuild a response without
/// re-running the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedAnalysis {
    pub result: JobAnalysisResult,
    pub backend: String,
    pub tokens_used: u32,
}

/// Deterministic key over the request content. Two submissions with the same
/// description and context hit the same entry.
pub fn cache_key(job_description: &str, company_context: Option<&str>) -> String {
    let material = format!("{}|{}", job_description, company_context.unwrap_or(""));
    let digest = Uuid::new_v5(&Uuid::NAMESPACE_OID, material.as_bytes());
    format!("{KEY_PREFIX}{digest}")
}

#[async_trait]
pub trait AnalysisCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<CachedAnalysis>;
    async fn put(&self, key: &str, value: &CachedAnalysis, ttl: Duration);
}

pub struct RedisCache {
    client: redis::Client,
}

impl RedisCache {
    pub fn new(redis_url: &str) -> anyhow::Result<Self> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AnalysisCache for RedisCache {
    async fn get(&self, key: &str) -> Option<CachedAnalysis> {
        let mut conn = match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("cache unavailable, skipping lookup: {e}");
                return None;
            }
        };

        let raw: Option<String> = match conn.get(key).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("cache lookup failed: {e}");
                return None;
            }
        };

        raw.and_then(|json| match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("discarding undecodable cache entry {key}: {e}");
                None
            }
        })
    }

    async fn put(&self, key: &str, value: &CachedAnalysis, ttl: Duration) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize cache entry: {e}");
                return;
            }
        };

        let mut conn = match self.client.get_multiplexed_async_connection().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("cache unavailable, skipping write: {e}");
                return;
            }
        };

        if let Err(e) = conn
            .set_ex::<_, _, ()>(key, json, ttl.as_secs())
            .await
        {
            warn!("cache write failed: {e}");
        }
    }
}

/// In-process cache used by tests.
#[cfg(test)]
pub struct MemoryCache {
    entries: std::sync::Mutex<
        std::collections::HashMap<String, (CachedAnalysis, std::time::Instant)>,
    >,
}

#[cfg(test)]
impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(std::collections::HashMap::new()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl AnalysisCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<CachedAnalysis> {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        entries.get(key).and_then(|(value, deadline)| {
            (std::time::Instant::now() < *deadline).then(|| value.clone())
        })
    }

    async fn put(&self, key: &str, value: &CachedAnalysis, ttl: Duration) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(
            key.to_string(),
            (value.clone(), std::time::Instant::now() + ttl),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::DifficultyLevel;
    use std::collections::HashMap;

    fn sample_result() -> JobAnalysisResult {
        JobAnalysisResult {
            job_title: Some("Backend Developer".to_string()),
            company_name: None,
            industry: "technology".to_string(),
            key_requirements: vec![],
            skill_recommendations: vec![],
            experience_level: "mid".to_string(),
            difficulty_assessment: DifficultyLevel::Intermediate,
            role_summary: "A role.".to_string(),
            analysis_metadata: HashMap::new(),
        }
    }

    #[test]
    fn test_key_is_deterministic() {
        let a = cache_key("python developer", None);
        let b = cache_key("python developer", None);
        assert_eq!(a, b);
        assert!(a.starts_with(KEY_PREFIX));
    }

    #[test]
    fn test_key_varies_with_content_and_context() {
        let base = cache_key("python developer", None);
        assert_ne!(base, cache_key("rust developer", None));
        assert_ne!(base, cache_key("python developer", Some("Acme Corp")));
    }

    #[tokio::test]
    async fn test_memory_cache_round_trip() {
        let cache = MemoryCache::new();
        let entry = CachedAnalysis {
            result: sample_result(),
            backend: "heuristic".to_string(),
            tokens_used: 42,
        };
        let key = cache_key("python developer", None);

        assert!(cache.get(&key).await.is_none());
        cache.put(&key, &entry, Duration::from_secs(60)).await;

        let hit = cache.get(&key).await.expect("entry should be present");
        assert_eq!(hit.backend, "heuristic");
        assert_eq!(hit.tokens_used, 42);
    }

    #[tokio::test]
    async fn test_memory_cache_expires_entries() {
        let cache = MemoryCache::new();
        let entry = CachedAnalysis {
            result: sample_result(),
            backend: "heuristic".to_string(),
            tokens_used: 1,
        };
        let key = cache_key("python developer", None);
        cache.put(&key, &entry, Duration::ZERO).await;
        assert!(cache.get(&key).await.is_none());
    }
}
