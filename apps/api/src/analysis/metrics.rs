//! Process-wide analysis counters. Owned by the orchestrator (constructor
//! injection, one instance per process or per test) rather than a global,
//! and guarded by a mutex since the runtime is multi-threaded.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// How many skills the snapshot reports in `most_frequent_skills`.
const TOP_SKILLS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillFrequency {
    pub skill: String,
    pub count: u64,
}

/// Point-in-time view of the counters, as served by the metrics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub total_analyses: u64,
    pub successful_analyses: u64,
    pub failed_analyses: u64,
    pub avg_processing_time_ms: Option<f64>,
    pub total_tokens_used: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub most_frequent_skills: Vec<SkillFrequency>,
}

#[derive(Debug, Default)]
struct Counters {
    total_analyses: u64,
    successful_analyses: u64,
    failed_analyses: u64,
    avg_processing_time_ms: Option<f64>,
    total_tokens_used: u64,
    cache_hits: u64,
    cache_misses: u64,
    skill_counts: HashMap<String, u64>,
}

#[derive(Debug, Default)]
pub struct AnalysisMetrics {
    inner: Mutex<Counters>,
}

impl AnalysisMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&self, processing_time_ms: f64, tokens_used: u32, skills: &[String]) {
        let mut c = self.inner.lock().expect("metrics mutex poisoned");
        c.total_analyses += 1;
        c.successful_analyses += 1;
        c.total_tokens_used += u64::from(tokens_used);

        // Not a true running mean: each new sample is averaged against the
        // previous average, overweighting recent samples. The rule is an
        // observable property of the metrics endpoint and is kept as-is.
        c.avg_processing_time_ms = Some(match c.avg_processing_time_ms {
            Some(prev) => (prev + processing_time_ms) / 2.0,
            None => processing_time_ms,
        });

        for skill in skills {
            *c.skill_counts.entry(skill.to_lowercase()).or_insert(0) += 1;
        }
    }

    /// Failed analyses count toward totals but contribute no tokens or
    /// processing time.
    pub fn record_failure(&self) {
        let mut c = self.inner.lock().expect("metrics mutex poisoned");
        c.total_analyses += 1;
        c.failed_analyses += 1;
    }

    /// Cache hits short-circuit the pipeline and do not count as analyses.
    pub fn record_cache_hit(&self) {
        self.inner.lock().expect("metrics mutex poisoned").cache_hits += 1;
    }

    pub fn record_cache_miss(&self) {
        self.inner.lock().expect("metrics mutex poisoned").cache_misses += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let c = self.inner.lock().expect("metrics mutex poisoned");

        let mut frequencies: Vec<SkillFrequency> = c
            .skill_counts
            .iter()
            .map(|(skill, &count)| SkillFrequency {
                skill: skill.clone(),
                count,
            })
            .collect();
        // Descending by count, name as a stable tiebreaker.
        frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
        frequencies.truncate(TOP_SKILLS);

        MetricsSnapshot {
            total_analyses: c.total_analyses,
            successful_analyses: c.successful_analyses,
            failed_analyses: c.failed_analyses,
            avg_processing_time_ms: c.avg_processing_time_ms,
            total_tokens_used: c.total_tokens_used,
            cache_hits: c.cache_hits,
            cache_misses: c.cache_misses,
            most_frequent_skills: frequencies,
        }
    }
}
