use anyhow::{Context, Result};

use crate::backend::registry::BackendKind;

/// Application configuration loaded from environment variables.
///
/// Only `PORT` and logging have hard defaults; everything else is optional
/// with sensible fallbacks so the service runs out of the box with the
/// heuristic backend and no cache.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection string. When unset the analysis cache is disabled
    /// (the cache is a best-effort optimization, never a correctness
    /// requirement).
    pub redis_url: Option<String>,
    pub default_backend: BackendKind,
    pub fallback_backends: Vec<BackendKind>,
    /// Simulated per-call latency of the heuristic backend, for test harnesses.
    pub heuristic_delay_ms: u64,
    /// Simulated failure probability (0.0 - 1.0) of the heuristic backend.
    pub heuristic_failure_rate: f64,
    pub cache_ttl_hours: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_backend = std::env::var("ANALYSIS_DEFAULT_BACKEND")
            .unwrap_or_else(|_| "heuristic".to_string())
            .parse::<BackendKind>()
            .context("ANALYSIS_DEFAULT_BACKEND must name a known backend")?;

        let fallback_backends = std::env::var("ANALYSIS_FALLBACK_BACKENDS")
            .unwrap_or_else(|_| "heuristic".to_string())
            .split(',')
            .map(|s| s.trim().parse::<BackendKind>())
            .collect::<Result<Vec<_>, _>>()
            .context("ANALYSIS_FALLBACK_BACKENDS must be a comma-separated list of known backends")?;

        let heuristic_failure_rate = std::env::var("HEURISTIC_FAILURE_RATE")
            .unwrap_or_else(|_| "0.0".to_string())
            .parse::<f64>()
            .context("HEURISTIC_FAILURE_RATE must be a float between 0 and 1")?;
        anyhow::ensure!(
            (0.0..=1.0).contains(&heuristic_failure_rate),
            "HEURISTIC_FAILURE_RATE must be between 0 and 1"
        );

        Ok(Config {
            redis_url: std::env::var("REDIS_URL").ok(),
            default_backend,
            fallback_backends,
            heuristic_delay_ms: std::env::var("HEURISTIC_DELAY_MS")
                .unwrap_or_else(|_| "0".to_string())
                .parse::<u64>()
                .context("HEURISTIC_DELAY_MS must be a non-negative integer")?,
            heuristic_failure_rate,
            cache_ttl_hours: std::env::var("CACHE_TTL_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse::<u64>()
                .context("CACHE_TTL_HOURS must be a non-negative integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
