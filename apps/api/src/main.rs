mod analysis;
mod backend;
mod cache;
mod config;
mod errors;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::orchestrator::JobAnalyzer;
use crate::backend::heuristic::{HeuristicBackend, HeuristicConfig};
use crate::backend::registry::{BackendKind, BackendRegistry};
use crate::cache::{AnalysisCache, RedisCache};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillForge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the analysis cache; the service runs without one
    let analysis_cache: Option<Arc<dyn AnalysisCache>> = match &config.redis_url {
        Some(url) => {
            let cache = RedisCache::new(url)?;
            info!("Redis analysis cache initialized");
            Some(Arc::new(cache))
        }
        None => {
            info!("REDIS_URL not set, analysis cache disabled");
            None
        }
    };

    // Register analysis backends
    let mut registry = BackendRegistry::new(
        config.default_backend,
        config.fallback_backends.clone(),
    );
    registry.register(
        BackendKind::Heuristic,
        Arc::new(HeuristicBackend::new(HeuristicConfig {
            delay: Duration::from_millis(config.heuristic_delay_ms),
            failure_rate: config.heuristic_failure_rate,
        })),
    );
    info!("Default analysis backend: {}", registry.default_kind());

    let analyzer = Arc::new(JobAnalyzer::new(
        registry,
        analysis_cache,
        Duration::from_secs(config.cache_ttl_hours * 3600),
    ));

    // Build app state
    let state = AppState {
        analyzer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
