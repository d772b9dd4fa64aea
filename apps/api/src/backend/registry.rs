//! Backend selection with health-checked fallback.
//!
//! The registry holds one instance per backend kind and a preference order
//! (default first, then fallbacks). `get_available` walks that order and
//! returns the first registered backend whose health probe passes.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::backend::{AnalysisBackend, BackendError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Heuristic,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Heuristic => "heuristic",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error)]
#[error("unknown analysis backend: {0}")]
pub struct UnknownBackend(String);

impl FromStr for BackendKind {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "heuristic" => Ok(BackendKind::Heuristic),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

/// Diagnostic view of one registered backend, served by the debug endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct BackendInfo {
    pub kind: BackendKind,
    pub name: String,
    pub is_default: bool,
    pub healthy: bool,
}

pub struct BackendRegistry {
    backends: HashMap<BackendKind, Arc<dyn AnalysisBackend>>,
    default: BackendKind,
    fallbacks: Vec<BackendKind>,
}

impl BackendRegistry {
    pub fn new(default: BackendKind, fallbacks: Vec<BackendKind>) -> Self {
        Self {
            backends: HashMap::new(),
            default,
            fallbacks,
        }
    }

    pub fn register(&mut self, kind: BackendKind, backend: Arc<dyn AnalysisBackend>) {
        self.backends.insert(kind, backend);
    }

    /// Preference order: default first, then fallbacks, duplicates removed.
    fn preference_order(&self) -> Vec<BackendKind> {
        let mut order = vec![self.default];
        for kind in &self.fallbacks {
            if !order.contains(kind) {
                order.push(*kind);
            }
        }
        order
    }

    /// Returns the first registered, healthy backend in preference order.
    pub async fn get_available(&self) -> Result<Arc<dyn AnalysisBackend>, BackendError> {
        let order = self.preference_order();
        for kind in &order {
            let Some(backend) = self.backends.get(kind) else {
                warn!(backend = %kind, "backend in preference order is not registered");
                continue;
            };
            if backend.health_check().await {
                return Ok(Arc::clone(backend));
            }
            warn!(backend = %kind, "backend failed health check, trying next");
        }

        Err(BackendError::NoneAvailable {
            tried: order
                .iter()
                .map(BackendKind::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    pub async fn backend_info(&self) -> Vec<BackendInfo> {
        let mut info = Vec::with_capacity(self.backends.len());
        for kind in self.preference_order() {
            if let Some(backend) = self.backends.get(&kind) {
                info.push(BackendInfo {
                    kind,
                    name: backend.name().to_string(),
                    is_default: kind == self.default,
                    healthy: backend.health_check().await,
                });
            }
        }
        info
    }

    pub fn default_kind(&self) -> BackendKind {
        self.default
    }
}
