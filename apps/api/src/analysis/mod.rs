//! Job-analysis pipeline: models, normalization, matching, recommendation
//! generation, metrics, and the orchestrator that ties them together.

pub mod handlers;
pub mod matcher;
pub mod metrics;
pub mod models;
pub mod normalizer;
pub mod orchestrator;
pub mod recommend;
