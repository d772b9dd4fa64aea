//! Data model for the job-analysis pipeline: raw backend output, canonical
//! enums, unified skill recommendations, and the request/response envelopes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Canonical enums
// ────────────────────────────────────────────────────────────────────────────

/// Standardized skill type, resolved from the backend's free-text category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillType {
    Programming,
    Framework,
    Database,
    Devops,
    SoftSkill,
    SystemDesign,
    Algorithms,
    Testing,
    Architecture,
    Tools,
}

/// How essential a skill is to the role, resolved from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillImportance {
    Critical,
    Important,
    Preferred,
    NiceToHave,
}

impl SkillImportance {
    /// Severity rank for sorting: lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            SkillImportance::Critical => 0,
            SkillImportance::Important => 1,
            SkillImportance::Preferred => 2,
            SkillImportance::NiceToHave => 3,
        }
    }
}

/// Training urgency, derived deterministically from importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPriority {
    High,
    Medium,
    Low,
}

impl TrainingPriority {
    /// Severity rank for sorting: lower sorts first.
    pub fn rank(self) -> u8 {
        match self {
            TrainingPriority::High => 0,
            TrainingPriority::Medium => 1,
            TrainingPriority::Low => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Status of a single analysis operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// Caller-supplied hint about how much detail is wanted. Validated at the
/// boundary; does not change core algorithmic behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDepth {
    Basic,
    #[default]
    Standard,
    Comprehensive,
}

impl AnalysisDepth {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisDepth::Basic => "basic",
            AnalysisDepth::Standard => "standard",
            AnalysisDepth::Comprehensive => "comprehensive",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw backend output
// ────────────────────────────────────────────────────────────────────────────

/// A skill as emitted by an analysis backend. Category and importance are
/// free text, possibly noisy; the normalizer resolves them to canonical enums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub category: String,
    pub importance: String,
    pub years_required: Option<u8>,
    pub context: Option<String>,
}

/// Aggregate raw result from a backend for one job description.
/// Produced once per analyze call, immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub job_title: Option<String>,
    pub key_requirements: Vec<String>,
    pub technical_skills: Vec<ExtractedSkill>,
    pub soft_skills: Vec<ExtractedSkill>,
    pub experience_level: String,
    pub industry: String,
    pub summary: String,
    pub difficulty_assessment: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Normalized and enriched skills
// ────────────────────────────────────────────────────────────────────────────

/// A skill after normalization: category/importance/type resolved, synonym
/// and related-skill metadata attached, confidence estimated. The
/// recommendation builder fills in the training fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedSkill {
    pub name: String,
    pub category: String,
    pub skill_type: SkillType,
    pub importance: SkillImportance,
    pub years_required: Option<u8>,
    pub context: Option<String>,
    pub confidence_score: f64,
    pub synonyms: Vec<String>,
    pub related_skills: Vec<String>,
}

/// Canonical unified output unit: one skill found in the job description,
/// carrying training guidance. Constructed once per extracted skill per
/// analysis, never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub name: String,
    pub category: String,
    pub skill_type: SkillType,
    pub importance: SkillImportance,
    pub priority: TrainingPriority,
    pub years_required: Option<u8>,
    pub context: Option<String>,
    pub recommended_actions: Vec<String>,
    pub estimated_duration: String,
    pub difficulty_level: DifficultyLevel,
    pub prerequisite_skills: Vec<String>,
    pub learning_resources: Vec<String>,
    pub success_metrics: Vec<String>,
    pub synonyms: Vec<String>,
    pub related_skills: Vec<String>,
}

/// Final aggregate returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAnalysisResult {
    pub job_title: Option<String>,
    /// Caller-supplied context, not extracted from the description.
    pub company_name: Option<String>,
    pub industry: String,
    pub key_requirements: Vec<String>,
    /// Sorted by (priority rank, importance rank), capped at
    /// `recommend::MAX_RECOMMENDATIONS`.
    pub skill_recommendations: Vec<SkillRecommendation>,
    pub experience_level: String,
    pub difficulty_assessment: DifficultyLevel,
    pub role_summary: String,
    pub analysis_metadata: HashMap<String, Value>,
}

// ────────────────────────────────────────────────────────────────────────────
// Request / response envelopes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAnalysisRequest {
    pub job_description: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub company_context: Option<String>,
    #[serde(default)]
    pub analysis_depth: AnalysisDepth,
    pub user_id: Option<Uuid>,
}

impl JobAnalysisRequest {
    /// Request-shape validation. Runs before any backend call.
    pub fn validate(&self) -> Result<(), String> {
        if self.job_description.trim().is_empty() {
            return Err("job_description cannot be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAnalysisResponse {
    pub success: bool,
    pub status: AnalysisStatus,
    pub result: Option<JobAnalysisResult>,
    pub error_message: Option<String>,
    pub processing_time_ms: f64,
    pub backend: Option<String>,
    pub tokens_used: Option<u32>,
    #[serde(default)]
    pub cache_hit: bool,
    pub analysis_id: Uuid,
}

pub const BULK_MAX_JOBS: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkJobAnalysisRequest {
    pub job_descriptions: Vec<String>,
    #[serde(default)]
    pub analysis_depth: AnalysisDepth,
    pub user_id: Option<Uuid>,
    pub batch_id: Option<Uuid>,
}

impl BulkJobAnalysisRequest {
    /// Validates list bounds (1-50) and that every description is non-empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.job_descriptions.is_empty() {
            return Err("job_descriptions cannot be empty".to_string());
        }
        if self.job_descriptions.len() > BULK_MAX_JOBS {
            return Err(format!(
                "job_descriptions cannot contain more than {BULK_MAX_JOBS} entries"
            ));
        }
        if let Some(i) = self
            .job_descriptions
            .iter()
            .position(|d| d.trim().is_empty())
        {
            return Err(format!("job_descriptions[{i}] cannot be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkJobAnalysisResponse {
    /// True when at least one analysis in the batch succeeded.
    pub success: bool,
    pub batch_id: Uuid,
    pub total_jobs: usize,
    pub successful_analyses: usize,
    pub failed_analyses: usize,
    /// One entry per input description, in input order.
    pub results: Vec<JobAnalysisResponse>,
    pub processing_time_ms: f64,
    pub total_tokens_used: Option<u64>,
}
