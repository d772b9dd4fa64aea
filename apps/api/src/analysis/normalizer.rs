//! Skill normalization — maps raw category/importance strings from a backend
//! to canonical enums, attaches synonym/related-skill metadata from static
//! lookup tables, and estimates extraction confidence.
//!
//! The mapping tables here are the contract other components are tuned
//! against; rules are evaluated in the listed order and the first match wins.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::analysis::models::{
    DifficultyLevel, ExtractedSkill, NormalizedSkill, SkillImportance, SkillType, TrainingPriority,
};

/// Maps a free-text skill category to a canonical `SkillType`.
/// Substring match in priority order; first matching rule wins.
pub fn map_skill_type(category: &str) -> SkillType {
    let c = category.to_lowercase();

    if c.contains("programming") || c.contains("language") {
        SkillType::Programming
    } else if c.contains("framework") || c.contains("library") {
        SkillType::Framework
    } else if c.contains("database") || c.contains("sql") {
        SkillType::Database
    } else if c.contains("devops") || c.contains("deployment") {
        SkillType::Devops
    } else if c.contains("system") && c.contains("design") {
        SkillType::SystemDesign
    } else if c.contains("algorithm") || c.contains("data structure") {
        SkillType::Algorithms
    } else if c.contains("test") {
        SkillType::Testing
    } else if c.contains("architecture") {
        SkillType::Architecture
    } else if c.contains("tool") {
        SkillType::Tools
    } else {
        SkillType::SoftSkill
    }
}

/// Maps a free-text importance string to a canonical `SkillImportance`.
pub fn map_importance(importance: &str) -> SkillImportance {
    let i = importance.to_lowercase();

    if i.contains("critical") || i.contains("required") {
        SkillImportance::Critical
    } else if i.contains("important") || i.contains("essential") {
        SkillImportance::Important
    } else if i.contains("preferred") || i.contains("desirable") {
        SkillImportance::Preferred
    } else {
        SkillImportance::NiceToHave
    }
}

/// Derives training priority from importance. Pure total function with no
/// other branches.
pub fn importance_to_priority(importance: SkillImportance) -> TrainingPriority {
    match importance {
        SkillImportance::Critical => TrainingPriority::High,
        SkillImportance::Important => TrainingPriority::High,
        SkillImportance::Preferred => TrainingPriority::Medium,
        SkillImportance::NiceToHave => TrainingPriority::Low,
    }
}

/// Maps a backend's free-text difficulty assessment to the canonical enum.
pub fn map_difficulty(difficulty: &str) -> DifficultyLevel {
    let d = difficulty.to_lowercase();

    if d.contains("beginner") || d.contains("entry") || d.contains("low") {
        DifficultyLevel::Beginner
    } else if d.contains("advanced") || d.contains("senior") || d.contains("high") {
        DifficultyLevel::Advanced
    } else {
        DifficultyLevel::Intermediate
    }
}

// Small fixed tables, not a general synonym engine. Lookup is a
// case-insensitive exact match on the skill name; no fuzzy matching here.
static SYNONYMS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        ("javascript", &["js", "ecmascript"][..]),
        ("typescript", &["ts"][..]),
        ("python", &["py"][..]),
        ("postgresql", &["postgres", "pg"][..]),
        ("mongodb", &["mongo"][..]),
        ("react", &["reactjs"][..]),
        ("angular", &["angularjs"][..]),
        ("vue", &["vuejs"][..]),
        ("node", &["nodejs", "node.js"][..]),
    ])
});

static RELATED_SKILLS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        (
            "react",
            &["javascript", "typescript", "jsx", "redux", "next.js"][..],
        ),
        (
            "python",
            &["django", "flask", "pandas", "numpy", "pytest"][..],
        ),
        (
            "javascript",
            &["html", "css", "typescript", "node.js", "npm"][..],
        ),
        (
            "sql",
            &["postgresql", "mysql", "database design", "data modeling"][..],
        ),
        (
            "aws",
            &["cloud computing", "docker", "kubernetes", "devops"][..],
        ),
    ])
});

/// Known alternative names for a skill. Unknown names yield an empty list.
pub fn find_synonyms(skill_name: &str) -> Vec<String> {
    SYNONYMS
        .get(skill_name.to_lowercase().as_str())
        .map(|s| s.iter().map(|v| v.to_string()).collect())
        .unwrap_or_default()
}

/// Known complementary skills for a skill. Unknown names yield an empty list.
pub fn find_related_skills(skill_name: &str) -> Vec<String> {
    RELATED_SKILLS
        .get(skill_name.to_lowercase().as_str())
        .map(|s| s.iter().map(|v| v.to_string()).collect())
        .unwrap_or_default()
}

/// Estimates extraction confidence for a raw skill. Base 0.7, bumped for a
/// substantive context, an explicit years requirement, and an explicit
/// importance; capped at 1.0.
pub fn confidence_score(skill: &ExtractedSkill) -> f64 {
    let mut confidence = 0.7;

    if skill.context.as_deref().map(|c| c.len() > 20).unwrap_or(false) {
        confidence += 0.1;
    }
    if skill.years_required.is_some() {
        confidence += 0.1;
    }
    if matches!(
        skill.importance.to_lowercase().as_str(),
        "critical" | "required" | "important"
    ) {
        confidence += 0.1;
    }

    f64::min(1.0, confidence)
}

/// Maximum years requirement carried through normalization.
const MAX_YEARS_REQUIRED: u8 = 20;

/// Normalizes one raw extracted skill. `type_override` forces the skill type
/// (used for backend soft-skill lists); otherwise the type is resolved from
/// the raw category.
pub fn normalize(raw: &ExtractedSkill, type_override: Option<SkillType>) -> NormalizedSkill {
    NormalizedSkill {
        name: raw.name.clone(),
        category: raw.category.clone(),
        skill_type: type_override.unwrap_or_else(|| map_skill_type(&raw.category)),
        importance: map_importance(&raw.importance),
        years_required: raw.years_required.map(|y| y.min(MAX_YEARS_REQUIRED)),
        context: raw.context.clone(),
        confidence_score: confidence_score(raw),
        synonyms: find_synonyms(&raw.name),
        related_skills: find_related_skills(&raw.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, category: &str, importance: &str) -> ExtractedSkill {
        ExtractedSkill {
            name: name.to_string(),
            category: category.to_string(),
            importance: importance.to_string(),
            years_required: None,
            context: None,
        }
    }

    #[test]
    fn test_category_mapping_rules_in_order() {
        assert_eq!(map_skill_type("programming"), SkillType::Programming);
        assert_eq!(map_skill_type("Programming Language"), SkillType::Programming);
        assert_eq!(map_skill_type("framework"), SkillType::Framework);
        assert_eq!(map_skill_type("ui library"), SkillType::Framework);
        assert_eq!(map_skill_type("database"), SkillType::Database);
        assert_eq!(map_skill_type("SQL"), SkillType::Database);
        assert_eq!(map_skill_type("devops"), SkillType::Devops);
        assert_eq!(map_skill_type("deployment"), SkillType::Devops);
        assert_eq!(map_skill_type("system design"), SkillType::SystemDesign);
        assert_eq!(map_skill_type("algorithms"), SkillType::Algorithms);
        assert_eq!(map_skill_type("data structures"), SkillType::Algorithms);
        assert_eq!(map_skill_type("testing"), SkillType::Testing);
        assert_eq!(map_skill_type("architecture"), SkillType::Architecture);
        assert_eq!(map_skill_type("tools"), SkillType::Tools);
        assert_eq!(map_skill_type("communication"), SkillType::SoftSkill);
    }

    #[test]
    fn test_earlier_category_rule_wins() {
        // Contains both "language" and "test" — the programming rule is
        // evaluated first.
        assert_eq!(
            map_skill_type("language testing"),
            SkillType::Programming
        );
        // "system" alone, without "design", falls through past SystemDesign.
        assert_eq!(map_skill_type("systems"), SkillType::SoftSkill);
    }

    #[test]
    fn test_importance_mapping_and_informal_synonyms() {
        assert_eq!(map_importance("critical"), SkillImportance::Critical);
        assert_eq!(map_importance("required"), SkillImportance::Critical);
        assert_eq!(map_importance("important"), SkillImportance::Important);
        assert_eq!(map_importance("essential"), SkillImportance::Important);
        assert_eq!(map_importance("preferred"), SkillImportance::Preferred);
        assert_eq!(map_importance("desirable"), SkillImportance::Preferred);
        assert_eq!(map_importance("nice to have"), SkillImportance::NiceToHave);
        assert_eq!(map_importance("whatever"), SkillImportance::NiceToHave);
    }

    #[test]
    fn test_importance_to_priority_is_total() {
        assert_eq!(
            importance_to_priority(SkillImportance::Critical),
            TrainingPriority::High
        );
        assert_eq!(
            importance_to_priority(SkillImportance::Important),
            TrainingPriority::High
        );
        assert_eq!(
            importance_to_priority(SkillImportance::Preferred),
            TrainingPriority::Medium
        );
        assert_eq!(
            importance_to_priority(SkillImportance::NiceToHave),
            TrainingPriority::Low
        );
    }

    #[test]
    fn test_difficulty_mapping() {
        assert_eq!(map_difficulty("entry level"), DifficultyLevel::Beginner);
        assert_eq!(map_difficulty("low"), DifficultyLevel::Beginner);
        assert_eq!(map_difficulty("senior"), DifficultyLevel::Advanced);
        assert_eq!(map_difficulty("high"), DifficultyLevel::Advanced);
        assert_eq!(map_difficulty("medium"), DifficultyLevel::Intermediate);
        assert_eq!(map_difficulty("unclear"), DifficultyLevel::Intermediate);
    }

    #[test]
    fn test_synonym_lookup_is_case_insensitive() {
        assert_eq!(find_synonyms("JavaScript"), vec!["js", "ecmascript"]);
        assert_eq!(find_synonyms("PostgreSQL"), vec!["postgres", "pg"]);
        assert!(find_synonyms("COBOL").is_empty());
    }

    #[test]
    fn test_related_skills_lookup() {
        let related = find_related_skills("React");
        assert_eq!(
            related,
            vec!["javascript", "typescript", "jsx", "redux", "next.js"]
        );
        assert!(find_related_skills("Fortran").is_empty());
    }

    #[test]
    fn test_confidence_base_and_bumps() {
        let bare = raw("Go", "programming", "nice to have");
        assert!((confidence_score(&bare) - 0.7).abs() < 1e-9);

        let mut full = raw("Go", "programming", "critical");
        full.years_required = Some(3);
        full.context = Some("Building high-throughput backend services".to_string());
        assert!((confidence_score(&full) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_context_does_not_bump_confidence() {
        let mut skill = raw("Go", "programming", "nice to have");
        skill.context = Some("short".to_string());
        assert!((confidence_score(&skill) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_resolves_type_from_category() {
        let skill = normalize(&raw("Python", "programming", "critical"), None);
        assert_eq!(skill.skill_type, SkillType::Programming);
        assert_eq!(skill.importance, SkillImportance::Critical);
        assert_eq!(skill.synonyms, vec!["py"]);
    }

    #[test]
    fn test_normalize_honors_type_override() {
        // Soft-skill lists force SoftSkill regardless of the raw category.
        let skill = normalize(
            &raw("Architecture Design", "architecture", "important"),
            Some(SkillType::SoftSkill),
        );
        assert_eq!(skill.skill_type, SkillType::SoftSkill);
    }

    #[test]
    fn test_normalize_clamps_years_required() {
        let mut over = raw("Python", "programming", "critical");
        over.years_required = Some(35);
        assert_eq!(normalize(&over, None).years_required, Some(20));
    }
}
