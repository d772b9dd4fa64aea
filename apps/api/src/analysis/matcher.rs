//! Fuzzy matching of extracted skills against a previously-seen skill set.
//!
//! The similarity metric is deliberately crude; the downstream confidence
//! thresholds are tuned against this exact formula, so do not substitute a
//! "better" one.
//!
//! Not wired into the analyze pipeline yet: callers that maintain their own
//! skill store use this to fold new extractions into it.
#![allow(dead_code)]

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::analysis::models::NormalizedSkill;

pub const EXACT_MATCH_CONFIDENCE: f64 = 1.0;
pub const SYNONYM_MATCH_CONFIDENCE: f64 = 0.9;
pub const PARTIAL_MATCH_THRESHOLD: f64 = 0.7;
pub const SEMANTIC_MATCH_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Synonym,
    Partial,
    New,
}

/// Outcome of matching one extracted skill against the known set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill_name: String,
    pub matched_skill_name: Option<String>,
    pub match_confidence: f64,
    pub match_type: MatchType,
    pub is_new_skill: bool,
}

/// Similarity between two strings.
///
/// Equal strings score 1.0. If one string contains the other, the score is
/// `max(len) / min(len) * 0.8` (which can exceed 1.0 — preserved for
/// compatibility with the tuned thresholds). Otherwise the score is the
/// Jaccard overlap of the two character sets.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    if a.contains(b) || b.contains(a) {
        return len_a.max(len_b) as f64 / len_a.min(len_b) as f64 * 0.8;
    }

    let set_a: HashSet<char> = a.chars().collect();
    let set_b: HashSet<char> = b.chars().collect();
    let overlap = set_a.intersection(&set_b).count();
    let total = set_a.union(&set_b).count();

    if total > 0 {
        overlap as f64 / total as f64
    } else {
        0.0
    }
}

/// Finds the best match for a normalized skill in a set of known skill
/// names. Tiers: exact name match, then synonym match, then the best partial
/// match above `PARTIAL_MATCH_THRESHOLD`; otherwise the skill is new.
///
/// Comparison is against lower-cased known names; callers supply the known
/// set from whatever store they maintain (the core keeps none).
pub fn find_best_match(skill: &NormalizedSkill, known_skills: &[String]) -> SkillMatch {
    let name_lower = skill.name.to_lowercase();
    let known_lower: Vec<(String, &String)> = known_skills
        .iter()
        .map(|k| (k.to_lowercase(), k))
        .collect();

    if let Some((_, original)) = known_lower.iter().find(|(k, _)| *k == name_lower) {
        return SkillMatch {
            skill_name: skill.name.clone(),
            matched_skill_name: Some((*original).clone()),
            match_confidence: EXACT_MATCH_CONFIDENCE,
            match_type: MatchType::Exact,
            is_new_skill: false,
        };
    }

    for synonym in &skill.synonyms {
        let synonym_lower = synonym.to_lowercase();
        if let Some((_, original)) = known_lower.iter().find(|(k, _)| *k == synonym_lower) {
            return SkillMatch {
                skill_name: skill.name.clone(),
                matched_skill_name: Some((*original).clone()),
                match_confidence: SYNONYM_MATCH_CONFIDENCE,
                match_type: MatchType::Synonym,
                is_new_skill: false,
            };
        }
    }

    let mut best: Option<(f64, &String)> = None;
    for (known, original) in &known_lower {
        let confidence = string_similarity(&name_lower, known);
        if confidence > PARTIAL_MATCH_THRESHOLD
            && best.map(|(c, _)| confidence > c).unwrap_or(true)
        {
            best = Some((confidence, original));
        }
    }

    if let Some((confidence, original)) = best {
        return SkillMatch {
            skill_name: skill.name.clone(),
            matched_skill_name: Some(original.clone()),
            match_confidence: confidence,
            match_type: MatchType::Partial,
            is_new_skill: false,
        };
    }

    SkillMatch {
        skill_name: skill.name.clone(),
        matched_skill_name: None,
        match_confidence: 0.0,
        match_type: MatchType::New,
        is_new_skill: true,
    }
}
