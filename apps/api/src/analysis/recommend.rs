//! Recommendation builder — turns normalized skills into ranked
//! `SkillRecommendation` records carrying training guidance.

use crate::analysis::models::{
    DifficultyLevel, NormalizedSkill, SkillImportance, SkillRecommendation, SkillType,
};
use crate::analysis::normalizer::importance_to_priority;

/// Upper bound on the recommendation list returned to callers.
pub const MAX_RECOMMENDATIONS: usize = 15;

const MAX_ACTIONS: usize = 5;
const MAX_RESOURCES: usize = 3;
const MAX_METRICS: usize = 3;
const MAX_PREREQUISITES: usize = 3;

/// Builds the unified recommendation record for one normalized skill.
pub fn build_recommendation(skill: NormalizedSkill) -> SkillRecommendation {
    let priority = importance_to_priority(skill.importance);
    let recommended_actions = recommended_actions(&skill);
    let estimated_duration = estimate_duration(&skill);
    let difficulty_level = training_difficulty(skill.skill_type);
    let learning_resources = learning_resources(&skill);
    let success_metrics = success_metrics(&skill);
    let prerequisite_skills = skill
        .related_skills
        .iter()
        .take(MAX_PREREQUISITES)
        .cloned()
        .collect();

    SkillRecommendation {
        name: skill.name,
        category: skill.category,
        skill_type: skill.skill_type,
        importance: skill.importance,
        priority,
        years_required: skill.years_required,
        context: skill.context,
        recommended_actions,
        estimated_duration,
        difficulty_level,
        prerequisite_skills,
        learning_resources,
        success_metrics,
        synonyms: skill.synonyms,
        related_skills: skill.related_skills,
    }
}

/// Builds, ranks, and bounds the recommendation list: ascending by
/// (priority severity, importance severity), truncated to
/// `MAX_RECOMMENDATIONS`.
pub fn generate_recommendations(skills: Vec<NormalizedSkill>) -> Vec<SkillRecommendation> {
    let mut recommendations: Vec<SkillRecommendation> =
        skills.into_iter().map(build_recommendation).collect();

    recommendations.sort_by_key(|r| (r.priority.rank(), r.importance.rank()));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

fn recommended_actions(skill: &NormalizedSkill) -> Vec<String> {
    let name = &skill.name;
    let mut actions = vec![format!("Learn the fundamentals of {name}")];

    match skill.skill_type {
        SkillType::Programming => actions.extend([
            format!("Practice coding exercises in {name}"),
            format!("Build a small project using {name}"),
            format!("Read {name} documentation and best practices"),
        ]),
        SkillType::Framework => actions.extend([
            format!("Complete a {name} tutorial or course"),
            format!("Build a sample application with {name}"),
            format!("Study {name} architecture and patterns"),
        ]),
        _ => actions.extend([
            format!("Study {name} concepts and principles"),
            format!("Practice {name} through hands-on exercises"),
            format!("Apply {name} in a real-world scenario"),
        ]),
    }

    actions.truncate(MAX_ACTIONS);
    actions
}

// Duration rule: a years requirement above 2 dominates, then critical
// importance, then the default. This is the single authoritative rule for
// the whole pipeline (see DESIGN.md).
fn estimate_duration(skill: &NormalizedSkill) -> String {
    if skill.years_required.map(|y| y > 2).unwrap_or(false) {
        "3-6 months".to_string()
    } else if skill.importance == SkillImportance::Critical {
        "4-8 weeks".to_string()
    } else {
        "2-4 weeks".to_string()
    }
}

fn training_difficulty(skill_type: SkillType) -> DifficultyLevel {
    match skill_type {
        SkillType::SystemDesign | SkillType::Architecture => DifficultyLevel::Advanced,
        SkillType::Algorithms | SkillType::Devops => DifficultyLevel::Intermediate,
        _ => DifficultyLevel::Beginner,
    }
}

fn learning_resources(skill: &NormalizedSkill) -> Vec<String> {
    let name = &skill.name;
    let mut resources = match skill.skill_type {
        SkillType::Programming => vec![
            format!("Official {name} documentation"),
            format!("{name} interactive tutorials"),
            format!("Online coding platforms with {name} exercises"),
        ],
        SkillType::Framework => vec![
            format!("{name} official getting started guide"),
            format!("Video course on {name}"),
            "Community examples and templates".to_string(),
        ],
        _ => vec![
            format!("Online course on {name}"),
            format!("Books about {name}"),
            "Professional blogs and articles".to_string(),
        ],
    };
    resources.truncate(MAX_RESOURCES);
    resources
}

fn success_metrics(skill: &NormalizedSkill) -> Vec<String> {
    let name = &skill.name;
    let mut metrics = match skill.skill_type {
        SkillType::Programming => vec![
            format!("Complete coding challenges in {name}"),
            format!("Build and deploy a project using {name}"),
            format!("Pass technical interview questions about {name}"),
        ],
        SkillType::Framework => vec![
            format!("Build a functional application with {name}"),
            format!("Understand {name} core concepts"),
            format!("Follow {name} best practices"),
        ],
        _ => vec![
            format!("Demonstrate understanding of {name} principles"),
            format!("Apply {name} in practical scenarios"),
            format!("Explain {name} concepts clearly"),
        ],
    };
    metrics.truncate(MAX_METRICS);
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::TrainingPriority;

    fn skill(
        name: &str,
        skill_type: SkillType,
        importance: SkillImportance,
        years: Option<u8>,
    ) -> NormalizedSkill {
        NormalizedSkill {
            name: name.to_string(),
            category: "programming".to_string(),
            skill_type,
            importance,
            years_required: years,
            context: None,
            confidence_score: 0.7,
            synonyms: vec![],
            related_skills: vec![],
        }
    }

    #[test]
    fn test_first_action_is_always_fundamentals() {
        let rec = build_recommendation(skill(
            "Python",
            SkillType::Programming,
            SkillImportance::Critical,
            None,
        ));
        assert_eq!(rec.recommended_actions[0], "Learn the fundamentals of Python");
    }

    #[test]
    fn test_actions_capped_at_five() {
        let rec = build_recommendation(skill(
            "Python",
            SkillType::Programming,
            SkillImportance::Critical,
            None,
        ));
        assert!(rec.recommended_actions.len() <= 5);
        assert_eq!(rec.recommended_actions.len(), 4);
    }

    #[test]
    fn test_duration_years_dominates() {
        let rec = build_recommendation(skill(
            "Python",
            SkillType::Programming,
            SkillImportance::Critical,
            Some(3),
        ));
        assert_eq!(rec.estimated_duration, "3-6 months");
    }

    #[test]
    fn test_duration_critical_without_years() {
        let rec = build_recommendation(skill(
            "Python",
            SkillType::Programming,
            SkillImportance::Critical,
            Some(2),
        ));
        assert_eq!(rec.estimated_duration, "4-8 weeks");
    }

    #[test]
    fn test_duration_default() {
        let rec = build_recommendation(skill(
            "CSS",
            SkillType::Programming,
            SkillImportance::Important,
            None,
        ));
        assert_eq!(rec.estimated_duration, "2-4 weeks");
    }

    #[test]
    fn test_training_difficulty_by_skill_type() {
        assert_eq!(
            training_difficulty(SkillType::SystemDesign),
            DifficultyLevel::Advanced
        );
        assert_eq!(
            training_difficulty(SkillType::Architecture),
            DifficultyLevel::Advanced
        );
        assert_eq!(
            training_difficulty(SkillType::Algorithms),
            DifficultyLevel::Intermediate
        );
        assert_eq!(
            training_difficulty(SkillType::Devops),
            DifficultyLevel::Intermediate
        );
        assert_eq!(
            training_difficulty(SkillType::Programming),
            DifficultyLevel::Beginner
        );
        assert_eq!(
            training_difficulty(SkillType::SoftSkill),
            DifficultyLevel::Beginner
        );
    }

    #[test]
    fn test_resources_and_metrics_capped_at_three() {
        let rec = build_recommendation(skill(
            "React",
            SkillType::Framework,
            SkillImportance::Important,
            None,
        ));
        assert!(rec.learning_resources.len() <= 3);
        assert!(rec.success_metrics.len() <= 3);
    }

    #[test]
    fn test_prerequisites_are_first_three_related_skills() {
        let mut s = skill(
            "React",
            SkillType::Framework,
            SkillImportance::Critical,
            None,
        );
        s.related_skills = vec![
            "javascript".to_string(),
            "typescript".to_string(),
            "jsx".to_string(),
            "redux".to_string(),
        ];
        let rec = build_recommendation(s);
        assert_eq!(rec.prerequisite_skills, vec!["javascript", "typescript", "jsx"]);
    }

    #[test]
    fn test_priority_derived_from_importance() {
        let rec = build_recommendation(skill(
            "Python",
            SkillType::Programming,
            SkillImportance::Important,
            None,
        ));
        assert_eq!(rec.priority, TrainingPriority::High);

        let rec = build_recommendation(skill(
            "Vim",
            SkillType::Tools,
            SkillImportance::NiceToHave,
            None,
        ));
        assert_eq!(rec.priority, TrainingPriority::Low);
    }

    #[test]
    fn test_recommendations_sorted_by_priority_then_importance() {
        let skills = vec![
            skill("D", SkillType::Tools, SkillImportance::NiceToHave, None),
            skill("B", SkillType::Tools, SkillImportance::Important, None),
            skill("C", SkillType::Tools, SkillImportance::Preferred, None),
            skill("A", SkillType::Tools, SkillImportance::Critical, None),
        ];
        let recs = generate_recommendations(skills);
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        // Critical and Important both map to High priority; the importance
        // rank breaks the tie.
        assert_eq!(names, vec!["A", "B", "C", "D"]);

        for pair in recs.windows(2) {
            let a = (pair[0].priority.rank(), pair[0].importance.rank());
            let b = (pair[1].priority.rank(), pair[1].importance.rank());
            assert!(a <= b, "output must be sorted non-decreasing");
        }
    }

    #[test]
    fn test_recommendations_never_exceed_cap() {
        let skills: Vec<NormalizedSkill> = (0..40)
            .map(|i| {
                skill(
                    &format!("Skill{i}"),
                    SkillType::Programming,
                    SkillImportance::Critical,
                    None,
                )
            })
            .collect();
        let recs = generate_recommendations(skills);
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
    }
}
