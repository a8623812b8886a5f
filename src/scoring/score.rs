//! @acp:module "Recommendation Scoring"
//! @acp:summary "Numeric score and priority classification for recommendations"
//! @acp:domain roadmap
//! @acp:layer logic

use super::rules;
use crate::config::ScoringConfig;
use crate::model::{Priority, Recommendation};

/// Calculate a recommendation's score with default weights
///
/// Note: Scores are unbounded weighted sums. The security bonus is chosen
/// larger than any reachable non-security score, so a security item always
/// outranks a non-security item of the same type and effort.
pub fn score_recommendation(rec: &Recommendation) -> f64 {
    score_with(rec, &ScoringConfig::default())
}

/// Calculate a recommendation's score with explicit weights
pub fn score_with(rec: &Recommendation, weights: &ScoringConfig) -> f64 {
    let security = if rec.has_security_benefit() {
        weights.security_bonus
    } else {
        0.0
    };

    let benefits = rec.benefits.len().min(weights.benefit_cap) as f64;

    security
        + weights.type_weight(rec.kind)
        + weights.effort_weight(rec.effort)
        + benefits * weights.benefit_weight
}

/// Classify a recommendation with default weights
pub fn calculate_priority(rec: &Recommendation) -> Priority {
    classify_with(rec, &ScoringConfig::default())
}

/// Classify a recommendation: first matching rule, else score threshold
pub fn classify_with(rec: &Recommendation, weights: &ScoringConfig) -> Priority {
    if let Some(rule) = rules::first_match(rec) {
        tracing::trace!("{} classified {} by rule {}", rec.id, rule.outcome, rule.name);
        return rule.outcome;
    }

    if score_with(rec, weights) >= weights.medium_threshold {
        Priority::Medium
    } else {
        Priority::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Effort, RecommendationType};

    #[test]
    fn test_score_components() {
        let rec = Recommendation::new("r", RecommendationType::Framework, "Upgrade")
            .with_effort(Effort::Low)
            .with_benefits(["a", "b", "c"]);
        // 30 (framework) + 30 (low effort) + 3 * 5 (benefits) = 75
        assert_eq!(score_recommendation(&rec), 75.0);
    }

    #[test]
    fn test_benefits_are_capped() {
        let many: Vec<String> = (0..40).map(|i| format!("benefit {}", i)).collect();
        let rec = Recommendation::new("r", RecommendationType::Pattern, "Refactor")
            .with_effort(Effort::Low)
            .with_benefits(many);
        assert_eq!(score_recommendation(&rec), 10.0 + 30.0 + 25.0);
    }

    #[test]
    fn test_security_bonus_outranks() {
        let weights = ScoringConfig::default();
        let secure = Recommendation::new("s", RecommendationType::Pattern, "Sanitize")
            .with_effort(Effort::High)
            .with_benefits(["Improves security"]);
        let regular = Recommendation::new("r", RecommendationType::Pattern, "Refactor")
            .with_effort(Effort::High)
            .with_benefits(vec!["x"; 10]);

        assert!(score_recommendation(&secure) >= 100.0);
        assert!(score_with(&secure, &weights) > score_with(&regular, &weights));
    }

    #[test]
    fn test_patch_update_is_low() {
        let rec = Recommendation::new("r", RecommendationType::Dependency, "Update lodash")
            .with_description("A patch version update is available")
            .with_effort(Effort::Low)
            .with_benefits(["Bug fixes"]);
        assert_eq!(calculate_priority(&rec), Priority::Low);
    }

    #[test]
    fn test_framework_with_benefits_is_medium() {
        let rec = Recommendation::new("r", RecommendationType::Framework, "Upgrade Vue")
            .with_description("A minor release is available")
            .with_effort(Effort::Low)
            .with_benefits(["Faster", "Smaller", "Better types"]);
        assert_eq!(calculate_priority(&rec), Priority::Medium);
    }

    #[test]
    fn test_breaking_change_is_high() {
        let rec = Recommendation::new("r", RecommendationType::Framework, "Upgrade React")
            .with_states("react@16", "react@18")
            .with_description("Major upgrade with breaking changes requiring code modification");
        assert_eq!(calculate_priority(&rec), Priority::High);
    }

    #[test]
    fn test_critical_vulnerability_is_critical() {
        let rec = Recommendation::new("r", RecommendationType::Dependency, "Update axios")
            .with_description("Fixes a critical security vulnerability (CVE-2023-45857)")
            .with_effort(Effort::Low);
        assert_eq!(calculate_priority(&rec), Priority::Critical);
    }

    #[test]
    fn test_priority_is_deterministic() {
        let rec = Recommendation::new("r", RecommendationType::Pattern, "Replace var")
            .with_description("Replace var declarations with let/const")
            .with_benefits(["Block scoping"]);
        assert_eq!(calculate_priority(&rec), calculate_priority(&rec.clone()));
    }
}
