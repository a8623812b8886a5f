//! @acp:module "Recommendation Ranking"
//! @acp:summary "Priority recomputation and stable ranking"
//! @acp:domain roadmap
//! @acp:layer logic

use super::score::{classify_with, score_with};
use crate::config::ScoringConfig;
use crate::model::Recommendation;

/// Copies of `recs` with priority recomputed from content
pub fn prioritize(recs: &[Recommendation]) -> Vec<Recommendation> {
    prioritize_with(recs, &ScoringConfig::default())
}

pub fn prioritize_with(recs: &[Recommendation], weights: &ScoringConfig) -> Vec<Recommendation> {
    recs.iter()
        .map(|rec| {
            let mut rec = rec.clone();
            rec.priority = classify_with(&rec, weights);
            rec
        })
        .collect()
}

/// Rank recommendations by priority class, then score (both descending)
///
/// Returns a new vector; the input and its order are untouched. Equal
/// keys keep their input order.
pub fn rank_recommendations(recs: &[Recommendation]) -> Vec<Recommendation> {
    rank_with(recs, &ScoringConfig::default())
}

pub fn rank_with(recs: &[Recommendation], weights: &ScoringConfig) -> Vec<Recommendation> {
    let mut keyed: Vec<(u8, f64, &Recommendation)> = recs
        .iter()
        .map(|rec| (rec.priority.rank(), score_with(rec, weights), rec))
        .collect();

    // sort_by is stable
    keyed.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal))
    });

    keyed.into_iter().map(|(_, _, rec)| rec.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Effort, Priority, RecommendationType};

    fn rec(id: &str, priority: Priority, effort: Effort) -> Recommendation {
        Recommendation::new(id, RecommendationType::Dependency, id)
            .with_priority(priority)
            .with_effort(effort)
    }

    #[test]
    fn test_rank_by_priority_then_score() {
        let input = vec![
            rec("low", Priority::Low, Effort::Low),
            rec("high-costly", Priority::High, Effort::High),
            rec("critical", Priority::Critical, Effort::High),
            rec("high-cheap", Priority::High, Effort::Low),
        ];

        let ids: Vec<_> = rank_recommendations(&input)
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["critical", "high-cheap", "high-costly", "low"]);
    }

    #[test]
    fn test_rank_is_stable_and_non_mutating() {
        let input = vec![
            rec("a", Priority::Medium, Effort::Medium),
            rec("b", Priority::Medium, Effort::Medium),
            rec("c", Priority::Medium, Effort::Medium),
        ];
        let snapshot = input.clone();

        let ranked = rank_recommendations(&input);
        assert_eq!(ranked, snapshot);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank_recommendations(&[]).is_empty());
    }

    #[test]
    fn test_prioritize_overrides_asserted_priority() {
        let input = vec![Recommendation::new("r", RecommendationType::Dependency, "lodash")
            .with_description("A patch version update is available")
            .with_effort(Effort::Low)
            .with_benefits(["Bug fixes"])
            .with_priority(Priority::Critical)];

        let prioritized = prioritize(&input);
        assert_eq!(prioritized[0].priority, Priority::Low);
        assert_eq!(input[0].priority, Priority::Critical);
    }
}
