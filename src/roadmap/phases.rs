//! @acp:module "Phase Partitioner"
//! @acp:summary "Groups recommendations into ordered phases by dependency depth"
//! @acp:domain roadmap
//! @acp:layer logic
//!
//! # Partitioning Algorithm
//!
//! 1. **Depth** each id over the retained (acyclic) edges
//! 2. **Bucket** ids by ascending depth, one phase per bucket
//! 3. **Order** each bucket by type precedence, then descending score
//! 4. **Name** and **describe** each phase from its members
//! 5. **Estimate** each phase's duration

use std::collections::{BTreeMap, HashMap};

use super::estimate::estimate_phase;
use crate::config::RoadmapConfig;
use crate::graph::TopologicalOrder;
use crate::model::{Phase, Priority, Recommendation, RecommendationType};
use crate::scoring::score_with;

/// @acp:summary "Build numbered phases from a topological order"
///
/// `by_id` must hold every id in `order`; ids missing from it are skipped.
pub fn build_phases(
    order: &TopologicalOrder,
    by_id: &HashMap<&str, &Recommendation>,
    config: &RoadmapConfig,
) -> Vec<Phase> {
    let depths = order.depths();

    // Topological order within each bucket keeps the sort input deterministic
    let mut buckets: BTreeMap<usize, Vec<Recommendation>> = BTreeMap::new();
    for id in order.ids() {
        let Some(rec) = by_id.get(id.as_str()) else {
            continue;
        };
        let depth = depths.get(id).copied().unwrap_or(0);
        buckets.entry(depth).or_default().push((*rec).clone());
    }

    buckets
        .into_values()
        .enumerate()
        .map(|(index, mut recs)| {
            order_within_phase(&mut recs, config);
            let number = index + 1;

            Phase {
                number,
                name: phase_name(&recs),
                description: phase_description(&recs),
                estimated_time: estimate_phase(&recs, &config.estimation),
                prerequisites: if number > 1 { vec![number - 1] } else { Vec::new() },
                recommendations: recs,
            }
        })
        .collect()
}

/// Frameworks, then dependencies, then patterns; higher score first
fn order_within_phase(recs: &mut [Recommendation], config: &RoadmapConfig) {
    let mut keyed: Vec<(u8, f64, Recommendation)> = recs
        .iter()
        .map(|rec| (rec.kind.precedence(), score_with(rec, &config.scoring), rec.clone()))
        .collect();

    keyed.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal))
    });

    for (slot, (_, _, rec)) in recs.iter_mut().zip(keyed) {
        *slot = rec;
    }
}

/// @acp:summary "Phase name from its members"
pub fn phase_name(recs: &[Recommendation]) -> String {
    let name = if recs
        .iter()
        .any(|r| r.priority == Priority::Critical || r.has_security_benefit())
    {
        "Critical Security Updates"
    } else if recs.iter().any(|r| r.kind == RecommendationType::Framework) {
        "Framework Modernization"
    } else if recs.iter().all(|r| r.kind == RecommendationType::Dependency) {
        "Dependency Updates"
    } else if recs.iter().all(|r| r.kind == RecommendationType::Pattern) {
        "Code Pattern Modernization"
    } else {
        "Mixed Modernization Tasks"
    };

    name.to_string()
}

/// @acp:summary "Phase description: per-type counts and urgency flags"
pub fn phase_description(recs: &[Recommendation]) -> String {
    let count = |kind: RecommendationType| recs.iter().filter(|r| r.kind == kind).count();

    let mut parts = Vec::new();
    for (kind, singular) in [
        (RecommendationType::Framework, "framework upgrade"),
        (RecommendationType::Dependency, "dependency update"),
        (RecommendationType::Pattern, "code pattern change"),
    ] {
        let n = count(kind);
        if n > 0 {
            parts.push(format!("{} {}{}", n, singular, plural(n)));
        }
    }

    let mut description = if parts.is_empty() {
        "No recommendations.".to_string()
    } else {
        format!("Includes {}.", join_list(&parts))
    };

    let has_critical = recs.iter().any(|r| r.priority == Priority::Critical);
    let has_high = recs.iter().any(|r| r.priority == Priority::High);
    match (has_critical, has_high) {
        (true, true) => description.push_str(" Contains critical and high priority items."),
        (true, false) => description.push_str(" Contains critical priority items."),
        (false, true) => description.push_str(" Contains high priority items."),
        (false, false) => {}
    }

    description
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// "a", "a and b", "a, b and c"
fn join_list(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DependencyGraph;
    use crate::model::{Dependency, Effort};

    fn rec(id: &str, kind: RecommendationType) -> Recommendation {
        Recommendation::new(id, kind, id).with_priority(Priority::Medium)
    }

    #[test]
    fn test_phase_names() {
        let critical = vec![
            rec("a", RecommendationType::Pattern).with_priority(Priority::Critical),
            rec("b", RecommendationType::Framework),
        ];
        assert_eq!(phase_name(&critical), "Critical Security Updates");

        let secure = vec![rec("a", RecommendationType::Dependency).with_benefits(["Security fixes"])];
        assert_eq!(phase_name(&secure), "Critical Security Updates");

        let framework = vec![
            rec("a", RecommendationType::Framework),
            rec("b", RecommendationType::Pattern),
        ];
        assert_eq!(phase_name(&framework), "Framework Modernization");

        let deps = vec![rec("a", RecommendationType::Dependency)];
        assert_eq!(phase_name(&deps), "Dependency Updates");

        let patterns = vec![rec("a", RecommendationType::Pattern)];
        assert_eq!(phase_name(&patterns), "Code Pattern Modernization");

        let mixed = vec![
            rec("a", RecommendationType::Dependency),
            rec("b", RecommendationType::Pattern),
        ];
        assert_eq!(phase_name(&mixed), "Mixed Modernization Tasks");
    }

    #[test]
    fn test_phase_description() {
        let recs = vec![
            rec("a", RecommendationType::Framework).with_priority(Priority::High),
            rec("b", RecommendationType::Dependency),
            rec("c", RecommendationType::Dependency),
            rec("d", RecommendationType::Pattern),
        ];
        assert_eq!(
            phase_description(&recs),
            "Includes 1 framework upgrade, 2 dependency updates and 1 code pattern change. \
             Contains high priority items."
        );

        let single = vec![rec("a", RecommendationType::Pattern).with_priority(Priority::Critical)];
        assert_eq!(
            phase_description(&single),
            "Includes 1 code pattern change. Contains critical priority items."
        );
    }

    #[test]
    fn test_build_phases_orders_within_bucket() {
        let recs = vec![
            rec("pattern", RecommendationType::Pattern),
            rec("dep-costly", RecommendationType::Dependency).with_effort(Effort::High),
            rec("dep-cheap", RecommendationType::Dependency).with_effort(Effort::Low),
            rec("fw", RecommendationType::Framework),
            rec("after", RecommendationType::Pattern),
        ];
        let deps = vec![Dependency::new("after", vec!["fw".into()], "")];
        let graph = DependencyGraph::build(&recs, &deps);
        let by_id: HashMap<&str, &Recommendation> = recs.iter().map(|r| (r.id.as_str(), r)).collect();

        let phases = build_phases(&graph.order(), &by_id, &RoadmapConfig::default());

        assert_eq!(phases.len(), 2);
        let first: Vec<_> = phases[0].recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(first, vec!["fw", "dep-cheap", "dep-costly", "pattern"]);
        assert_eq!(phases[0].prerequisites, Vec::<usize>::new());
        assert_eq!(phases[1].number, 2);
        assert_eq!(phases[1].prerequisites, vec![1]);
        assert_eq!(phases[1].recommendations[0].id, "after");
    }
}
