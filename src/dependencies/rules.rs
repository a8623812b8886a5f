//! @acp:module "Dependency Rules"
//! @acp:summary "Heuristic rules inferring depends-on edges between recommendations"
//! @acp:domain roadmap
//! @acp:layer logic
//!
//! Each rule inspects one recommendation against the whole working set
//! and proposes edges. Rules never fail: missing labels simply produce no
//! edges. False positives are an accepted approximation.

use super::package::{package_name, RelatedPackages};
use crate::model::{Recommendation, RecommendationType};

/// A proposed edge from the inspected recommendation to `target_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredEdge {
    pub target_id: String,
    pub reason: String,
}

/// @acp:summary "Shared lookup data for one extraction pass"
#[derive(Debug)]
pub struct ExtractionContext<'a> {
    pub recommendations: &'a [Recommendation],
    pub related: &'a RelatedPackages,
    /// Package name per recommendation, original case
    names: Vec<String>,
    /// Package name per recommendation, lowercased
    keys: Vec<String>,
}

impl<'a> ExtractionContext<'a> {
    pub fn new(recommendations: &'a [Recommendation], related: &'a RelatedPackages) -> Self {
        let names: Vec<String> = recommendations
            .iter()
            .map(|r| package_name(&r.current_state))
            .collect();
        let keys = names.iter().map(|n| n.to_lowercase()).collect();

        Self {
            recommendations,
            related,
            names,
            keys,
        }
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn key(&self, index: usize) -> &str {
        &self.keys[index]
    }

    /// Other recommendations of the given type, with their index
    fn others_of(
        &self,
        index: usize,
        kind: RecommendationType,
    ) -> impl Iterator<Item = (usize, &'a Recommendation)> + '_ {
        self.recommendations
            .iter()
            .enumerate()
            .filter(move |(j, r)| *j != index && r.kind == kind)
    }
}

/// Dependency rule trait - implement for each inference heuristic
pub trait DependencyRule: Send + Sync {
    /// Rule identifier, used in logs
    fn name(&self) -> &'static str;

    /// Edges inferred for the recommendation at `index`
    fn infer(&self, index: usize, ctx: &ExtractionContext<'_>) -> Vec<InferredEdge>;
}

/// Dependency/pattern items mentioning a framework depend on its upgrade
#[derive(Debug, Default)]
pub struct FrameworkMentionRule;

impl DependencyRule for FrameworkMentionRule {
    fn name(&self) -> &'static str {
        "framework-mention"
    }

    fn infer(&self, index: usize, ctx: &ExtractionContext<'_>) -> Vec<InferredEdge> {
        let rec = &ctx.recommendations[index];
        if !matches!(
            rec.kind,
            RecommendationType::Dependency | RecommendationType::Pattern
        ) {
            return Vec::new();
        }

        let text = format!("{} {}", rec.title, rec.description).to_lowercase();

        ctx.others_of(index, RecommendationType::Framework)
            .filter(|(j, _)| !ctx.key(*j).is_empty() && text.contains(ctx.key(*j)))
            .map(|(j, framework)| InferredEdge {
                target_id: framework.id.clone(),
                reason: format!("Requires {} to be upgraded first.", ctx.name(j)),
            })
            .collect()
    }
}

/// Related packages: the lower-priority one waits for the higher-priority one
#[derive(Debug, Default)]
pub struct RelatedPackageRule;

impl DependencyRule for RelatedPackageRule {
    fn name(&self) -> &'static str {
        "related-package"
    }

    fn infer(&self, index: usize, ctx: &ExtractionContext<'_>) -> Vec<InferredEdge> {
        let rec = &ctx.recommendations[index];
        if rec.kind != RecommendationType::Dependency || ctx.key(index).is_empty() {
            return Vec::new();
        }

        ctx.others_of(index, RecommendationType::Dependency)
            .filter(|(j, other)| {
                other.priority.rank() < rec.priority.rank()
                    && ctx.related.are_related(ctx.key(index), ctx.key(*j))
            })
            .map(|(j, other)| InferredEdge {
                target_id: other.id.clone(),
                reason: format!(
                    "{} should be upgraded before {}.",
                    ctx.name(j),
                    ctx.name(index)
                ),
            })
            .collect()
    }
}

/// Pattern items saying "requires <dep>" or "needs <dep>"
#[derive(Debug, Default)]
pub struct ExplicitMentionRule;

impl DependencyRule for ExplicitMentionRule {
    fn name(&self) -> &'static str {
        "explicit-mention"
    }

    fn infer(&self, index: usize, ctx: &ExtractionContext<'_>) -> Vec<InferredEdge> {
        let rec = &ctx.recommendations[index];
        if rec.kind != RecommendationType::Pattern {
            return Vec::new();
        }

        let mut text = format!("{} {}", rec.title, rec.description);
        for step in &rec.migration_steps {
            text.push(' ');
            text.push_str(step);
        }
        let text = text.to_lowercase();

        ctx.others_of(index, RecommendationType::Dependency)
            .filter(|(j, _)| {
                let key = ctx.key(*j);
                !key.is_empty()
                    && (text.contains(&format!("requires {}", key))
                        || text.contains(&format!("needs {}", key)))
            })
            .map(|(j, dep)| InferredEdge {
                target_id: dep.id.clone(),
                reason: format!("Explicitly requires {}.", ctx.name(j)),
            })
            .collect()
    }
}

/// The built-in rule set, in evaluation order
pub fn default_rules() -> Vec<Box<dyn DependencyRule>> {
    vec![
        Box::new(FrameworkMentionRule),
        Box::new(RelatedPackageRule),
        Box::new(ExplicitMentionRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn framework(id: &str, state: &str) -> Recommendation {
        Recommendation::new(id, RecommendationType::Framework, format!("Upgrade {}", id))
            .with_states(state, "")
    }

    fn dependency(id: &str, state: &str, priority: Priority) -> Recommendation {
        Recommendation::new(id, RecommendationType::Dependency, format!("Update {}", id))
            .with_states(state, "")
            .with_priority(priority)
    }

    fn infer(rule: &dyn DependencyRule, recs: &[Recommendation], index: usize) -> Vec<InferredEdge> {
        let related = RelatedPackages::builtin();
        let ctx = ExtractionContext::new(recs, &related);
        rule.infer(index, &ctx)
    }

    #[test]
    fn test_framework_mention_matches_case_insensitive() {
        let recs = vec![
            framework("fw", "React@16.14.0"),
            Recommendation::new("dep", RecommendationType::Dependency, "Update react-dom")
                .with_description("Keeps REACT rendering in sync"),
        ];

        let edges = infer(&FrameworkMentionRule, &recs, 1);
        assert_eq!(
            edges,
            vec![InferredEdge {
                target_id: "fw".to_string(),
                reason: "Requires React to be upgraded first.".to_string(),
            }]
        );
    }

    #[test]
    fn test_framework_mention_skips_frameworks_and_empty_names() {
        let recs = vec![
            framework("fw1", ""),
            framework("fw2", "vue@2"),
            Recommendation::new("p", RecommendationType::Pattern, "Anything at all"),
        ];

        assert!(infer(&FrameworkMentionRule, &recs, 1).is_empty());
        assert!(infer(&FrameworkMentionRule, &recs, 2).is_empty());
    }

    #[test]
    fn test_related_package_lower_waits_for_higher() {
        let recs = vec![
            dependency("react", "react@16", Priority::High),
            dependency("react-dom", "react-dom@16", Priority::Medium),
        ];

        assert!(infer(&RelatedPackageRule, &recs, 0).is_empty());
        let edges = infer(&RelatedPackageRule, &recs, 1);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target_id, "react");
        assert_eq!(edges[0].reason, "react should be upgraded before react-dom.");
    }

    #[test]
    fn test_related_package_equal_priority_no_edge() {
        let recs = vec![
            dependency("vue", "vue@2", Priority::Medium),
            dependency("vuex", "vuex@3", Priority::Medium),
        ];

        assert!(infer(&RelatedPackageRule, &recs, 0).is_empty());
        assert!(infer(&RelatedPackageRule, &recs, 1).is_empty());
    }

    #[test]
    fn test_explicit_mention_reads_migration_steps() {
        let recs = vec![
            dependency("ts", "typescript@4.9", Priority::Medium),
            Recommendation::new("p", RecommendationType::Pattern, "Adopt satisfies operator")
                .with_migration_steps(["This refactor requires TypeScript 5"]),
        ];

        let edges = infer(&ExplicitMentionRule, &recs, 1);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target_id, "ts");
        assert_eq!(edges[0].reason, "Explicitly requires typescript.");
    }

    #[test]
    fn test_explicit_mention_only_for_patterns() {
        let recs = vec![
            dependency("ts", "typescript@4.9", Priority::Medium),
            dependency("other", "ts-node@9", Priority::Medium).with_description("needs typescript"),
        ];

        assert!(infer(&ExplicitMentionRule, &recs, 1).is_empty());
    }
}
