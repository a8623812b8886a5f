//! @acp:module "Roadmap Generator"
//! @acp:summary "Assembles phased roadmaps from recommendation working sets"
//! @acp:domain roadmap
//! @acp:layer service
//!
//! # Pipeline
//!
//! ```text
//! recommendations
//!   -> prioritize            (priority recomputed from content)
//!   -> identify dependencies (heuristic rule table)
//!   -> dependency graph      (ids -> depended-upon ids)
//!   -> topological order     (cycle edges skipped)
//!   -> phases + estimates, critical path, quick wins
//! ```
//!
//! Every step is pure and total: any input, including cyclic dependency
//! sets, yields a well-formed [`Roadmap`].

pub mod estimate;
pub mod phases;
pub mod quick_wins;

pub use estimate::{estimate_phase, estimate_recommendation, estimate_total};
pub use phases::{build_phases, phase_description, phase_name};
pub use quick_wins::select_quick_wins;

use std::collections::HashMap;

use crate::config::RoadmapConfig;
use crate::dependencies::{DependencyExtractor, RelatedPackages};
use crate::graph::{critical_path, DependencyGraph};
use crate::model::{Dependency, Recommendation, Roadmap};
use crate::scoring::prioritize_with;

/// @acp:summary "Configured roadmap engine"
/// @acp:lock normal
#[derive(Debug)]
pub struct RoadmapGenerator {
    config: RoadmapConfig,
    extractor: DependencyExtractor,
}

impl Default for RoadmapGenerator {
    fn default() -> Self {
        Self::new(RoadmapConfig::default())
    }
}

impl RoadmapGenerator {
    /// Generator for the given (normalized) configuration
    pub fn new(config: RoadmapConfig) -> Self {
        let config = config.normalized();
        let related = RelatedPackages::builtin().with_pairs(config.related_packages.iter().cloned());
        Self {
            extractor: DependencyExtractor::new().with_related(related),
            config,
        }
    }

    pub fn config(&self) -> &RoadmapConfig {
        &self.config
    }

    /// Copies with priority recomputed under this generator's weights
    pub fn prioritize(&self, recs: &[Recommendation]) -> Vec<Recommendation> {
        prioritize_with(recs, &self.config.scoring)
    }

    pub fn identify_dependencies(&self, recs: &[Recommendation]) -> Vec<Dependency> {
        self.extractor.extract(recs)
    }

    /// @acp:summary "Full pipeline: prioritize, infer dependencies, build"
    pub fn generate(&self, recs: &[Recommendation]) -> Roadmap {
        let prioritized = self.prioritize(recs);
        let dependencies = self.identify_dependencies(&prioritized);
        tracing::debug!(
            "Inferred {} dependency entries for {} recommendations",
            dependencies.len(),
            prioritized.len()
        );
        self.build(&prioritized, &dependencies)
    }

    /// @acp:summary "Assemble a roadmap from caller-supplied dependencies"
    ///
    /// Recommendations are taken as given (priorities are not recomputed).
    /// Dependencies may be cyclic; cycle-closing edges are skipped.
    pub fn build(&self, recs: &[Recommendation], dependencies: &[Dependency]) -> Roadmap {
        let graph = DependencyGraph::build(recs, dependencies);
        let order = graph.order();

        // First occurrence wins, matching the graph
        let mut by_id: HashMap<&str, &Recommendation> = HashMap::with_capacity(recs.len());
        let mut unique: Vec<Recommendation> = Vec::with_capacity(recs.len());
        for rec in recs {
            if !by_id.contains_key(rec.id.as_str()) {
                by_id.insert(rec.id.as_str(), rec);
                unique.push(rec.clone());
            }
        }

        let phases = build_phases(&order, &by_id, &self.config);
        let total_estimated_time = estimate_total(&phases, &self.config.estimation);

        let critical_path: Vec<String> = critical_path(&graph, &order)
            .iter()
            .filter_map(|id| by_id.get(id.as_str()).map(|rec| rec.title.clone()))
            .collect();

        let quick_wins = select_quick_wins(&unique, dependencies, &self.config.quick_wins);

        tracing::debug!(
            "Roadmap: {} phases, {} quick wins, critical path of {}, {} cycle edges skipped",
            phases.len(),
            quick_wins.len(),
            critical_path.len(),
            order.dropped_edges().len()
        );

        Roadmap {
            phases,
            total_estimated_time,
            critical_path,
            quick_wins,
        }
    }
}

/// @acp:summary "Generate a roadmap with default configuration"
pub fn generate_roadmap(recs: &[Recommendation]) -> Roadmap {
    RoadmapGenerator::default().generate(recs)
}

/// @acp:summary "Build a roadmap from explicit dependencies with default configuration"
pub fn build_roadmap(recs: &[Recommendation], dependencies: &[Dependency]) -> Roadmap {
    RoadmapGenerator::default().build(recs, dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Confidence, Effort, Priority, RecommendationType};

    fn react_pair() -> Vec<Recommendation> {
        vec![
            Recommendation::new("r1", RecommendationType::Framework, "Upgrade React to 18")
                .with_states("react@16", "react@18")
                .with_description("Major release with breaking changes in rendering"),
            Recommendation::new("r2", RecommendationType::Dependency, "Update react-router")
                .with_states("react-router@5.0.0", "react-router@6.0.0")
                .with_description("Router for react applications")
                .with_effort(Effort::Low),
        ]
    }

    #[test]
    fn test_framework_before_dependent_package() {
        let roadmap = generate_roadmap(&react_pair());

        assert_eq!(roadmap.phases.len(), 2);
        assert_eq!(roadmap.phases[0].recommendations[0].id, "r1");
        assert_eq!(roadmap.phases[0].recommendations[0].priority, Priority::High);
        assert_eq!(roadmap.phases[1].recommendations[0].id, "r2");
        assert_eq!(roadmap.phases[1].prerequisites, vec![1]);
        assert_eq!(
            roadmap.critical_path,
            vec!["Update react-router".to_string(), "Upgrade React to 18".to_string()]
        );
    }

    #[test]
    fn test_empty_input() {
        let roadmap = generate_roadmap(&[]);

        assert!(roadmap.phases.is_empty());
        assert_eq!(roadmap.total_estimated_time.min_days, 0.0);
        assert_eq!(roadmap.total_estimated_time.max_days, 0.0);
        assert!(roadmap.critical_path.is_empty());
        assert!(roadmap.quick_wins.is_empty());
    }

    #[test]
    fn test_two_cycle_completes() {
        let recs = vec![
            Recommendation::new("a", RecommendationType::Pattern, "A"),
            Recommendation::new("b", RecommendationType::Pattern, "B"),
        ];
        let deps = vec![
            Dependency::new("a", vec!["b".into()], "a needs b"),
            Dependency::new("b", vec!["a".into()], "b needs a"),
        ];

        let roadmap = build_roadmap(&recs, &deps);
        let ids: Vec<_> = roadmap.recommendations().map(|r| r.id.as_str()).collect();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"a") && ids.contains(&"b"));
        assert_eq!(roadmap.critical_path.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let recs = vec![
            Recommendation::new("a", RecommendationType::Pattern, "first"),
            Recommendation::new("a", RecommendationType::Pattern, "second"),
        ];
        let roadmap = build_roadmap(&recs, &[]);

        assert_eq!(roadmap.recommendations().count(), 1);
        assert_eq!(roadmap.phases[0].recommendations[0].title, "first");
    }

    #[test]
    fn test_total_is_sum_of_phases() {
        let roadmap = generate_roadmap(&react_pair());
        let min: f64 = roadmap.phases.iter().map(|p| p.estimated_time.min_days).sum();
        let max: f64 = roadmap.phases.iter().map(|p| p.estimated_time.max_days).sum();

        assert_eq!(roadmap.total_estimated_time.min_days, min);
        assert_eq!(roadmap.total_estimated_time.max_days, max);
        assert_eq!(roadmap.total_estimated_time.confidence, Confidence::High);
    }

    #[test]
    fn test_generator_uses_configured_pairs() {
        let config = RoadmapConfig {
            related_packages: vec![["left-pad".to_string(), "string-utils".to_string()]],
            ..RoadmapConfig::default()
        };
        let generator = RoadmapGenerator::new(config);

        let recs = vec![
            Recommendation::new("pad", RecommendationType::Dependency, "Update left-pad")
                .with_states("left-pad@1.0.0", "left-pad@1.3.0")
                .with_priority(Priority::Low),
            Recommendation::new("utils", RecommendationType::Dependency, "Update string-utils")
                .with_states("string-utils@2.0.0", "string-utils@3.0.0")
                .with_priority(Priority::High),
        ];

        let deps = generator.identify_dependencies(&recs);
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].recommendation_id, "pad");
        assert_eq!(deps[0].depends_on, vec!["utils".to_string()]);
    }
}
