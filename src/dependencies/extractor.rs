//! @acp:module "Dependency Extractor"
//! @acp:summary "Runs the dependency rule table over a working set"
//! @acp:domain roadmap
//! @acp:layer service

use super::package::RelatedPackages;
use super::rules::{default_rules, DependencyRule, ExtractionContext};
use crate::model::{Dependency, Recommendation};

/// @acp:summary "Infers Dependency facts from recommendation content"
pub struct DependencyExtractor {
    rules: Vec<Box<dyn DependencyRule>>,
    related: RelatedPackages,
}

impl Default for DependencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DependencyExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyExtractor")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .field("related", &self.related)
            .finish()
    }
}

impl DependencyExtractor {
    /// Extractor with the built-in rules and package pairs
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            related: RelatedPackages::builtin(),
        }
    }

    /// Replace the related-package table
    pub fn with_related(mut self, related: RelatedPackages) -> Self {
        self.related = related;
        self
    }

    /// Append a custom rule after the built-in ones
    pub fn with_rule(mut self, rule: Box<dyn DependencyRule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// @acp:summary "Infer dependencies for every recommendation"
    ///
    /// Recommendations without any triggered rule get no entry. Targets are
    /// de-duplicated in first-seen order and self-references dropped.
    pub fn extract(&self, recs: &[Recommendation]) -> Vec<Dependency> {
        let ctx = ExtractionContext::new(recs, &self.related);
        let mut dependencies = Vec::new();

        for (index, rec) in recs.iter().enumerate() {
            let mut depends_on: Vec<String> = Vec::new();
            let mut reasons: Vec<String> = Vec::new();

            for rule in &self.rules {
                for edge in rule.infer(index, &ctx) {
                    if edge.target_id == rec.id {
                        continue;
                    }
                    tracing::trace!(
                        "{} -> {} via {}",
                        rec.id,
                        edge.target_id,
                        rule.name()
                    );
                    if !depends_on.contains(&edge.target_id) {
                        depends_on.push(edge.target_id);
                    }
                    if !reasons.contains(&edge.reason) {
                        reasons.push(edge.reason);
                    }
                }
            }

            if !depends_on.is_empty() {
                dependencies.push(Dependency::new(rec.id.clone(), depends_on, reasons.join("; ")));
            }
        }

        tracing::debug!(
            "Inferred dependencies for {} of {} recommendations",
            dependencies.len(),
            recs.len()
        );

        dependencies
    }
}

/// Infer dependencies with the built-in rules
pub fn identify_dependencies(recs: &[Recommendation]) -> Vec<Dependency> {
    DependencyExtractor::new().extract(recs)
}
