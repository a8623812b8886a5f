//! @acp:module "Dependency Graph"
//! @acp:summary "Adjacency structure over recommendation ids"
//! @acp:domain roadmap
//! @acp:layer model
//!
//! Every recommendation id is a node, including those without
//! dependencies. Edges point from a recommendation to the recommendations
//! it depends on. All traversal state is local to a call.

mod order;
mod path;

pub use order::{topological_order, TopologicalOrder};
pub use path::critical_path;

use std::collections::HashMap;

use crate::model::{Dependency, Recommendation};

/// @acp:summary "id -> depended-upon ids, in first-seen order"
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Node ids in input order
    ids: Vec<String>,
    /// Dependencies: node -> nodes it depends on
    edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// @acp:summary "Build the graph for a working set"
    ///
    /// Duplicate ids keep their first occurrence. Self-edges, repeated
    /// edges and edges naming unknown ids are discarded.
    pub fn build(recs: &[Recommendation], dependencies: &[Dependency]) -> Self {
        let mut graph = Self::default();

        for rec in recs {
            if graph.edges.contains_key(&rec.id) {
                tracing::warn!("Duplicate recommendation id {:?} ignored", rec.id);
                continue;
            }
            graph.ids.push(rec.id.clone());
            graph.edges.insert(rec.id.clone(), Vec::new());
        }

        for dependency in dependencies {
            if !graph.edges.contains_key(&dependency.recommendation_id) {
                tracing::debug!(
                    "Dependency for unknown recommendation {:?} ignored",
                    dependency.recommendation_id
                );
                continue;
            }
            for target in &dependency.depends_on {
                graph.add_edge(&dependency.recommendation_id, target);
            }
        }

        graph
    }

    /// Add a dependency edge: `from` depends on `to`
    fn add_edge(&mut self, from: &str, to: &str) {
        if from == to || !self.edges.contains_key(to) {
            return;
        }
        if let Some(targets) = self.edges.get_mut(from) {
            if !targets.iter().any(|t| t == to) {
                targets.push(to.to_string());
            }
        }
    }

    /// Node ids in input order
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    /// Ids the given node depends on (empty for unknown ids)
    pub fn dependencies(&self, id: &str) -> &[String] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Cycle-tolerant topological order of this graph
    pub fn order(&self) -> TopologicalOrder {
        topological_order(self)
    }

    /// (from, to) edges the orderer skips because they close a cycle
    pub fn dropped_edges(&self) -> Vec<(String, String)> {
        self.order().dropped_edges().to_vec()
    }
}
