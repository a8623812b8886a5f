//! @acp:module "Topological Order"
//! @acp:summary "Cycle-tolerant depth-first linearization and depth calculation"
//! @acp:domain roadmap
//! @acp:layer logic
//!
//! A depth-first traversal with a three-state marker per node. Reaching a
//! node that is still in progress closes a cycle: that edge is skipped and
//! recorded, and traversal continues. The edges kept form a DAG, and
//! depths are computed over them only.

use std::collections::HashMap;

use super::DependencyGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// @acp:summary "Linear order plus the acyclic edge set it respects"
#[derive(Debug, Clone, Default)]
pub struct TopologicalOrder {
    /// Every id exactly once; dependencies before dependents
    order: Vec<String>,
    /// Edges kept by the traversal
    retained: HashMap<String, Vec<String>>,
    /// (from, to) edges skipped because they closed a cycle
    dropped: Vec<(String, String)>,
}

impl TopologicalOrder {
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// Dependencies of `id` that survived cycle breaking
    pub fn retained(&self, id: &str) -> &[String] {
        self.retained.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cycle-closing edges that were skipped
    pub fn dropped_edges(&self) -> &[(String, String)] {
        &self.dropped
    }

    pub fn has_cycles(&self) -> bool {
        !self.dropped.is_empty()
    }

    /// @acp:summary "Longest retained dependency chain per id"
    ///
    /// 0 for ids without retained dependencies, else 1 + the maximum depth
    /// of those dependencies.
    pub fn depths(&self) -> HashMap<String, usize> {
        let mut depths: HashMap<String, usize> = HashMap::with_capacity(self.order.len());

        for id in &self.order {
            let depth = self
                .retained(id)
                .iter()
                .map(|dep| depths.get(dep).copied().unwrap_or(0) + 1)
                .max()
                .unwrap_or(0);
            depths.insert(id.clone(), depth);
        }

        depths
    }
}

/// @acp:summary "Linearize the graph, skipping cycle-closing edges"
///
/// Runs in O(V + E) with an explicit stack, so deep chains cannot
/// overflow the call stack.
pub fn topological_order(graph: &DependencyGraph) -> TopologicalOrder {
    let mut marks: HashMap<&str, Mark> = graph
        .ids()
        .iter()
        .map(|id| (id.as_str(), Mark::Unvisited))
        .collect();

    let mut result = TopologicalOrder {
        order: Vec::with_capacity(graph.node_count()),
        retained: HashMap::with_capacity(graph.node_count()),
        dropped: Vec::new(),
    };

    for start in graph.ids() {
        if marks.get(start.as_str()) != Some(&Mark::Unvisited) {
            continue;
        }

        marks.insert(start.as_str(), Mark::InProgress);
        let mut stack: Vec<(&str, usize)> = vec![(start.as_str(), 0)];

        while let Some(&(node, next)) = stack.last() {
            let deps = graph.dependencies(node);

            if next < deps.len() {
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }

                let dep = deps[next].as_str();
                match marks.get(dep).copied().unwrap_or(Mark::Done) {
                    Mark::Unvisited => {
                        keep_edge(&mut result, node, dep);
                        marks.insert(dep, Mark::InProgress);
                        stack.push((dep, 0));
                    }
                    Mark::InProgress => {
                        tracing::debug!("Dropping cycle edge {} -> {}", node, dep);
                        result.dropped.push((node.to_string(), dep.to_string()));
                    }
                    Mark::Done => keep_edge(&mut result, node, dep),
                }
            } else {
                marks.insert(node, Mark::Done);
                result.order.push(node.to_string());
                stack.pop();
            }
        }
    }

    result
}

fn keep_edge(result: &mut TopologicalOrder, from: &str, to: &str) {
    result
        .retained
        .entry(from.to_string())
        .or_default()
        .push(to.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dependency, Recommendation, RecommendationType};

    fn graph(ids: &[&str], edges: &[(&str, &str)]) -> DependencyGraph {
        let recs: Vec<_> = ids
            .iter()
            .map(|id| Recommendation::new(*id, RecommendationType::Pattern, *id))
            .collect();
        let deps: Vec<_> = edges
            .iter()
            .map(|(from, to)| Dependency::new(*from, vec![to.to_string()], ""))
            .collect();
        DependencyGraph::build(&recs, &deps)
    }

    fn position(order: &TopologicalOrder, id: &str) -> usize {
        order.ids().iter().position(|x| x == id).unwrap()
    }

    #[test]
    fn test_dependencies_come_first() {
        let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        let order = topological_order(&g);

        assert_eq!(order.ids(), &["c".to_string(), "b".to_string(), "a".to_string()]);
        assert!(!order.has_cycles());
    }

    #[test]
    fn test_isolated_nodes_keep_input_order() {
        let g = graph(&["x", "y", "z"], &[]);
        let order = topological_order(&g);
        assert_eq!(order.ids(), &["x".to_string(), "y".to_string(), "z".to_string()]);
    }

    #[test]
    fn test_two_cycle_drops_one_edge() {
        let g = graph(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let order = topological_order(&g);

        assert_eq!(order.ids().len(), 2);
        assert_eq!(order.dropped_edges(), &[("b".to_string(), "a".to_string())]);
        assert!(position(&order, "b") < position(&order, "a"));
    }

    #[test]
    fn test_full_cycle_every_id_once() {
        let g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        let order = topological_order(&g);

        let mut ids = order.ids().to_vec();
        ids.sort();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(order.dropped_edges().len(), 1);
    }

    #[test]
    fn test_depths_longest_chain() {
        // d depends on a directly and through b -> c
        let g = graph(
            &["a", "b", "c", "d"],
            &[("d", "a"), ("d", "b"), ("b", "c"), ("c", "a")],
        );
        let depths = topological_order(&g).depths();

        assert_eq!(depths["a"], 0);
        assert_eq!(depths["c"], 1);
        assert_eq!(depths["b"], 2);
        assert_eq!(depths["d"], 3);
    }

    #[test]
    fn test_depths_ignore_dropped_edges() {
        let g = graph(&["a", "b"], &[("a", "b"), ("b", "a")]);
        let depths = topological_order(&g).depths();

        assert_eq!(depths["b"], 0);
        assert_eq!(depths["a"], 1);
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let ids: Vec<String> = (0..20_000).map(|i| format!("n{}", i)).collect();
        let recs: Vec<_> = ids
            .iter()
            .map(|id| Recommendation::new(id.clone(), RecommendationType::Pattern, id.clone()))
            .collect();
        let deps: Vec<_> = ids
            .windows(2)
            .map(|w| Dependency::new(w[0].clone(), vec![w[1].clone()], ""))
            .collect();

        let order = topological_order(&DependencyGraph::build(&recs, &deps));
        assert_eq!(order.ids().len(), 20_000);
        assert_eq!(order.ids()[0], "n19999");
    }
}
