//! @acp:module "Critical Path"
//! @acp:summary "Longest dependency chain search"
//! @acp:domain roadmap
//! @acp:layer logic
//!
//! The path starts at a recommendation and follows depends-on edges, so
//! its last element is the deepest prerequisite. Length is counted in
//! nodes; on ties the start encountered first in input order wins, and
//! within one start the earliest dependency edge wins.
//!
//! The search runs over the edges the orderer retained. Cycle-closing
//! edges are excluded, which keeps the pass linear and iterative on any
//! input, cyclic or not.

use std::collections::HashMap;

use super::{DependencyGraph, TopologicalOrder};

/// @acp:summary "Ids along the longest dependency chain"
///
/// Memoized longest-path pass in O(V + E) over the retained edges of
/// `order`. Dependencies precede dependents in the order, so each id is
/// resolved after everything it depends on.
pub fn critical_path(graph: &DependencyGraph, order: &TopologicalOrder) -> Vec<String> {
    if graph.node_count() == 0 {
        return Vec::new();
    }

    // id -> (node count of the longest path starting here, next hop)
    let mut best: HashMap<&str, (usize, Option<&str>)> = HashMap::with_capacity(order.ids().len());

    for id in order.ids() {
        let mut length = 1;
        let mut next = None;
        for dep in order.retained(id) {
            let candidate = best.get(dep.as_str()).map(|(len, _)| *len).unwrap_or(1) + 1;
            if candidate > length {
                length = candidate;
                next = Some(dep.as_str());
            }
        }
        best.insert(id.as_str(), (length, next));
    }

    let mut start: Option<(&str, usize)> = None;
    for id in graph.ids() {
        let length = best.get(id.as_str()).map(|(len, _)| *len).unwrap_or(1);
        if start.map_or(true, |(_, longest)| length > longest) {
            start = Some((id.as_str(), length));
        }
    }

    let mut path = Vec::new();
    let mut cursor = start.map(|(id, _)| id);
    while let Some(id) = cursor {
        path.push(id.to_string());
        cursor = best.get(id).and_then(|(_, next)| *next);
    }
    path
}
