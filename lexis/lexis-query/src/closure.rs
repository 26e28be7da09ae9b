//! Lazy breadth-first closure over one or more relation kinds.

use lexis_core::{Depth, RelationKind};
use lexis_graph::{GraphNode, GraphStore};
use std::collections::{HashSet, VecDeque};

/// Nodes reachable from a start node by repeatedly following a set of
/// relation kinds.
///
/// Yields each node once, in first-discovery order by hop count. The start
/// node is expanded but never yielded, even when a cycle leads back to it.
/// Work is done one node at a time as the iterator is driven, so dropping it
/// early costs nothing. Cloning a fresh closure gives a restartable walk.
#[derive(Debug, Clone)]
pub struct Closure<'g, N: GraphNode> {
    store: &'g GraphStore,
    kinds: Vec<RelationKind>,
    depth: Depth,
    visited: HashSet<N>,
    frontier: VecDeque<(N, usize)>,
}

impl<'g, N: GraphNode> Closure<'g, N> {
    pub fn new(store: &'g GraphStore, start: N, kinds: Vec<RelationKind>, depth: Depth) -> Self {
        let mut closure = Self {
            store,
            kinds,
            depth,
            visited: HashSet::from([start]),
            frontier: VecDeque::new(),
        };
        closure.expand(start, 0);
        closure
    }

    /// Like `next`, also reporting how many hops from the start the node is.
    pub fn next_with_hops(&mut self) -> Option<(N, usize)> {
        let (node, hops) = self.frontier.pop_front()?;
        self.expand(node, hops);
        Some((node, hops))
    }

    fn expand(&mut self, node: N, hops: usize) {
        if !self.depth.allows(hops) {
            return;
        }
        for &kind in &self.kinds {
            for &next in node.related(self.store, kind) {
                if self.visited.insert(next) {
                    self.frontier.push_back((next, hops + 1));
                }
            }
        }
    }
}

impl<N: GraphNode> Iterator for Closure<'_, N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        self.next_with_hops().map(|(node, _)| node)
    }
}
