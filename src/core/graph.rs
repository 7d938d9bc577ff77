//! The abstract graph interface consumed by the Dijkstra driver.
//!
//! The original implementation enumerated edges through a C-style callback
//! and an untyped context pointer. This crate follows the redesign recorded
//! in the design notes: the graph yields `(neighbour, weight)` pairs as a
//! borrowing iterator, which keeps edge enumeration O(1) per edge without an
//! untyped context.

use super::types::{Cost32, NodeId};

/// A read-only graph borrowed for the duration of a single search.
///
/// Implementors must enumerate a deterministic (though unspecified) edge
/// order for a given node and yield only strictly positive edge weights.
pub trait Graph {
    /// Number of vertices; vertex ids are `0..num_nodes()`.
    fn num_nodes(&self) -> usize;

    /// Outgoing edges of `u` as `(neighbour, weight)` pairs. `weight` must be
    /// strictly positive.
    fn edges(&self, u: NodeId) -> Box<dyn Iterator<Item = (NodeId, Cost32)> + '_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal adjacency-list graph used across the test suite.
    pub struct ListGraph {
        adj: Vec<Vec<(NodeId, Cost32)>>,
    }

    impl ListGraph {
        pub fn new(n: usize) -> Self {
            Self { adj: vec![Vec::new(); n] }
        }

        pub fn add_undirected(&mut self, a: NodeId, b: NodeId, w: Cost32) {
            self.adj[a as usize].push((b, w));
            self.adj[b as usize].push((a, w));
        }

        pub fn add_directed(&mut self, a: NodeId, b: NodeId, w: Cost32) {
            self.adj[a as usize].push((b, w));
        }
    }

    impl Graph for ListGraph {
        fn num_nodes(&self) -> usize {
            self.adj.len()
        }

        fn edges(&self, u: NodeId) -> Box<dyn Iterator<Item = (NodeId, Cost32)> + '_> {
            Box::new(self.adj[u as usize].iter().copied())
        }
    }

    #[test]
    fn list_graph_enumerates_both_directions() {
        let mut g = ListGraph::new(3);
        g.add_undirected(0, 1, 5);
        let mut edges: Vec<_> = g.edges(0).collect();
        edges.sort();
        assert_eq!(edges, vec![(1, 5)]);
        let mut edges1: Vec<_> = g.edges(1).collect();
        edges1.sort();
        assert_eq!(edges1, vec![(0, 5)]);
    }
}
