//! The uniform contract every priority queue in this crate satisfies.

use crate::core::{Key, NodeId, PQMetrics};

/// A monotone-decrease priority queue keyed by [`Key`] over a dense
/// `NodeId` universe.
///
/// Implementations hold at most one logical entry per node: `push` for a
/// node already present behaves as `decrease`, and after `pop` returns `u`,
/// `contains(u)` is false until the next `push(u, ..)`.
///
/// `top`/`pop` on an empty queue are programmer errors (the Dijkstra driver
/// never calls them on an empty queue) and panic.
pub trait PriorityQueue {
    /// Ensure later operations on any `u < n` do not reallocate node-indexed
    /// metadata. Implementations also tolerate pushing a node beyond `n`
    /// (opportunistic growth).
    fn reserve(&mut self, n: usize);

    /// Remove every entry and reset internal cursors. Does not reset
    /// metrics; call [`reset_metrics`](PriorityQueue::reset_metrics) for that.
    fn clear(&mut self);

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Insert `u` with key `k`, or, if `u` is already present, decrease its
    /// key (a no-op if `k` is not strictly smaller than the stored key).
    fn push(&mut self, u: NodeId, k: Key);

    /// Decrease `u`'s key to `k` if `k` is strictly smaller than the stored
    /// key; if `u` is absent, behaves as `push`. No-op otherwise.
    fn decrease(&mut self, u: NodeId, k: Key);

    /// Peek the minimal-key node without removing it.
    ///
    /// Takes `&mut self`: implementations that defer internal bookkeeping
    /// until a node is examined (block promotion/sorting, stale-entry
    /// skipping) perform that bookkeeping here, on the real queue, rather
    /// than losing it to a throwaway clone.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    fn top(&mut self) -> (NodeId, Key);

    /// Remove and return the minimal-key node.
    ///
    /// # Panics
    /// Panics if the queue is empty.
    fn pop(&mut self) -> (NodeId, Key);

    fn contains(&self, u: NodeId) -> bool;

    fn key_of(&self, u: NodeId) -> Option<Key>;

    fn metrics(&self) -> PQMetrics;

    fn reset_metrics(&mut self);
}
