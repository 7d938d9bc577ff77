//! Primitive identifiers and the ordered key used throughout the queues and
//! the Dijkstra driver.

use std::cmp::Ordering;

/// Identifies a vertex of the graph; real ids live in `[0, N)`.
pub type NodeId = u32;

/// Marks "no parent" / "not yet assigned". Safe as long as `N < NodeId::MAX`,
/// which holds for every graph this crate is meant to run on.
pub const INVALID_NODE: NodeId = NodeId::MAX;

/// An edge weight or accumulated distance.
pub type Cost32 = u32;

/// Sentinel distance meaning "unreached".
pub const INF: Cost32 = Cost32::MAX;

/// A search key: a primary cost plus a tie-breaker that totally orders keys
/// with equal `primary`.
///
/// The tie-breaker is owned and incremented by the Dijkstra driver, not by
/// the queues; every enqueue or decrease-key call assigns the next value, so
/// pop order among equal-cost nodes is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Key {
    pub primary: Cost32,
    pub tie: u32,
}

impl Key {
    #[inline]
    pub fn new(primary: Cost32, tie: u32) -> Self {
        Self { primary, tie }
    }
}

impl PartialOrd for Key {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary.cmp(&other.primary).then(self.tie.cmp(&other.tie))
    }
}
