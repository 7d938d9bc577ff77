//! Work counters shared by every queue, plus the Dijkstra driver's own
//! counters. Metrics carry workload attribution only — they are never part
//! of the error channel.

/// Per-queue work counters. Reset only by an explicit [`reset`](PQMetrics::reset) call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PQMetrics {
    pub pushes: u64,
    pub pops: u64,
    pub decreases: u64,
    /// Internal element relocations (heap swaps, bucket relinks, block
    /// transfers/discards); meaning is defined per queue.
    pub moves: u64,
    /// Internal comparisons/probes not otherwise covered by `moves`
    /// (bucket empty-probe skips, STOCPQ sort comparisons).
    pub scans: u64,
}

impl PQMetrics {
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Counters owned by the Dijkstra driver itself, independent of the PQ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DijkstraMetrics {
    /// Number of edges examined (one increment per `for_each_edge` callback).
    pub relaxations: u64,
    /// Number of relaxations that strictly improved a distance.
    pub improved: u64,
    /// Number of nodes popped (settled) from the queue.
    pub settled: u64,
}
