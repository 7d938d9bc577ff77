//! The reference Dijkstra driver: generic over any [`Graph`] and any
//! [`PriorityQueue`], it owns the distance/parent arrays and attributes
//! every piece of work to either its own counters or the queue's.

use crate::core::{DijkstraMetrics, Graph, Key, NodeId, PQMetrics, INF, INVALID_NODE};
use crate::queues::PriorityQueue;

/// Everything a single-source search produces.
#[derive(Debug, Clone)]
pub struct DijkstraResult {
    pub dist: Vec<u32>,
    pub parent: Vec<NodeId>,
    pub algo: DijkstraMetrics,
    pub pq: PQMetrics,
}

/// Run Dijkstra from `source` over `graph`, using `queue` as scratch space.
///
/// `queue` is `clear`ed and `reserve`d for `graph.num_nodes()` before the
/// search starts, so it may be reused across calls.
pub fn dijkstra_single<G, Q>(graph: &G, source: NodeId, queue: &mut Q) -> DijkstraResult
where
    G: Graph,
    Q: PriorityQueue,
{
    let n = graph.num_nodes();
    let mut dist = vec![INF; n];
    let mut parent = vec![INVALID_NODE; n];
    let mut algo = DijkstraMetrics::default();

    queue.clear();
    queue.reserve(n);

    let mut tie: u32 = 0;
    dist[source as usize] = 0;
    queue.push(source, Key::new(0, tie));
    tie += 1;

    while !queue.is_empty() {
        let (u, _ku) = queue.pop();
        algo.settled += 1;

        for (v, w) in graph.edges(u) {
            algo.relaxations += 1;
            let cand = dist[u as usize] + w;
            if cand < dist[v as usize] {
                dist[v as usize] = cand;
                parent[v as usize] = u;
                algo.improved += 1;
                let new_key = Key::new(cand, tie);
                tie += 1;
                if queue.contains(v) {
                    queue.decrease(v, new_key);
                } else {
                    queue.push(v, new_key);
                }
            }
        }
    }

    DijkstraResult {
        dist,
        parent,
        algo,
        pq: queue.metrics(),
    }
}
