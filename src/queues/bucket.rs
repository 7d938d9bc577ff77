use std::collections::VecDeque;

use crate::core::{Cost32, Key, NodeId, PQMetrics};
use crate::queues::pq::PriorityQueue;

#[doc = svgbobdoc::transform!(
/// Dial-style bucket priority queue for monotone integer keys bounded by a
/// maximum edge weight `W`.
///
/// ```svgbob
///           cur_min % K
///                |
///                v
///   +-----+-----+-----+-----+- - -+-----+
///   |  0  |  1  |  2  |  3  | ... | K-1 |   buckets (circular, size K = W+1)
///   +-----+-----+-----+-----+- - -+-----+
///      |     |
///      v     v
///   [u, u]  [u]                              each bucket: arrival-order FIFO
/// ```
///
/// `push`/`decrease` file a node under `key.primary mod K`; `pop` advances a
/// cursor `cur_min` one unit at a time until it finds a non-empty bucket,
/// which is sound exactly because Dijkstra with non-negative weights only
/// ever presents keys within a window of width `W` of the last popped key.
)]
#[derive(Debug, Clone)]
pub struct BucketPQ {
    /// Maximum edge weight in the graph this queue will serve.
    w: u32,
    /// Bucket count, `w + 1`.
    k: u32,
    buckets: Vec<VecDeque<NodeId>>,
    /// Cursor: smallest key that could still be present.
    cur_min: Cost32,
    in_queue: Vec<bool>,
    key: Vec<Key>,
    bucket_idx: Vec<u32>,
    count: usize,
    metrics: PQMetrics,
}

impl BucketPQ {
    /// `max_w` must be at least 1 (the maximum possible edge weight).
    pub fn new(max_w: u32) -> Self {
        let w = max_w.max(1);
        let k = w + 1;
        Self {
            w,
            k,
            buckets: vec![VecDeque::new(); k as usize],
            cur_min: 0,
            in_queue: Vec::new(),
            key: Vec::new(),
            bucket_idx: Vec::new(),
            count: 0,
            metrics: PQMetrics::default(),
        }
    }

    pub fn max_weight(&self) -> u32 {
        self.w
    }

    #[inline]
    fn bucket_index_for(&self, primary: Cost32) -> u32 {
        primary % self.k
    }

    fn ensure_node_len(&mut self, u: usize) {
        if self.in_queue.len() <= u {
            self.in_queue.resize(u + 1, false);
            self.key.resize(u + 1, Key::default());
            self.bucket_idx.resize(u + 1, 0);
        }
    }
}

impl PriorityQueue for BucketPQ {
    fn reserve(&mut self, n: usize) {
        if self.in_queue.len() < n {
            self.in_queue.resize(n, false);
            self.key.resize(n, Key::default());
            self.bucket_idx.resize(n, 0);
        }
    }

    fn clear(&mut self) {
        for b in &mut self.buckets {
            b.clear();
        }
        self.in_queue.iter_mut().for_each(|f| *f = false);
        self.cur_min = 0;
        self.count = 0;
    }

    fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn len(&self) -> usize {
        self.count
    }

    fn push(&mut self, u: NodeId, k: Key) {
        self.ensure_node_len(u as usize);
        if self.in_queue[u as usize] {
            self.decrease(u, k);
            return;
        }
        let bi = self.bucket_index_for(k.primary);
        self.key[u as usize] = k;
        self.bucket_idx[u as usize] = bi;
        self.buckets[bi as usize].push_back(u);
        self.in_queue[u as usize] = true;
        self.count += 1;
        self.metrics.pushes += 1;
    }

    fn decrease(&mut self, u: NodeId, k: Key) {
        self.ensure_node_len(u as usize);
        if !self.in_queue[u as usize] {
            self.push(u, k);
            return;
        }
        if k >= self.key[u as usize] {
            return;
        }
        let old_bi = self.bucket_idx[u as usize] as usize;
        if let Some(pos) = self.buckets[old_bi].iter().position(|&v| v == u) {
            self.buckets[old_bi].remove(pos);
        }
        let bi = self.bucket_index_for(k.primary);
        self.key[u as usize] = k;
        self.bucket_idx[u as usize] = bi;
        self.buckets[bi as usize].push_back(u);
        self.metrics.decreases += 1;
        self.metrics.moves += 1;
    }

    fn top(&mut self) -> (NodeId, Key) {
        let idx = (self.cur_min % self.k) as usize;
        let u = *self.buckets[idx]
            .front()
            .expect("top() called on empty BucketPQ");
        (u, self.key[u as usize])
    }

    fn pop(&mut self) -> (NodeId, Key) {
        assert!(self.count > 0, "pop() called on empty BucketPQ");
        loop {
            let idx = (self.cur_min % self.k) as usize;
            if !self.buckets[idx].is_empty() {
                break;
            }
            self.cur_min += 1;
            self.metrics.scans += 1;
        }
        let idx = (self.cur_min % self.k) as usize;
        let u = self.buckets[idx].pop_front().expect("checked non-empty above");
        self.in_queue[u as usize] = false;
        self.count -= 1;
        self.metrics.pops += 1;
        (u, self.key[u as usize])
    }

    fn contains(&self, u: NodeId) -> bool {
        (u as usize) < self.in_queue.len() && self.in_queue[u as usize]
    }

    fn key_of(&self, u: NodeId) -> Option<Key> {
        if !self.contains(u) {
            return None;
        }
        Some(self.key[u as usize])
    }

    fn metrics(&self) -> PQMetrics {
        self.metrics
    }

    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}
