//! Indexed binary min-heap with O(log n) decrease-key.

use crate::core::{Key, NodeId, PQMetrics};
use crate::queues::pq::PriorityQueue;

#[derive(Debug, Clone, Copy)]
struct Entry {
    u: NodeId,
    k: Key,
}

/// A dense binary min-heap of `(NodeId, Key)` entries, with a position map
/// from `NodeId` to heap index so that `decrease`/`contains`/`key_of` run in
/// O(log n) / O(1) / O(1) instead of requiring a linear scan.
#[derive(Debug, Clone, Default)]
pub struct HeapPQ {
    heap: Vec<Entry>,
    /// `pos[u]` is the heap index of `u`, or `None` if absent. Grows
    /// opportunistically past the last `reserve`d size.
    pos: Vec<Option<usize>>,
    metrics: PQMetrics,
}

impl HeapPQ {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        let mut pq = Self::default();
        pq.reserve(n);
        pq
    }

    #[inline]
    fn ensure_pos_len(&mut self, u: usize) {
        if self.pos.len() <= u {
            self.pos.resize(u + 1, None);
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].k < self.heap[b].k
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a].u as usize] = Some(a);
        self.pos[self.heap[b].u as usize] = Some(b);
        self.metrics.moves += 2;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) >> 1;
            if !self.less(i, p) {
                break;
            }
            self.swap(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let l = 2 * i + 1;
            let r = l + 1;
            let mut m = i;
            if l < n && self.less(l, m) {
                m = l;
            }
            if r < n && self.less(r, m) {
                m = r;
            }
            if m == i {
                break;
            }
            self.swap(i, m);
            i = m;
        }
    }
}

impl PriorityQueue for HeapPQ {
    fn reserve(&mut self, n: usize) {
        self.heap.reserve(n);
        if self.pos.len() < n {
            self.pos.resize(n, None);
        }
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.pos.iter_mut().for_each(|p| *p = None);
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, u: NodeId, k: Key) {
        self.ensure_pos_len(u as usize);
        if self.pos[u as usize].is_some() {
            self.decrease(u, k);
            return;
        }
        let idx = self.heap.len();
        self.heap.push(Entry { u, k });
        self.pos[u as usize] = Some(idx);
        self.sift_up(idx);
        self.metrics.pushes += 1;
    }

    fn decrease(&mut self, u: NodeId, k: Key) {
        self.ensure_pos_len(u as usize);
        let Some(idx) = self.pos[u as usize] else {
            self.push(u, k);
            return;
        };
        if k >= self.heap[idx].k {
            return;
        }
        self.heap[idx].k = k;
        self.sift_up(idx);
        self.metrics.decreases += 1;
    }

    fn top(&mut self) -> (NodeId, Key) {
        let e = self.heap.first().expect("top() called on empty HeapPQ");
        (e.u, e.k)
    }

    fn pop(&mut self) -> (NodeId, Key) {
        assert!(!self.heap.is_empty(), "pop() called on empty HeapPQ");
        let out = self.heap[0];
        self.pos[out.u as usize] = None;
        let n = self.heap.len();
        if n == 1 {
            self.heap.pop();
        } else {
            self.heap[0] = self.heap[n - 1];
            self.pos[self.heap[0].u as usize] = Some(0);
            self.heap.pop();
            self.sift_down(0);
        }
        self.metrics.pops += 1;
        (out.u, out.k)
    }

    fn contains(&self, u: NodeId) -> bool {
        (u as usize) < self.pos.len() && self.pos[u as usize].is_some()
    }

    fn key_of(&self, u: NodeId) -> Option<Key> {
        let idx = *self.pos.get(u as usize)?;
        idx.map(|i| self.heap[i].k)
    }

    fn metrics(&self) -> PQMetrics {
        self.metrics
    }

    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_returns_ascending_order() {
        let mut q = HeapPQ::new();
        q.push(0, Key::new(5, 0));
        q.push(1, Key::new(2, 1));
        q.push(2, Key::new(8, 2));
        q.push(3, Key::new(2, 3));

        let (u0, k0) = q.pop();
        assert_eq!((u0, k0), (1, Key::new(2, 1)));
        let (u1, _) = q.pop();
        assert_eq!(u1, 3);
        let (u2, _) = q.pop();
        assert_eq!(u2, 0);
        let (u3, _) = q.pop();
        assert_eq!(u3, 2);
        assert!(q.is_empty());
    }

    #[test]
    fn top_does_not_consume_and_matches_subsequent_pop() {
        let mut q = HeapPQ::new();
        q.push(0, Key::new(5, 0));
        q.push(1, Key::new(2, 1));

        let peeked = q.top();
        assert_eq!(peeked, (1, Key::new(2, 1)));
        assert_eq!(q.len(), 2);
        assert!(q.contains(1));

        assert_eq!(q.pop(), peeked);
    }

    #[test]
    fn push_on_present_node_behaves_as_decrease() {
        let mut q = HeapPQ::new();
        q.push(0, Key::new(10, 0));
        q.push(0, Key::new(3, 1));
        assert_eq!(q.len(), 1);
        assert_eq!(q.key_of(0), Some(Key::new(3, 1)));
        assert_eq!(q.metrics().decreases, 1);
    }

    #[test]
    fn decrease_is_noop_when_not_strictly_smaller() {
        let mut q = HeapPQ::new();
        q.push(0, Key::new(3, 0));
        q.decrease(0, Key::new(3, 5));
        q.decrease(0, Key::new(5, 0));
        assert_eq!(q.key_of(0), Some(Key::new(3, 0)));
        assert_eq!(q.metrics().decreases, 0);
    }

    #[test]
    fn decrease_on_absent_node_behaves_as_push() {
        let mut q = HeapPQ::new();
        q.decrease(7, Key::new(1, 0));
        assert!(q.contains(7));
        assert_eq!(q.metrics().pushes, 1);
    }

    #[test]
    fn contains_false_after_pop_until_repushed() {
        let mut q = HeapPQ::new();
        q.push(0, Key::new(1, 0));
        q.pop();
        assert!(!q.contains(0));
        q.push(0, Key::new(2, 1));
        assert!(q.contains(0));
    }

    #[test]
    fn opportunistic_growth_beyond_reserved_size() {
        let mut q = HeapPQ::with_capacity(2);
        q.push(10, Key::new(1, 0));
        assert!(q.contains(10));
    }

    #[test]
    fn clear_resets_state_but_not_metrics() {
        let mut q = HeapPQ::new();
        q.push(0, Key::new(1, 0));
        q.pop();
        q.clear();
        assert!(q.is_empty());
        assert!(!q.contains(0));
        assert_eq!(q.metrics().pops, 1);
        q.reset_metrics();
        assert_eq!(q.metrics().pops, 0);
    }
}
