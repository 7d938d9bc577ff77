use std::collections::VecDeque;

use crate::core::{Cost32, Key, NodeId, PQMetrics, INF};
use crate::queues::pq::PriorityQueue;

type Item = (NodeId, Key);

#[doc = svgbobdoc::transform!(
/// Batch/deferred priority queue ("STOC") with lazy decrease-key.
///
/// ```svgbob
///  batch_blocks (front-consumed)         sorted_blocks (back-consumed)
///  +-----+-----+                         +-----+-----+
///  |block|block| ... <-- pop front       |block|block| <-- push/pop back
///  +-----+-----+                         +-----+-----+
///
///  active (sorted by Key ascending, consumed left-to-right)
///  +---+---+---+---+
///  | x | x | . | . |
///  +---+---+---+---+
///        ^ active_pos
/// ```
///
/// `push`/`decrease` only ever append to the back unsorted block; sorting is
/// deferred until a block is promoted to `active`. Logical membership is
/// decided by the `best` side table, not by physical presence, so stale
/// entries left behind by a `decrease` are simply skipped at extraction
/// time.
)]
#[derive(Debug, Clone)]
pub struct STOCPQ {
    batch_blocks: VecDeque<Vec<Item>>,
    sorted_blocks: Vec<Vec<Item>>,
    active: Vec<Item>,
    active_pos: usize,
    best: Vec<Option<Key>>,
    block_size: usize,
    bound: Cost32,
    live: usize,
    metrics: PQMetrics,
}

impl STOCPQ {
    pub const DEFAULT_BLOCK_SIZE: usize = 256;

    pub fn new(block_size: usize) -> Self {
        Self {
            batch_blocks: VecDeque::new(),
            sorted_blocks: Vec::new(),
            active: Vec::new(),
            active_pos: 0,
            best: Vec::new(),
            block_size: block_size.max(1),
            bound: INF,
            live: 0,
            metrics: PQMetrics::default(),
        }
    }

    /// Any operation with `k.primary >= bound` is silently dropped.
    /// Unexercised by the Dijkstra driver but exposed for direct use.
    pub fn with_bound(block_size: usize, bound: Cost32) -> Self {
        let mut q = Self::new(block_size);
        q.bound = bound;
        q
    }

    fn ensure_best_len(&mut self, u: usize) {
        if self.best.len() <= u {
            self.best.resize(u + 1, None);
        }
    }

    fn append_unsorted(&mut self, item: Item) {
        if self.sorted_blocks.last().map_or(true, |b| b.len() >= self.block_size) {
            self.sorted_blocks.push(Vec::with_capacity(self.block_size));
            self.metrics.moves += 1;
        }
        self.sorted_blocks.last_mut().unwrap().push(item);
        self.metrics.moves += 1;
    }

    /// Make sure `active` has an unconsumed entry at `active_pos`, pulling
    /// and sorting a fresh block if needed. Returns `false` if the queue has
    /// no more blocks at all.
    fn ensure_active(&mut self) -> bool {
        if self.active_pos < self.active.len() {
            return true;
        }
        self.active.clear();
        self.active_pos = 0;

        if let Some(block) = self.batch_blocks.pop_front() {
            self.active = block;
            self.metrics.moves += 1;
        } else if let Some(block) = self.sorted_blocks.pop() {
            self.active = block;
            self.metrics.moves += 1;
        } else {
            return false;
        }

        let metrics = &mut self.metrics;
        self.active.sort_by(|a, b| {
            metrics.scans += 1;
            a.1.cmp(&b.1)
        });
        if self.active.len() > 1 {
            self.metrics.moves += (self.active.len() - 1) as u64;
        }
        true
    }

    /// Advance `active_pos` past any entry whose key no longer matches
    /// `best`. Returns `true` if a live entry remains at `active_pos`.
    fn skip_stale(&mut self) -> bool {
        while self.active_pos < self.active.len() {
            let (u, k) = self.active[self.active_pos];
            if self.best.get(u as usize).copied().flatten() == Some(k) {
                return true;
            }
            self.active_pos += 1;
            self.live = self.live.saturating_sub(1);
            self.metrics.moves += 1;
        }
        false
    }

    fn peek_impl(&mut self) -> (NodeId, Key) {
        loop {
            if !self.ensure_active() {
                return (0, Key::new(INF, 0));
            }
            if self.skip_stale() {
                return self.active[self.active_pos];
            }
        }
    }
}

impl PriorityQueue for STOCPQ {
    fn reserve(&mut self, n: usize) {
        if self.best.len() < n {
            self.best.resize(n, None);
        }
    }

    fn clear(&mut self) {
        self.batch_blocks.clear();
        self.sorted_blocks.clear();
        self.active.clear();
        self.active_pos = 0;
        self.best.iter_mut().for_each(|b| *b = None);
        self.live = 0;
    }

    fn is_empty(&self) -> bool {
        self.live == 0
            && self.active_pos >= self.active.len()
            && self.batch_blocks.is_empty()
            && self.sorted_blocks.is_empty()
    }

    fn len(&self) -> usize {
        self.live
    }

    fn push(&mut self, u: NodeId, k: Key) {
        if k.primary >= self.bound {
            return;
        }
        self.ensure_best_len(u as usize);
        if self.best[u as usize].is_some() {
            self.decrease(u, k);
            return;
        }
        self.best[u as usize] = Some(k);
        self.append_unsorted((u, k));
        self.live += 1;
        self.metrics.pushes += 1;
    }

    fn decrease(&mut self, u: NodeId, k: Key) {
        if k.primary >= self.bound {
            return;
        }
        self.ensure_best_len(u as usize);
        let better = match self.best[u as usize] {
            None => true,
            Some(cur) => k < cur,
        };
        if !better {
            return;
        }
        self.best[u as usize] = Some(k);
        self.append_unsorted((u, k));
        self.live += 1;
        self.metrics.decreases += 1;
    }

    fn top(&mut self) -> (NodeId, Key) {
        assert!(!self.is_empty(), "top() called on empty STOCPQ");
        self.peek_impl()
    }

    fn pop(&mut self) -> (NodeId, Key) {
        assert!(!self.is_empty(), "pop() called on empty STOCPQ");
        let (u, k) = self.peek_impl();
        self.active_pos += 1;
        self.live = self.live.saturating_sub(1);
        self.best[u as usize] = None;
        self.metrics.pops += 1;
        self.metrics.moves += 1;
        (u, k)
    }

    fn contains(&self, u: NodeId) -> bool {
        matches!(self.best.get(u as usize), Some(Some(_)))
    }

    fn key_of(&self, u: NodeId) -> Option<Key> {
        *self.best.get(u as usize)?
    }

    fn metrics(&self) -> PQMetrics {
        self.metrics
    }

    fn reset_metrics(&mut self) {
        self.metrics.reset();
    }
}

impl Default for STOCPQ {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BLOCK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_does_not_consume_and_matches_subsequent_pop() {
        let mut q = STOCPQ::new(4);
        q.push(0, Key::new(5, 0));
        q.push(1, Key::new(2, 1));

        let peeked = q.top();
        assert_eq!(peeked, (1, Key::new(2, 1)));
        assert_eq!(q.len(), 2, "top() must not consume");
        assert!(q.contains(1));

        assert_eq!(q.pop(), peeked);
    }

    #[test]
    fn top_promotes_and_sorts_the_block_on_self_not_a_clone() {
        let mut q = STOCPQ::new(2);
        q.push(0, Key::new(5, 0));
        q.push(1, Key::new(2, 1));

        let before = q.metrics();

        let peeked = q.top();
        assert_eq!(peeked, (1, Key::new(2, 1)));

        let after_top = q.metrics();
        assert!(
            after_top.moves > before.moves,
            "top() must perform block promotion on self (not a throwaway clone)"
        );
        assert!(
            after_top.scans > before.scans,
            "sorting the promoted 2-element block must record at least one comparison"
        );

        // A subsequent pop reuses the already-promoted active block instead
        // of redoing (and double-counting) ensure_active/skip_stale.
        let moves_before_pop = q.metrics().moves;
        let popped = q.pop();
        assert_eq!(popped, peeked);
        assert_eq!(
            q.metrics().moves,
            moves_before_pop + 1,
            "pop() right after top() should only add its own consume-move"
        );
    }

    #[test]
    fn pop_order_matches_key_ascending() {
        let mut q = STOCPQ::new(4);
        q.push(0, Key::new(5, 0));
        q.push(1, Key::new(2, 1));
        q.push(2, Key::new(8, 2));
        q.push(3, Key::new(2, 3));

        assert_eq!(q.pop().0, 1);
        assert_eq!(q.pop().0, 3);
        assert_eq!(q.pop().0, 0);
        assert_eq!(q.pop().0, 2);
        assert!(q.is_empty());
    }

    #[test]
    fn decrease_leaves_stale_entry_to_be_skipped() {
        let mut q = STOCPQ::new(4);
        q.push(0, Key::new(10, 0));
        q.decrease(0, Key::new(1, 1));
        assert_eq!(q.metrics().decreases, 1);
        let (u, k) = q.pop();
        assert_eq!((u, k), (0, Key::new(1, 1)));
        assert!(q.is_empty());
    }

    #[test]
    fn decrease_noop_when_not_strictly_smaller() {
        let mut q = STOCPQ::new(4);
        q.push(0, Key::new(3, 0));
        q.decrease(0, Key::new(3, 9));
        q.decrease(0, Key::new(5, 0));
        assert_eq!(q.key_of(0), Some(Key::new(3, 0)));
        assert_eq!(q.metrics().decreases, 0);
    }

    #[test]
    fn spans_multiple_blocks() {
        let mut q = STOCPQ::new(2);
        for i in 0..10u32 {
            q.push(i, Key::new(10 - i, i));
        }
        let mut popped = Vec::new();
        while !q.is_empty() {
            popped.push(q.pop().0);
        }
        assert_eq!(popped, vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn bound_drops_keys_at_or_above_it() {
        let mut q = STOCPQ::with_bound(4, 5);
        q.push(0, Key::new(4, 0));
        q.push(1, Key::new(5, 1));
        assert!(q.contains(0));
        assert!(!q.contains(1));
    }

    #[test]
    fn contains_false_after_pop() {
        let mut q = STOCPQ::new(4);
        q.push(0, Key::new(1, 0));
        q.pop();
        assert!(!q.contains(0));
    }
}
