//! Priority frontier for the search loop.
//!
//! Entries are stored in a min-heap keyed by `(key, insertion_order)`.
//! Lower keys pop first; ties are broken by insertion order (FIFO), so
//! the expansion order of equal-priority vertices is deterministic and
//! reproducible across runs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// An entry in the frontier: a node index tagged with its priority key.
#[derive(Debug, Clone, Copy)]
struct Entry {
    key: i32,
    /// Monotonically increasing counter used to break ties.
    /// Lower = inserted earlier = popped earlier at equal key.
    seq: u64,
    idx: usize,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // We wrap in Reverse for the BinaryHeap, so this ordering is
        // "natural": smaller key first, then smaller seq.
        self.key.cmp(&other.key).then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A deterministic min-priority queue over node indices.
///
/// The search pushes each discovered vertex at most once; cost revisions
/// update the engine's bookkeeping without touching the queued entry.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Queue `idx` at the given priority key.
    pub(crate) fn push(&mut self, key: i32, idx: usize) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { key, seq, idx }));
    }

    /// Pop the index with the lowest key (ties broken FIFO). `None` when
    /// the frontier is exhausted.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse(entry)| entry.idx)
    }

    /// Drop all entries and restart the insertion counter.
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}
