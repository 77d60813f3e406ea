use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Reference into the search state, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
struct NodeRef {
    idx: usize,
    f: f64,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; among equal
        // f, the earliest push wins.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

/// Min-priority queue of slot indices keyed by f-score.
///
/// Updating a key pushes a fresh entry; the outdated one stays in the heap
/// and surfaces later, after its slot has been closed. Callers skip popped
/// slots that are already closed.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<NodeRef>,
    seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    /// Queue `idx` with priority `f`.
    pub fn push(&mut self, idx: usize, f: f64) {
        self.heap.push(NodeRef {
            idx,
            f,
            seq: self.seq,
        });
        self.seq += 1;
    }

    /// Lower the key of an already queued `idx` to `f`.
    #[inline]
    pub fn update(&mut self, idx: usize, f: f64) {
        self.push(idx, f);
    }

    /// Remove and return the index with the smallest f.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|r| r.idx)
    }

    /// Number of entries, outdated ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
