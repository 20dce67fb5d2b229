//! Best-first open list.
//!
//! A binary min-heap over node lower bounds. Equal bounds are served in
//! insertion order (FIFO), which makes every run on the same instance
//! expand nodes in the same sequence.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::node::SearchNode;

#[derive(Debug)]
struct Entry {
    seq: u64,
    node: SearchNode,
}

impl Ord for Entry {
    // Reversed: `BinaryHeap` is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .lower_bound
            .total_cmp(&self.node.lower_bound)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Pending search nodes ordered by lower bound.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
    peak: usize,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node.
    pub fn push(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { seq, node });
        self.peak = self.peak.max(self.heap.len());
    }

    /// Removes the node with the smallest bound, oldest first on ties.
    pub fn pop_min(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|e| e.node)
    }

    /// Number of pending nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no nodes are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of nodes pending at once.
    pub fn peak_len(&self) -> usize {
        self.peak
    }
}
