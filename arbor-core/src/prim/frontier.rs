//! Min-priority frontier of candidate edges for one component.
//!
//! `BinaryHeap` is a max-heap, so [`FrontierEdge`] orders itself in reverse:
//! the lightest edge compares greatest and is popped first. Equal weights fall
//! back to `(source, target)`, again reversed, which keeps `Ord` consistent
//! with `Eq`.

use std::{cmp::Ordering, collections::BinaryHeap};

/// A candidate edge from an absorbed vertex to a vertex outside the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct FrontierEdge {
    pub(super) source: usize,
    pub(super) target: usize,
    pub(super) weight: i64,
}

impl FrontierEdge {
    pub(super) const fn new(source: usize, target: usize, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.source.cmp(&self.source))
            .then_with(|| other.target.cmp(&self.target))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Candidate edges crossing the cut of the component being grown.
///
/// Entries are never removed eagerly; callers discard stale entries whose
/// target was absorbed after the entry was pushed.
#[derive(Debug, Default)]
pub(super) struct Frontier {
    heap: BinaryHeap<FrontierEdge>,
}

impl Frontier {
    pub(super) fn push(&mut self, edge: FrontierEdge) {
        self.heap.push(edge);
    }

    pub(super) fn pop_min(&mut self) -> Option<FrontierEdge> {
        self.heap.pop()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
