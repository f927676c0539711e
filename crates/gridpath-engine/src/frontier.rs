//! Frontier entries for the lazy-deletion priority queue.

use std::cmp::Ordering;

/// Reference into the graph's vertex store, ordered by `key` so that
/// `BinaryHeap` (a max-heap) pops the smallest key first.
///
/// A vertex may be pushed multiple times with different keys; stale
/// entries are skipped on pop via the vertex's `visited` flag rather than
/// removed (lazy deletion).
#[derive(Copy, Clone, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) idx: usize,
    pub(crate) key: f64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key.total_cmp(&other.key) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap pops smallest key first.
        other.key.total_cmp(&self.key)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
