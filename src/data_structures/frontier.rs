// Sample code pulled (and modified) from: https://doc.rust-lang.org/nightly/std/collections/binary_heap/index.html#examples

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::common::types::Position;

/// A cell waiting in the frontier, keyed by its ordering cost.
///
/// In A* mode the key is the total estimated cost (g + h); in greedy mode
/// it is the heuristic cost alone.
#[derive(Debug, Copy, Clone)]
pub struct FrontierEntry {
    pub key: f64,
    pub position: Position,
}

impl FrontierEntry {
    pub fn new(key: f64, position: Position) -> Self {
        Self { key, position }
    }

    /// Whether this entry was queued under `key`. Compares with `total_cmp`,
    /// so a NaN key still matches itself.
    pub fn has_key(&self, key: f64) -> bool {
        self.key.total_cmp(&key).is_eq()
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both comparisons are flipped: the smallest key pops first, and on
        // an exact tie the smallest (row, col) pops first.
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set for a single search.
///
/// A cell may be inserted several times as cheaper routes to it are found.
/// Superseded entries stay in the heap and are discarded by the caller when
/// they are extracted (lazy deletion); there is no decrease-key.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn insert(&mut self, entry: FrontierEntry) {
        self.heap.push(entry);
    }

    /// Removes and returns the entry with the smallest key, ties broken by
    /// position.
    pub fn extract_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut Frontier) -> Vec<FrontierEntry> {
        std::iter::from_fn(|| frontier.extract_min()).collect()
    }

    #[test]
    fn extracts_smallest_key_first() {
        let mut frontier = Frontier::new();
        frontier.insert(FrontierEntry::new(3.5, Position::new(0, 0)));
        frontier.insert(FrontierEntry::new(1.0, Position::new(5, 5)));
        frontier.insert(FrontierEntry::new(2.25, Position::new(1, 1)));

        let keys: Vec<f64> = drain(&mut frontier).into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec![1.0, 2.25, 3.5]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_break_on_row_then_column() {
        let mut frontier = Frontier::new();
        frontier.insert(FrontierEntry::new(4.0, Position::new(2, 0)));
        frontier.insert(FrontierEntry::new(4.0, Position::new(0, 3)));
        frontier.insert(FrontierEntry::new(4.0, Position::new(0, 1)));
        frontier.insert(FrontierEntry::new(4.0, Position::new(1, 9)));

        let order: Vec<Position> = drain(&mut frontier)
            .into_iter()
            .map(|e| e.position)
            .collect();
        assert_eq!(
            order,
            vec![
                Position::new(0, 1),
                Position::new(0, 3),
                Position::new(1, 9),
                Position::new(2, 0),
            ]
        );
    }

    #[test]
    fn duplicate_entries_are_all_kept() {
        let mut frontier = Frontier::with_capacity(4);
        let pos = Position::new(3, 3);
        frontier.insert(FrontierEntry::new(7.0, pos));
        frontier.insert(FrontierEntry::new(7.0, pos));
        frontier.insert(FrontierEntry::new(5.0, pos));
        assert_eq!(frontier.len(), 3);

        let entries = drain(&mut frontier);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].key, 5.0);
    }

    #[test]
    fn has_key_matches_the_queued_key_only() {
        let pos = Position::new(1, 2);
        let entry = FrontierEntry::new(2.5, pos);
        assert!(entry.has_key(2.5));
        assert!(!entry.has_key(2.0));

        // NaN and infinite keys still identify their own entry
        let nan = FrontierEntry::new(f64::NAN, pos);
        assert!(nan.has_key(f64::NAN));
        assert!(!nan.has_key(0.0));
        assert!(FrontierEntry::new(f64::INFINITY, pos).has_key(f64::INFINITY));
    }
}
