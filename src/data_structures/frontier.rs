use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Min-priority queue of `(distance, node)` frontier entries.
///
/// There is no decrease-key: improving a node's distance pushes a fresh
/// entry, and the superseded one stays in the heap. Callers detect such
/// stale entries at pop time by comparing the popped distance against the
/// authoritative distance array.
#[derive(Debug)]
pub struct Frontier<W: Ord> {
    heap: BinaryHeap<Reverse<(W, usize)>>,
}

impl<W: Ord> Frontier<W> {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if no entries remain
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an entry for `node` with tentative distance `distance`
    pub fn push(&mut self, node: usize, distance: W) {
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes and returns the entry with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, W)> {
        self.heap.pop().map(|Reverse((distance, node))| (node, distance))
    }
}

impl<W: Ord> Default for Frontier<W> {
    fn default() -> Self {
        Frontier::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_distance_order() {
        let mut frontier = Frontier::new();
        frontier.push(3, 30i64);
        frontier.push(1, 10);
        frontier.push(2, 20);

        assert_eq!(frontier.pop(), Some((1, 10)));
        assert_eq!(frontier.pop(), Some((2, 20)));
        assert_eq!(frontier.pop(), Some((3, 30)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn keeps_duplicate_entries_for_a_node() {
        let mut frontier = Frontier::new();
        frontier.push(5, 40i64);
        frontier.push(5, 25);

        // The improved entry comes out first; the stale one is still there
        // for the caller to discard.
        assert_eq!(frontier.pop(), Some((5, 25)));
        assert_eq!(frontier.pop(), Some((5, 40)));
    }
}
