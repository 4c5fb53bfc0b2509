use crate::graph::{Graph, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// Both vectors are indexed by node id with slot 0 unused. Unreachable
/// nodes keep [`Weight::infinity`] in `distances` and `None` in
/// `predecessors`.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W: Weight> {
    /// Distance from the source to each vertex
    pub distances: Vec<W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W: Weight> ShortestPathResult<W> {
    /// Returns the distance to `target`, or `None` if it is unreachable or
    /// out of range.
    pub fn distance(&self, target: usize) -> Option<W> {
        let d = *self.distances.get(target)?;
        if d == W::infinity() {
            None
        } else {
            Some(d)
        }
    }

    /// Returns true if a path from the source to `target` exists
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_some()
    }

    /// Reconstructs the shortest path to `target` in source -> target order.
    ///
    /// Returns `None` for unreachable targets. The predecessor walk is
    /// capped at the node count, so a corrupted predecessor chain yields
    /// `None` instead of looping.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = Vec::new();
        let mut current = target;
        while current != self.source {
            path.push(current);
            current = self.predecessors[current]?;
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.push(self.source);
        path.reverse();

        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
