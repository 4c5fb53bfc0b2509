use num_traits::{Bounded, Num};
use std::fmt::Debug;

use crate::graph::adjacency::Edge;

/// Numeric requirements on edge weights.
///
/// `Ord` rather than `PartialOrd` so weights can sit in a binary heap;
/// `Send + Sync` so edge lists can be relaxed on worker threads.
pub trait Weight: Num + Bounded + Ord + Copy + Debug + Send + Sync {
    /// Sentinel distance for "no path known yet".
    ///
    /// A quarter of the maximum representable value, so adding any edge
    /// weight to it cannot overflow.
    fn infinity() -> Self {
        let four = Self::one() + Self::one() + Self::one() + Self::one();
        Self::max_value() / four
    }
}

impl<T> Weight for T where T: Num + Bounded + Ord + Copy + Debug + Send + Sync {}

/// Trait representing a weighted directed graph with dense node ids.
///
/// Node ids live in `[1, vertex_count]`; id 0 is reserved and never a valid
/// vertex.
pub trait Graph<W: Weight> {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex as a slice.
    ///
    /// O(1); an empty slice for sinks and for out-of-range ids.
    fn outgoing_edges(&self, vertex: usize) -> &[Edge<W>];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex >= 1 && vertex <= self.vertex_count()
    }
}
