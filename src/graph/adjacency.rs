use crate::graph::traits::{Graph, Weight};
use crate::{Error, Result};

/// A single directed edge out of some vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    /// Target vertex id
    pub to: usize,
    /// Non-negative edge weight
    pub weight: W,
}

/// A directed graph stored as adjacency lists indexed by node id.
///
/// Node ids are dense integers in `[1, n]`; slot 0 is reserved so ids can be
/// used as indices directly. The graph is built once (via [`add_edge`] or
/// [`from_edges`]) and treated as immutable afterwards; the shortest-path
/// algorithms only see it through the read-only [`Graph`] trait.
///
/// [`add_edge`]: AdjacencyList::add_edge
/// [`from_edges`]: AdjacencyList::from_edges
#[derive(Debug, Clone)]
pub struct AdjacencyList<W: Weight> {
    vertex_count: usize,
    edge_count: usize,
    /// Outgoing edges per vertex; `outgoing[0]` stays empty.
    outgoing: Vec<Vec<Edge<W>>>,
}

impl<W: Weight> AdjacencyList<W> {
    /// Creates a graph with vertices `1..=vertices` and no edges.
    pub fn with_vertices(vertices: usize) -> Self {
        AdjacencyList {
            vertex_count: vertices,
            edge_count: 0,
            outgoing: vec![Vec::new(); vertices + 1],
        }
    }

    /// Adds a directed edge.
    ///
    /// Rejects endpoints outside `[1, n]` and negative weights; both are
    /// construction-time errors so the algorithms never have to revalidate.
    /// Self-loops are accepted (they can never improve a distance).
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight { from, to });
        }

        self.outgoing[from].push(Edge { to, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Builds a graph from an edge iterator, failing on the first invalid edge.
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = AdjacencyList::with_vertices(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}

impl<W: Weight> Graph<W> for AdjacencyList<W> {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> &[Edge<W>] {
        self.outgoing.get(vertex).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn rejects_out_of_range_vertices() {
        let mut graph: AdjacencyList<i64> = AdjacencyList::with_vertices(3);
        assert!(matches!(graph.add_edge(0, 2, 1), Err(Error::InvalidVertex(0))));
        assert!(matches!(graph.add_edge(1, 4, 1), Err(Error::InvalidVertex(4))));
    }

    #[test]
    fn rejects_negative_weights() {
        let mut graph: AdjacencyList<i64> = AdjacencyList::with_vertices(2);
        assert!(matches!(
            graph.add_edge(1, 2, -5),
            Err(Error::NegativeWeight { from: 1, to: 2 })
        ));
    }

    #[test]
    fn sinks_have_empty_edge_lists() {
        let graph = AdjacencyList::from_edges(3, [(1, 2, 7i64)]).unwrap();
        assert!(graph.outgoing_edges(2).is_empty());
        assert!(graph.outgoing_edges(3).is_empty());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn reserved_slot_zero_is_not_a_vertex() {
        let graph: AdjacencyList<i64> = AdjacencyList::with_vertices(5);
        assert!(!graph.has_vertex(0));
        assert!(graph.has_vertex(1));
        assert!(graph.has_vertex(5));
        assert!(!graph.has_vertex(6));
    }
}
