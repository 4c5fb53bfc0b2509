//! Random graph generators for tests and benchmarks.
//!
//! Generators take the RNG as a parameter so callers can seed them for
//! reproducible graphs.

use rand::Rng;

use crate::graph::AdjacencyList;
use crate::Result;

/// Generates a sparse random directed graph with `nodes` vertices and
/// roughly `edges_per_node` outgoing edges per vertex, weights uniform in
/// `1..=max_weight`.
///
/// Duplicate edges and self-loops may occur, as in real edge-list dumps;
/// neither affects shortest-path correctness.
pub fn random_graph<R: Rng>(
    nodes: usize,
    edges_per_node: usize,
    max_weight: i64,
    rng: &mut R,
) -> Result<AdjacencyList<i64>> {
    let mut graph = AdjacencyList::with_vertices(nodes);

    for from in 1..=nodes {
        for _ in 0..edges_per_node {
            let to = rng.gen_range(1..=nodes);
            let weight = rng.gen_range(1..=max_weight);
            graph.add_edge(from, to, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a hub graph: vertex 1 fans out to every other vertex, and every
/// other vertex keeps one random onward edge.
///
/// The hub's out-degree is `nodes - 1`, which drives the relaxation of the
/// source through the parallel branch of the hybrid engine for any threshold
/// below that.
pub fn hub_graph<R: Rng>(
    nodes: usize,
    max_weight: i64,
    rng: &mut R,
) -> Result<AdjacencyList<i64>> {
    let mut graph = AdjacencyList::with_vertices(nodes);

    for to in 2..=nodes {
        let weight = rng.gen_range(1..=max_weight);
        graph.add_edge(1, to, weight)?;
    }
    for from in 2..=nodes {
        let to = rng.gen_range(1..=nodes);
        let weight = rng.gen_range(1..=max_weight);
        graph.add_edge(from, to, weight)?;
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_graph_has_expected_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(50, 4, 100, &mut rng).unwrap();
        assert_eq!(graph.vertex_count(), 50);
        assert_eq!(graph.edge_count(), 200);
    }

    #[test]
    fn hub_graph_fans_out_from_vertex_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = hub_graph(300, 10, &mut rng).unwrap();
        assert_eq!(graph.outgoing_edges(1).len(), 299);
        assert_eq!(graph.outgoing_edges(2).len(), 1);
    }
}
