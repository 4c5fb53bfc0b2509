use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic sequential Dijkstra's algorithm.
///
/// Baseline for the hybrid engine: same outer loop, but every edge list is
/// relaxed in order on the control thread.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances = vec![W::infinity(); n + 1];
        let mut predecessors: Vec<Option<usize>> = vec![None; n + 1];

        distances[source] = W::zero();

        let mut frontier = Frontier::new();
        frontier.push(source, W::zero());

        while let Some((u, d)) = frontier.pop() {
            // A mismatch means the entry was superseded by a later improvement.
            if d != distances[u] {
                continue;
            }

            for edge in graph.outgoing_edges(u) {
                let new_dist = d + edge.weight;
                if new_dist < distances[edge.to] {
                    distances[edge.to] = new_dist;
                    predecessors[edge.to] = Some(u);
                    frontier.push(edge.to, new_dist);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
