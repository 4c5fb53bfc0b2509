use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Configuration for the hybrid relaxation engine.
#[derive(Debug, Clone)]
pub struct HybridConfig {
    /// Edge-count cutoff: a popped node with at least this many outgoing
    /// edges is relaxed on the worker pool, fewer stay on the control
    /// thread. A tunable with no principled derivation; the default merely
    /// amortizes the dispatch overhead.
    pub parallel_threshold: usize,

    /// Maximum concurrent workers for the parallel branch. 0 lets rayon
    /// pick one thread per available core.
    pub workers: usize,
}

impl Default for HybridConfig {
    fn default() -> Self {
        HybridConfig {
            parallel_threshold: 100,
            workers: 0,
        }
    }
}

/// A proposed distance improvement produced by one relaxation round.
///
/// Candidates are speculative: the comparison that produced one may have
/// gone stale by merge time, so the control thread re-checks each against
/// the live distance array before applying it.
#[derive(Debug, Clone, Copy)]
struct Candidate<W> {
    node: usize,
    distance: W,
    predecessor: usize,
}

/// Dijkstra with hybrid sequential/parallel edge relaxation.
///
/// The priority-queue-driven outer loop is strictly sequential — queue
/// ordering is what makes Dijkstra correct — but relaxing one popped node's
/// edges is embarrassingly parallel as long as writes to the shared
/// distance/predecessor state are serialized. Workers therefore only *read*
/// the distance array and emit [`Candidate`]s; every write happens on the
/// control thread in the merge pass. The node visit order is identical to
/// the sequential algorithm's.
#[derive(Debug)]
pub struct HybridDijkstra {
    threshold: usize,
    pool: ThreadPool,
}

impl HybridDijkstra {
    /// Creates a hybrid engine with its own worker pool.
    ///
    /// The pool is built once here and reused across runs; sizing it is the
    /// caller's only concurrency knob.
    pub fn new(config: HybridConfig) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()?;

        Ok(HybridDijkstra {
            threshold: config.parallel_threshold,
            pool,
        })
    }

    /// The configured edge-count cutoff
    pub fn parallel_threshold(&self) -> usize {
        self.threshold
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for HybridDijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "HybridDijkstra"
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

        let mut settled = 0usize;
        let mut parallel_rounds = 0usize;

        while let Some((u, d)) = frontier.pop() {
            // Stale entry: a shorter path to u was found after this push.
            if d != distances[u] {
                continue;
            }
            settled += 1;

            let edges = graph.outgoing_edges(u);
            if edges.is_empty() {
                continue;
            }

            if edges.len() < self.threshold {
                // Single thread: reads and writes may interleave freely.
                for edge in edges {
                    let new_dist = d + edge.weight;
                    if new_dist < distances[edge.to] {
                        distances[edge.to] = new_dist;
                        predecessors[edge.to] = Some(u);
                        frontier.push(edge.to, new_dist);
                    }
                }
            } else {
                parallel_rounds += 1;

                // Propose: workers compare against a point-in-time read of
                // the distance array. Accumulation is per-worker, joined by
                // collect, so no lock is held per edge.
                let snapshot = &distances;
                let candidates: Vec<Candidate<W>> = self.pool.install(|| {
                    edges
                        .par_iter()
                        .filter_map(|edge| {
                            let new_dist = d + edge.weight;
                            (new_dist < snapshot[edge.to]).then_some(Candidate {
                                node: edge.to,
                                distance: new_dist,
                                predecessor: u,
                            })
                        })
                        .collect()
                });

                // Confirm: re-check every candidate against the live state.
                // Two candidates in one batch can target the same node, and
                // only the better one may land.
                for candidate in candidates {
                    if candidate.distance < distances[candidate.node] {
                        distances[candidate.node] = candidate.distance;
                        predecessors[candidate.node] = Some(candidate.predecessor);
                        frontier.push(candidate.node, candidate.distance);
                    }
                }
            }
        }

        debug!(
            "settled {} of {} nodes ({} parallel relaxation rounds, threshold {})",
            settled, n, parallel_rounds, self.threshold
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
