//! Hybrid SSSP - Single-Source Shortest Paths with parallel edge relaxation
//!
//! This library implements Dijkstra's algorithm over sparse directed graphs
//! with a hybrid relaxation engine: the priority-queue-driven frontier
//! expansion stays strictly sequential, while the edge relaxation for a
//! popped node fans out over a worker pool once its edge count crosses a
//! configurable threshold.
//!
//! Edge weights are non-negative; unreachable nodes keep a sentinel
//! "infinite" distance chosen so that adding any edge weight cannot
//! overflow.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{
    dijkstra::Dijkstra,
    hybrid::{HybridConfig, HybridDijkstra},
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::{AdjacencyList, Edge};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative weight on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Malformed graph file (line {line}): {message}")]
    MalformedGraph { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
