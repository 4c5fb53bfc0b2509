pub mod adjacency;
pub mod generators;
pub mod traits;

pub use adjacency::{AdjacencyList, Edge};
pub use traits::{Graph, Weight};
