pub mod dijkstra;
pub mod hybrid;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
