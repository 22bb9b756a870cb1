pub mod adjacency;
pub mod directed;
pub mod generators;
pub mod traits;
pub mod undirected;

pub use directed::DirectedGraph;
pub use traits::{Graph, MutableGraph, NodeLabel};
pub use undirected::UndirectedGraph;
