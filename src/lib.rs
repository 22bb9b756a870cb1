//! Classic Graph - classical graph algorithms over a shared graph model
//!
//! The crate provides breadth-first and depth-first traversal, topological
//! sorting with cycle detection, single-source shortest paths (Bellman-Ford and
//! Dijkstra) and Prim's minimum spanning tree driven by an indexed binary heap.
//!
//! Graphs are built incrementally through [`MutableGraph`] and treated as
//! immutable input by every algorithm. Each node label is interned to a dense
//! `usize` id on insertion, so algorithms keep their private state in plain
//! vectors indexed by id.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::{bellman_ford, BellmanFord},
    bfs::{bfs_shortest_path, bfs_tree, connected_components},
    dfs::{reachable, DepthFirstSearch, DfsStrategy},
    dijkstra::{dijkstra, Dijkstra},
    prim::{prim, SpanningTree},
    topological::{topological_sort, TopologicalSort},
    Predecessors, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use data_structures::IndexedMinHeap;
pub use graph::{DirectedGraph, Graph, MutableGraph, UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Node not found in graph: {0}")]
    NodeNotFound(String),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Negative cycle reachable from source: edge {from} -> {to} still relaxes")]
    NegativeCycle { from: String, to: String },

    #[error("Graph has a cycle through node {0}")]
    CycleDetected(String),

    #[error("Priority queue is empty")]
    EmptyQueue,
}

impl Error {
    /// Builds a `NodeNotFound` error from any debuggable node label
    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        Error::NodeNotFound(format!("{:?}", node))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
