pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod prim;
pub mod topological;
pub mod traits;

pub use traits::{Predecessors, ShortestPathAlgorithm, ShortestPathResult};

use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{Graph, NodeLabel};
use crate::{Error, Result};

/// Resolves a node label to its id or fails with `NodeNotFound`
pub(crate) fn require_node<N, W, G>(graph: &G, node: &N) -> Result<usize>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    graph.node_id(node).ok_or_else(|| Error::node_not_found(node))
}

/// Translates an id-indexed predecessor table into a label map covering every node
pub(crate) fn label_predecessors<N, W, G>(graph: &G, previous: &[Option<usize>]) -> Predecessors<N>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    previous
        .iter()
        .enumerate()
        .map(|(id, pred)| (graph.node(id).clone(), pred.map(|p| graph.node(p).clone())))
        .collect()
}

/// Translates an id-indexed distance table into a label map
pub(crate) fn label_distances<N, W, G>(graph: &G, distances: &[W]) -> HashMap<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    distances
        .iter()
        .enumerate()
        .map(|(id, &d)| (graph.node(id).clone(), d))
        .collect()
}
