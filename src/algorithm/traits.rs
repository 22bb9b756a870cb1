use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::{Graph, NodeLabel};
use crate::Result;

/// Predecessor mapping: each node maps to the node it was reached from, or
/// `None` for the root and for nodes that were never reached
pub type Predecessors<N> = HashMap<N, Option<N>>;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each node, +infinity when unreachable
    pub distances: HashMap<N, W>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Predecessors<N>,

    /// Source node
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the finite distance to `node`, or `None` if it is unreachable or unknown
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied().filter(|d| d.is_finite())
    }

    /// Returns true if `node` was reached from the source
    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_some()
    }

    /// Get the shortest path from source to target as a sequence of nodes
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }
        walk_back(&self.predecessors, &self.source, target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<N, W>, target: &N) -> Option<Vec<N>> {
        result.path_to(target)
    }
}

/// Follows `previous` from `target` back to `source` and returns the path in
/// forward order. Returns `None` when the chain breaks or loops before
/// reaching `source`.
pub(crate) fn walk_back<N: NodeLabel>(previous: &Predecessors<N>, source: &N, target: &N) -> Option<Vec<N>> {
    let mut path = vec![target.clone()];
    let mut current = target;

    while current != source {
        // A chain longer than the map itself must contain a loop
        if path.len() > previous.len() {
            log::warn!("predecessor chain from {:?} does not reach {:?}", target, source);
            return None;
        }
        current = previous.get(current)?.as_ref()?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}
