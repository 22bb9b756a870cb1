use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

/// Bound shared by every node label: opaque, hashable and printable
pub trait NodeLabel: Eq + Hash + Clone + Debug {}

impl<T> NodeLabel for T where T: Eq + Hash + Clone + Debug {}

/// Trait representing a weighted graph over interned node labels.
///
/// Every node is assigned a dense id in `0..node_count()` in insertion order.
/// Ids are what the algorithms index their private state with; labels are only
/// used at the API boundary.
pub trait Graph<N, W>: Debug
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true when edges were stored in one direction only
    fn is_directed(&self) -> bool;

    /// Returns the dense id of a node label, if present
    fn node_id(&self, node: &N) -> Option<usize>;

    /// Returns the label of a node id.
    ///
    /// Panics if `id` is not below `node_count()`, like slice indexing.
    fn node(&self, id: usize) -> &N;

    /// Returns an iterator over the node labels in insertion order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the neighbor ids of a node in adjacency order
    fn neighbors(&self, id: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns an iterator over the outgoing edges from a node as `(target, weight)`
    fn outgoing_edges(&self, id: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Gets the weight of an edge if it exists
    fn weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns true if the node label exists in the graph
    fn contains_node(&self, node: &N) -> bool {
        self.node_id(node).is_some()
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        match (self.node_id(from), self.node_id(to)) {
            (Some(u), Some(v)) => self.weight(u, v).is_some(),
            _ => false,
        }
    }
}

/// Trait for building a graph incrementally
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a node to the graph and returns its id; adding an existing node is a no-op
    fn add_node(&mut self, node: N) -> usize;

    /// Adds an edge with the given weight, inserting both endpoints if needed.
    ///
    /// Repeating an edge appends another adjacency entry and overwrites the
    /// recorded weight of the pair.
    fn add_edge(&mut self, from: N, to: N, weight: W);

    /// Adds an edge for traversal-only use, recording a unit weight
    fn add_unweighted_edge(&mut self, from: N, to: N) {
        self.add_edge(from, to, W::one());
    }
}
