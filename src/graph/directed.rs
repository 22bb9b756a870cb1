use crate::graph::adjacency::AdjacencyList;
use crate::graph::traits::{Graph, MutableGraph, NodeLabel};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
///
/// `add_edge(u, v, w)` stores only the forward entry `u -> v`.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W = f64>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    store: AdjacencyList<N, W>,
}

impl<N, W> DirectedGraph<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            store: AdjacencyList::new(),
        }
    }

    /// Creates a new directed graph with room for the specified number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            store: AdjacencyList::with_capacity(nodes),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.store.validate_non_negative()
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.store.len()
    }

    fn edge_count(&self) -> usize {
        self.store.arc_count()
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn node_id(&self, node: &N) -> Option<usize> {
        self.store.id_of(node)
    }

    fn node(&self, id: usize) -> &N {
        self.store.label(id)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.store.labels())
    }

    fn neighbors(&self, id: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.store.neighbors(id).iter().copied())
    }

    fn outgoing_edges(&self, id: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.store.neighbors(id).iter().filter_map(move |&target| {
            self.store.weight(id, target).map(|weight| (target, weight))
        }))
    }

    fn weight(&self, from: usize, to: usize) -> Option<W> {
        self.store.weight(from, to)
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, node: N) -> usize {
        self.store.intern(node)
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) {
        let u = self.store.intern(from);
        let v = self.store.intern(to);
        self.store.push_arc(u, v, weight);
    }
}
