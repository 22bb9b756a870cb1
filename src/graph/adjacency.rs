use crate::graph::traits::NodeLabel;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// Interned adjacency-list storage shared by the directed and undirected graphs.
///
/// Node labels map to dense ids; `adjacency[id]` keeps neighbor ids in the
/// order the edges were added and `weights` keeps the cost of each ordered pair.
#[derive(Debug, Clone)]
pub struct AdjacencyList<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    /// Node labels indexed by id
    labels: Vec<N>,

    /// Label -> id lookup
    ids: HashMap<N, usize>,

    /// Neighbor ids for each node: id -> [neighbor ids]
    adjacency: Vec<Vec<usize>>,

    /// Weight of each stored ordered pair
    weights: HashMap<(usize, usize), W>,
}

impl<N, W> AdjacencyList<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    /// Creates an empty store
    pub fn new() -> Self {
        AdjacencyList {
            labels: Vec::new(),
            ids: HashMap::new(),
            adjacency: Vec::new(),
            weights: HashMap::new(),
        }
    }

    /// Creates an empty store sized for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyList {
            labels: Vec::with_capacity(nodes),
            ids: HashMap::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            weights: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Interns a label, returning the existing id when already present
    pub fn intern(&mut self, node: N) -> usize {
        if let Some(&id) = self.ids.get(&node) {
            return id;
        }
        let id = self.labels.len();
        self.ids.insert(node.clone(), id);
        self.labels.push(node);
        self.adjacency.push(Vec::new());
        id
    }

    /// Appends `to` to the adjacency of `from` and records the pair's weight
    pub fn push_arc(&mut self, from: usize, to: usize, weight: W) {
        self.adjacency[from].push(to);
        self.weights.insert((from, to), weight);
    }

    pub fn id_of(&self, node: &N) -> Option<usize> {
        self.ids.get(node).copied()
    }

    pub fn label(&self, id: usize) -> &N {
        &self.labels[id]
    }

    pub fn labels(&self) -> std::slice::Iter<'_, N> {
        self.labels.iter()
    }

    pub fn neighbors(&self, id: usize) -> &[usize] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn weight(&self, from: usize, to: usize) -> Option<W> {
        self.weights.get(&(from, to)).copied()
    }

    /// Number of adjacency entries over all nodes
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(|list| list.len()).sum()
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.weights.values().all(|weight| *weight >= W::zero())
    }
}

impl<N, W> Default for AdjacencyList<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}
