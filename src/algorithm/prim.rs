use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{label_predecessors, require_node, Predecessors};
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Graph, NodeLabel};
use crate::Result;

/// Minimum spanning tree of the component containing `root`
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    /// Node the tree was grown from
    pub root: N,

    /// Parent of each node in the tree; `None` for the root and for nodes
    /// outside the root's component
    pub predecessors: Predecessors<N>,

    /// Sum of the tree's edge weights
    pub total_weight: W,

    /// `(parent, child, weight)` in the order children joined the tree
    edges: Vec<(N, N, W)>,
}

impl<N, W> SpanningTree<N, W>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
{
    /// Tree edges as `(parent, child, weight)`
    pub fn edges(&self) -> &[(N, N, W)] {
        &self.edges
    }

    /// Number of tree edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if `node` is the root or was attached to the tree
    pub fn spans(&self, node: &N) -> bool {
        *node == self.root || matches!(self.predecessors.get(node), Some(Some(_)))
    }
}

/// Prim's algorithm driven by an `IndexedMinHeap`.
///
/// Every node starts in the queue at +infinity, the source at zero. Each
/// extracted node joins the tree and lowers the key of any queued neighbor
/// it offers a cheaper edge to. Once the minimum key is infinite the rest of
/// the queue is unreachable and stays out of the tree. Expects an undirected
/// graph with non-negative weights; ties may produce any minimum tree.
pub fn prim<N, W, G>(graph: &G, source: &N) -> Result<SpanningTree<N, W>>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    let source_id = require_node(graph, source)?;
    let n = graph.node_count();

    let mut queue = IndexedMinHeap::with_capacity(n);
    for id in 0..n {
        let key = if id == source_id { W::zero() } else { W::infinity() };
        queue.insert(id, key);
    }

    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut edges = Vec::new();
    let mut total_weight = W::zero();

    while !queue.is_empty() {
        let (u, key) = queue.extract_min()?;
        if key.is_infinite() {
            log::debug!("Prim: {} nodes unreachable from {:?}", queue.len() + 1, source);
            break;
        }
        if let Some(parent) = predecessors[u] {
            total_weight = total_weight + key;
            edges.push((graph.node(parent).clone(), graph.node(u).clone(), key));
        }

        for (v, weight) in graph.outgoing_edges(u) {
            match queue.key(v) {
                Some(current) if weight < current => {
                    predecessors[v] = Some(u);
                    queue.decrease_key(v, weight)?;
                }
                _ => {}
            }
        }
    }

    log::debug!("Prim from {:?}: {} tree edges, total weight {:?}", source, edges.len(), total_weight);

    Ok(SpanningTree {
        root: source.clone(),
        predecessors: label_predecessors(graph, &predecessors),
        total_weight,
        edges,
    })
}
