use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{label_distances, label_predecessors, require_node};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeLabel};
use crate::Result;

/// Classic Dijkstra's algorithm with a linear scan for the next node.
///
/// O(V^2 + E): no priority queue, the unfinalized node with the smallest
/// tentative distance is found by scanning. Edge weights must be
/// non-negative; this is not checked and negative weights give unspecified
/// distances.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        let source_id = require_node(graph, source)?;
        let n = graph.node_count();

        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];
        distances[source_id] = W::zero();

        let mut settled = 0usize;
        loop {
            // Lowest id wins ties; infinite candidates are never selected
            let mut current = None;
            let mut best = W::infinity();
            for v in 0..n {
                if !finalized[v] && distances[v] < best {
                    best = distances[v];
                    current = Some(v);
                }
            }
            let u = match current {
                Some(u) => u,
                None => break,
            };

            finalized[u] = true;
            settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = distances[u] + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                }
            }
        }

        log::debug!("Dijkstra from {:?} settled {} of {} nodes", source, settled, n);

        Ok(ShortestPathResult {
            distances: label_distances(graph, &distances),
            predecessors: label_predecessors(graph, &predecessors),
            source: source.clone(),
        })
    }
}

/// Runs Dijkstra from `source`; all edge weights must be non-negative
pub fn dijkstra<N, W, G>(graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}
