use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{label_distances, label_predecessors, require_node};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NodeLabel};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths, negative edge weights allowed.
///
/// Runs `|V|` relaxation passes over every edge, then one checking pass: any
/// edge that still relaxes proves a negative cycle reachable from the source
/// and the run fails with `NegativeCycle`.
#[derive(Debug, Default)]
pub struct BellmanFord {
    /// Stop relaxing once a full pass changes nothing
    early_exit: bool,
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance performing every pass
    pub fn new() -> Self {
        BellmanFord { early_exit: false }
    }

    /// Enable or disable stopping after the first pass that relaxes nothing.
    ///
    /// Distances and predecessors are identical either way; once a pass is
    /// quiet every later pass is too.
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }
}

/// Relaxes `u -> v`; returns true if `v` improved
fn relax<W>(u: usize, v: usize, weight: W, distances: &mut [W], predecessors: &mut [Option<usize>]) -> bool
where
    W: Float + Zero + Debug + Copy,
{
    let candidate = distances[u] + weight;
    if candidate < distances[v] {
        distances[v] = candidate;
        predecessors[v] = Some(u);
        true
    } else {
        false
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for BellmanFord
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        let source_id = require_node(graph, source)?;
        let n = graph.node_count();

        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source_id] = W::zero();

        for pass in 0..n {
            let mut relaxed = 0usize;
            for u in 0..n {
                for (v, weight) in graph.outgoing_edges(u) {
                    if relax(u, v, weight, &mut distances, &mut predecessors) {
                        relaxed += 1;
                    }
                }
            }
            log::trace!("Bellman-Ford pass {}: {} relaxations", pass + 1, relaxed);
            if self.early_exit && relaxed == 0 {
                log::debug!("Bellman-Ford converged after {} of {} passes", pass + 1, n);
                break;
            }
        }

        for u in 0..n {
            for (v, weight) in graph.outgoing_edges(u) {
                if distances[u] + weight < distances[v] {
                    let (from, to) = (graph.node(u), graph.node(v));
                    log::debug!("Bellman-Ford: edge {:?} -> {:?} still relaxes", from, to);
                    return Err(Error::NegativeCycle {
                        from: format!("{:?}", from),
                        to: format!("{:?}", to),
                    });
                }
            }
        }

        Ok(ShortestPathResult {
            distances: label_distances(graph, &distances),
            predecessors: label_predecessors(graph, &predecessors),
            source: source.clone(),
        })
    }
}

/// Runs Bellman-Ford from `source` with the default configuration
pub fn bellman_ford<N, W, G>(graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    BellmanFord::new().compute_shortest_paths(graph, source)
}
