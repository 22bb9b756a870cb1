use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::dfs::DEFAULT_RECURSION_LIMIT;
use crate::graph::{Graph, NodeLabel};
use crate::{Error, Result};

/// Coloring of a node during the depth-first topological sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    Unvisited,
    InProgress,
    Done,
}

/// Topological sort by depth-first finish order with three-state cycle detection.
///
/// A node is `InProgress` while its descendants are explored and `Done` once
/// they all are. Meeting an `InProgress` neighbor is a back edge, so the graph
/// has a cycle and the whole sort fails with `CycleDetected`; no partial order
/// is returned.
#[derive(Debug, Clone)]
pub struct TopologicalSort {
    recursion_limit: usize,
}

impl TopologicalSort {
    pub fn new() -> Self {
        TopologicalSort {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Graphs with more nodes than `limit` are sorted with an explicit stack
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Orders the nodes so that every edge `u -> v` has `u` before `v`
    pub fn sort<N, W, G>(&self, graph: &G) -> Result<Vec<N>>
    where
        N: NodeLabel,
        W: Float + Zero + Debug + Copy,
        G: Graph<N, W>,
    {
        let n = graph.node_count();
        let mut state = vec![NodeState::Unvisited; n];
        let mut finished = Vec::with_capacity(n);
        let recursive = n <= self.recursion_limit;

        for root in 0..n {
            if state[root] != NodeState::Unvisited {
                continue;
            }
            let visit = if recursive {
                dfs_visit(graph, root, &mut state, &mut finished)
            } else {
                dfs_visit_iterative(graph, root, &mut state, &mut finished)
            };
            if let Err(cycle_at) = visit {
                let node = graph.node(cycle_at);
                log::debug!("topological sort aborted: back edge into {:?}", node);
                return Err(Error::CycleDetected(format!("{:?}", node)));
            }
        }

        finished.reverse();
        Ok(finished.into_iter().map(|id| graph.node(id).clone()).collect())
    }
}

impl Default for TopologicalSort {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursive visit. `Err` carries the id of the `InProgress` node that closed a cycle.
fn dfs_visit<N, W, G>(
    graph: &G,
    node: usize,
    state: &mut [NodeState],
    finished: &mut Vec<usize>,
) -> std::result::Result<(), usize>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    state[node] = NodeState::InProgress;
    for neighbor in graph.neighbors(node) {
        match state[neighbor] {
            NodeState::InProgress => return Err(neighbor),
            NodeState::Unvisited => dfs_visit(graph, neighbor, state, finished)?,
            NodeState::Done => {}
        }
    }
    state[node] = NodeState::Done;
    finished.push(node);
    Ok(())
}

/// Same visit as `dfs_visit` with explicit frames, producing the same finish order
fn dfs_visit_iterative<N, W, G>(
    graph: &G,
    root: usize,
    state: &mut [NodeState],
    finished: &mut Vec<usize>,
) -> std::result::Result<(), usize>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    state[root] = NodeState::InProgress;
    let mut frames = vec![(root, graph.neighbors(root))];

    while let Some(frame) = frames.last_mut() {
        let node = frame.0;
        let next = frame.1.next();
        match next {
            Some(neighbor) => match state[neighbor] {
                NodeState::InProgress => return Err(neighbor),
                NodeState::Unvisited => {
                    state[neighbor] = NodeState::InProgress;
                    frames.push((neighbor, graph.neighbors(neighbor)));
                }
                NodeState::Done => {}
            },
            None => {
                state[node] = NodeState::Done;
                finished.push(node);
                frames.pop();
            }
        }
    }

    Ok(())
}

/// Topological order of a directed acyclic graph, or `CycleDetected`
pub fn topological_sort<N, W, G>(graph: &G) -> Result<Vec<N>>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    TopologicalSort::new().sort(graph)
}
