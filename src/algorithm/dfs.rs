//! Depth-first reachability.
//!
//! Two interchangeable strategies: recursion over the call stack and an
//! explicit LIFO worklist. Both always agree on the answer; only the visiting
//! order may differ.

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::require_node;
use crate::graph::{Graph, NodeLabel};
use crate::Result;

/// Default node count above which `DfsStrategy::Auto` and `TopologicalSort` stop recursing.
///
/// Sized to fit the 2 MiB stack of a spawned thread in an unoptimized build.
pub const DEFAULT_RECURSION_LIMIT: usize = 1_000;

/// How the depth-first search keeps its frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsStrategy {
    /// Recurse on the call stack
    Recursive,
    /// Explicit stack; nodes are skipped when popped if already visited
    Iterative,
    /// Recursive while the graph has at most `recursion_limit` nodes, iterative beyond
    Auto,
}

/// Configurable depth-first reachability search
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    strategy: DfsStrategy,
    recursion_limit: usize,
}

impl DepthFirstSearch {
    /// Create a new search using `DfsStrategy::Auto`
    pub fn new() -> Self {
        DepthFirstSearch {
            strategy: DfsStrategy::Auto,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Set the traversal strategy
    pub fn with_strategy(mut self, strategy: DfsStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the node count threshold used by `DfsStrategy::Auto`
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Returns true if `target` can be reached from `source`.
    ///
    /// Fails with `NodeNotFound` if `source` is absent. A `target` missing
    /// from the graph is simply unreachable.
    pub fn reachable<N, W, G>(&self, graph: &G, source: &N, target: &N) -> Result<bool>
    where
        N: NodeLabel,
        W: Float + Zero + Debug + Copy,
        G: Graph<N, W>,
    {
        let source_id = require_node(graph, source)?;
        let target_id = match graph.node_id(target) {
            Some(id) => id,
            None => return Ok(false),
        };

        let recursive = match self.strategy {
            DfsStrategy::Recursive => true,
            DfsStrategy::Iterative => false,
            DfsStrategy::Auto => graph.node_count() <= self.recursion_limit,
        };

        let mut visited = vec![false; graph.node_count()];
        let found = if recursive {
            visit_recursive(graph, source_id, target_id, &mut visited)
        } else {
            visit_iterative(graph, source_id, target_id, &mut visited)
        };

        log::trace!(
            "DFS ({}) {:?} -> {:?}: {}",
            if recursive { "recursive" } else { "iterative" },
            source,
            target,
            found
        );
        Ok(found)
    }
}

impl Default for DepthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

fn visit_recursive<N, W, G>(graph: &G, node: usize, target: usize, visited: &mut [bool]) -> bool
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    if node == target {
        return true;
    }
    visited[node] = true;
    for neighbor in graph.neighbors(node) {
        if !visited[neighbor] && visit_recursive(graph, neighbor, target, visited) {
            return true;
        }
    }
    false
}

fn visit_iterative<N, W, G>(graph: &G, source: usize, target: usize, visited: &mut [bool]) -> bool
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    let mut stack = vec![source];

    while let Some(current) = stack.pop() {
        if visited[current] {
            continue;
        }
        visited[current] = true;
        if current == target {
            return true;
        }
        // Duplicates may sit on the stack; they are dropped when popped
        stack.extend(graph.neighbors(current).filter(|&neighbor| !visited[neighbor]));
    }

    false
}

/// Depth-first reachability with the default `Auto` strategy
pub fn reachable<N, W, G>(graph: &G, source: &N, target: &N) -> Result<bool>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    DepthFirstSearch::new().reachable(graph, source, target)
}

/// Depth-first reachability on the call stack
pub fn reachable_recursive<N, W, G>(graph: &G, source: &N, target: &N) -> Result<bool>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    DepthFirstSearch::new()
        .with_strategy(DfsStrategy::Recursive)
        .reachable(graph, source, target)
}

/// Depth-first reachability with an explicit stack
pub fn reachable_iterative<N, W, G>(graph: &G, source: &N, target: &N) -> Result<bool>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    DepthFirstSearch::new()
        .with_strategy(DfsStrategy::Iterative)
        .reachable(graph, source, target)
}
