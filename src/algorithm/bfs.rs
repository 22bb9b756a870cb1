//! Breadth-first traversal: BFS trees, unweighted shortest paths and
//! connected components.
//!
//! Neighbors are discovered in adjacency-list order, so every result is
//! deterministic for a given construction order.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::{require_node, Predecessors};
use crate::graph::{Graph, NodeLabel};
use crate::Result;

/// Level-order exploration from `source` over nodes not yet marked in `visited`.
///
/// Marks and records a predecessor for every node at discovery time. Returns
/// the discovered ids in discovery order, `source` first. When `stop_at` is
/// given the search ends as soon as that node is dequeued.
fn breadth_first<N, W, G>(
    graph: &G,
    source: usize,
    visited: &mut [bool],
    previous: &mut [Option<usize>],
    stop_at: Option<usize>,
) -> Vec<usize>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    let mut discovered = vec![source];
    let mut queue = VecDeque::new();
    visited[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if stop_at == Some(current) {
            break;
        }
        for neighbor in graph.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                previous[neighbor] = Some(current);
                discovered.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    discovered
}

/// Returns the BFS tree rooted at `source`.
///
/// The map covers exactly the nodes reachable from `source`; the source maps
/// to `None` and every other node to the node it was first discovered from.
pub fn bfs_tree<N, W, G>(graph: &G, source: &N) -> Result<Predecessors<N>>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    let source_id = require_node(graph, source)?;
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut previous = vec![None; n];

    let discovered = breadth_first(graph, source_id, &mut visited, &mut previous, None);
    log::debug!("BFS from {:?} reached {} of {} nodes", source, discovered.len(), n);

    Ok(discovered
        .into_iter()
        .map(|id| (graph.node(id).clone(), previous[id].map(|p| graph.node(p).clone())))
        .collect())
}

/// Returns the fewest-edges path from `source` to `target`, both inclusive.
///
/// `Ok(None)` means `target` is not reachable. Both nodes must exist in the
/// graph, otherwise `NodeNotFound` is returned before any search work.
pub fn bfs_shortest_path<N, W, G>(graph: &G, source: &N, target: &N) -> Result<Option<Vec<N>>>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    let source_id = require_node(graph, source)?;
    let target_id = require_node(graph, target)?;
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut previous = vec![None; n];

    breadth_first(graph, source_id, &mut visited, &mut previous, Some(target_id));
    if !visited[target_id] {
        log::debug!("BFS: {:?} is unreachable from {:?}", target, source);
        return Ok(None);
    }

    let mut path = vec![target_id];
    let mut current = target_id;
    while let Some(pred) = previous[current] {
        path.push(pred);
        current = pred;
    }
    path.reverse();

    Ok(Some(path.into_iter().map(|id| graph.node(id).clone()).collect()))
}

/// Rebuilds the path ending at `target` from a predecessor map by walking
/// back to the root (the node whose predecessor is `None`).
///
/// Returns `None` if `target` is not in the map or the chain is broken.
pub fn reconstruct_path<N: NodeLabel>(previous: &Predecessors<N>, target: &N) -> Option<Vec<N>> {
    let mut path = Vec::new();
    let mut current = Some(target);

    while let Some(node) = current {
        if path.len() >= previous.len() {
            log::warn!("predecessor chain from {:?} loops", target);
            return None;
        }
        path.push(node.clone());
        current = previous.get(node)?.as_ref();
    }

    path.reverse();
    Some(path)
}

/// Partitions the graph into connected components.
///
/// Runs BFS from every node not yet visited, in node insertion order. Every
/// node lands in exactly one component. On directed graphs this groups nodes
/// by forward reachability from each unvisited seed.
pub fn connected_components<N, W, G>(graph: &G) -> Vec<HashSet<N>>
where
    N: NodeLabel,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut previous = vec![None; n];
    let mut components = Vec::new();

    for seed in 0..n {
        if visited[seed] {
            continue;
        }
        let discovered = breadth_first(graph, seed, &mut visited, &mut previous, None);
        components.push(discovered.into_iter().map(|id| graph.node(id).clone()).collect());
    }

    log::debug!("found {} connected components over {} nodes", components.len(), n);
    components
}
