use crate::graph::{DirectedGraph, MutableGraph, UndirectedGraph};
use rand::Rng;
use std::ops::Range;

/// Generates a random directed graph with `n` nodes labelled `0..n` and
/// roughly `edge_factor * n` edges whose weights are drawn from `weights`.
///
/// Every node is added up front, so isolated nodes still appear in the graph.
/// Self-loops and repeated pairs are skipped.
pub fn random_directed<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    weights: Range<f64>,
) -> DirectedGraph<usize, f64> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_node(v);
    }
    for (u, v) in random_pairs(rng, n, edge_factor) {
        let weight = rng.gen_range(weights.clone());
        graph.add_edge(u, v, weight);
    }
    graph
}

/// Generates a random undirected graph with `n` nodes labelled `0..n`.
///
/// Same sampling as [`random_directed`]; a pair is used at most once in either
/// orientation.
pub fn random_undirected<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    weights: Range<f64>,
) -> UndirectedGraph<usize, f64> {
    let mut graph = UndirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_node(v);
    }
    let mut seen = std::collections::HashSet::new();
    for (u, v) in random_pairs(rng, n, edge_factor) {
        if seen.insert((u.min(v), u.max(v))) {
            let weight = rng.gen_range(weights.clone());
            graph.add_edge(u, v, weight);
        }
    }
    graph
}

/// Generates a `width x height` undirected grid with 4-connectivity and unit weights.
/// Node `(x, y)` is labelled `y * width + x`.
pub fn grid(width: usize, height: usize) -> UndirectedGraph<usize, f64> {
    let mut graph = UndirectedGraph::with_capacity(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            graph.add_node(index(x, y));
            // Only link right and down; the undirected store adds the reverse entries
            if x + 1 < width {
                graph.add_edge(index(x, y), index(x + 1, y), 1.0);
            }
            if y + 1 < height {
                graph.add_edge(index(x, y), index(x, y + 1), 1.0);
            }
        }
    }

    graph
}

fn random_pairs<R: Rng>(rng: &mut R, n: usize, edge_factor: f64) -> Vec<(usize, usize)> {
    if n < 2 {
        return Vec::new();
    }
    let target = (edge_factor * n as f64) as usize;
    let mut seen = std::collections::HashSet::with_capacity(target);
    let mut pairs = Vec::with_capacity(target);
    // Bounded attempts keep dense requests on tiny graphs from spinning
    for _ in 0..target.saturating_mul(4) {
        if pairs.len() == target {
            break;
        }
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v && seen.insert((u, v)) {
            pairs.push((u, v));
        }
    }
    pairs
}
