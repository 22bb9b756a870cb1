use classic_graph::graph::generators::{grid, random_directed, random_undirected};
use classic_graph::graph::{DirectedGraph, Graph, MutableGraph, UndirectedGraph};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_add_edge_adds_both_endpoints() {
    let mut graph: DirectedGraph<&str> = DirectedGraph::new();
    graph.add_edge("A", "B", 2.5);

    assert_eq!(graph.node_count(), 2);
    assert!(graph.contains_node(&"A"));
    assert!(graph.contains_node(&"B"));
    assert!(graph.has_edge(&"A", &"B"));
    assert!(!graph.has_edge(&"B", &"A"), "Directed graph stores only the forward entry");
}

#[test]
fn test_add_node_is_idempotent() {
    let mut graph: UndirectedGraph<&str> = UndirectedGraph::new();
    let first = graph.add_node("H");
    let second = graph.add_node("H");

    assert_eq!(first, second);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.neighbors(first).count(), 0);
}

#[test]
fn test_undirected_stores_both_directions() {
    let mut graph: UndirectedGraph<char> = UndirectedGraph::new();
    graph.add_edge('a', 'b', 3.0);

    let a = graph.node_id(&'a').unwrap();
    let b = graph.node_id(&'b').unwrap();
    assert_eq!(graph.weight(a, b), Some(3.0));
    assert_eq!(graph.weight(b, a), Some(3.0));
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.is_directed());
}

#[test]
fn test_ids_follow_insertion_order() {
    let mut graph: DirectedGraph<&str> = DirectedGraph::new();
    graph.add_unweighted_edge("C", "A");
    graph.add_node("B");
    graph.add_unweighted_edge("A", "B");

    let labels: Vec<&str> = graph.nodes().copied().collect();
    assert_eq!(labels, vec!["C", "A", "B"]);
    assert_eq!(graph.node(graph.node_id(&"B").unwrap()), &"B");
}

#[test]
fn test_adjacency_order_is_preserved() {
    let mut graph: DirectedGraph<u32> = DirectedGraph::new();
    for target in [5, 3, 9, 1] {
        graph.add_unweighted_edge(0, target);
    }
    let source = graph.node_id(&0).unwrap();
    let neighbors: Vec<u32> = graph.neighbors(source).map(|id| *graph.node(id)).collect();
    assert_eq!(neighbors, vec![5, 3, 9, 1]);
}

#[test]
fn test_repeated_edge_overwrites_weight() {
    let mut graph: DirectedGraph<&str> = DirectedGraph::new();
    graph.add_edge("A", "B", 4.0);
    graph.add_edge("A", "B", 1.0);

    let a = graph.node_id(&"A").unwrap();
    let b = graph.node_id(&"B").unwrap();
    assert_eq!(graph.weight(a, b), Some(1.0));
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.outgoing_edges(a).all(|(_, w)| w == 1.0));
}

#[test]
fn test_validate_non_negative() {
    let mut graph: DirectedGraph<&str> = DirectedGraph::from_edges(vec![("A", "B", 1.0), ("B", "C", 0.0)]);
    assert!(graph.validate_non_negative());
    graph.add_edge("C", "A", -0.5);
    assert!(!graph.validate_non_negative());
}

#[test]
fn test_ordered_float_weights() {
    let graph: UndirectedGraph<u8, OrderedFloat<f64>> =
        UndirectedGraph::from_edges(vec![(1, 2, OrderedFloat(1.5)), (2, 3, OrderedFloat(2.0))]);
    let two = graph.node_id(&2).unwrap();
    let mut weights: Vec<OrderedFloat<f64>> = graph.outgoing_edges(two).map(|(_, w)| w).collect();
    weights.sort();
    assert_eq!(weights, vec![OrderedFloat(1.5), OrderedFloat(2.0)]);
}

#[test]
fn test_generators() {
    let mut rng = StdRng::seed_from_u64(7);
    let directed = random_directed(&mut rng, 50, 3.0, 1.0..10.0);
    assert_eq!(directed.node_count(), 50);
    assert!(directed.edge_count() <= 150);
    assert!(directed.validate_non_negative());

    let undirected = random_undirected(&mut rng, 20, 2.0, 1.0..5.0);
    assert_eq!(undirected.node_count(), 20);

    let lattice = grid(4, 3);
    assert_eq!(lattice.node_count(), 12);
    // 3 horizontal links per row, 4 vertical links per row gap
    assert_eq!(lattice.edge_count(), 3 * 3 + 4 * 2);
}
