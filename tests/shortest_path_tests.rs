use std::collections::HashMap;

use classic_graph::graph::generators::{grid, random_directed};
use classic_graph::{
    bellman_ford, dijkstra, BellmanFord, Dijkstra, DirectedGraph, Error, Graph, MutableGraph,
    ShortestPathAlgorithm, UndirectedGraph,
};
use ordered_float::OrderedFloat;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Directed: A->B -1, B->C 8, A->C 9, B->D 7, C->D -4
fn negative_edge_graph() -> DirectedGraph<&'static str> {
    DirectedGraph::from_edges(vec![
        ("A", "B", -1.0),
        ("B", "C", 8.0),
        ("A", "C", 9.0),
        ("B", "D", 7.0),
        ("C", "D", -4.0),
    ])
}

#[test]
fn test_bellman_ford_from_a() {
    init_logger();
    let result = bellman_ford(&negative_edge_graph(), &"A").unwrap();

    let distances = HashMap::from([("A", 0.0), ("B", -1.0), ("C", 7.0), ("D", 3.0)]);
    let predecessors = HashMap::from([("A", None), ("B", Some("A")), ("C", Some("B")), ("D", Some("C"))]);
    assert_eq!(result.distances, distances);
    assert_eq!(result.predecessors, predecessors);
    assert_eq!(result.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
}

#[test]
fn test_bellman_ford_unreachable_stays_infinite() {
    let result = bellman_ford(&negative_edge_graph(), &"B").unwrap();

    assert_eq!(result.distances[&"A"], f64::INFINITY);
    assert_eq!(result.distance(&"A"), None);
    assert_eq!(result.distance(&"C"), Some(8.0));
    assert_eq!(result.distance(&"D"), Some(4.0));
    assert_eq!(result.predecessors[&"A"], None);
    assert_eq!(result.predecessors[&"B"], None);
    assert_eq!(result.path_to(&"A"), None);
}

#[test]
fn test_bellman_ford_negative_cycle() {
    let mut graph = negative_edge_graph();
    graph.add_edge("D", "B", 1.0); // B -> D -> B: 7 + 1, B -> C -> D -> B: 8 - 4 + 1 = 5
    assert!(bellman_ford(&graph, &"A").is_ok());

    graph.add_edge("D", "A", -10.0); // A -> B -> C -> D -> A: -1 + 8 - 4 - 10 = -7
    match bellman_ford(&graph, &"A") {
        Err(Error::NegativeCycle { .. }) => {}
        other => panic!("expected a negative cycle, got {:?}", other),
    }
}

#[test]
fn test_bellman_ford_ignores_unreachable_negative_cycle() {
    let mut graph = negative_edge_graph();
    graph.add_edge("X", "Y", -5.0);
    graph.add_edge("Y", "X", 1.0);

    let result = bellman_ford(&graph, &"A").unwrap();
    assert_eq!(result.distance(&"D"), Some(3.0));
    assert!(!result.is_reachable(&"X"));
}

#[test]
fn test_bellman_ford_missing_source() {
    assert!(matches!(
        bellman_ford(&negative_edge_graph(), &"Q"),
        Err(Error::NodeNotFound(_))
    ));
}

#[test]
fn test_bellman_ford_early_exit_same_result() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = random_directed(&mut rng, 80, 4.0, -2.0..20.0);
    let full = BellmanFord::new().compute_shortest_paths(&graph, &0);
    let early = BellmanFord::new().with_early_exit(true).compute_shortest_paths(&graph, &0);
    assert_eq!(full, early);
}

#[test]
fn test_dijkstra_sample() {
    init_logger();
    let graph = DirectedGraph::from_edges(vec![
        ("A", "B", 5.0),
        ("B", "A", 5.0),
        ("B", "C", 3.0),
        ("B", "D", 6.0),
        ("C", "D", 2.0),
    ]);

    let result = dijkstra(&graph, &"B").unwrap();
    let expected = HashMap::from([("B", None), ("A", Some("B")), ("C", Some("B")), ("D", Some("C"))]);
    assert_eq!(result.predecessors, expected);
    assert_eq!(result.distance(&"D"), Some(5.0));
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<&str, f64, DirectedGraph<&str>>>::name(&Dijkstra::new()),
        "Dijkstra"
    );
}

#[test]
fn test_dijkstra_unreachable_nodes() {
    let mut graph = DirectedGraph::from_edges(vec![("A", "B", 1.0)]);
    graph.add_node("C");

    let result = dijkstra(&graph, &"A").unwrap();
    assert_eq!(result.distances[&"C"], f64::INFINITY);
    assert_eq!(result.predecessors[&"C"], None);
    assert_eq!(result.path_to(&"C"), None);
}

#[test]
fn test_dijkstra_grid_paths_use_edges() {
    let graph = grid(10, 10);
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &0).unwrap();

    // Manhattan distance on a unit grid
    assert_eq!(result.distance(&99), Some(18.0));
    let path = <Dijkstra as ShortestPathAlgorithm<usize, f64, UndirectedGraph<usize>>>::get_path(&dijkstra, &result, &99)
        .unwrap();
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&99));
    for pair in path.windows(2) {
        assert!(graph.has_edge(&pair[0], &pair[1]), "path should only use existing edges");
    }
}

#[test]
fn test_ordered_float_weights() {
    let graph: DirectedGraph<u8, OrderedFloat<f64>> = DirectedGraph::from_edges(vec![
        (0, 1, OrderedFloat(2.0)),
        (1, 2, OrderedFloat(2.0)),
        (0, 2, OrderedFloat(5.0)),
    ]);
    let fast = dijkstra(&graph, &0).unwrap();
    let slow = bellman_ford(&graph, &0).unwrap();
    assert_eq!(fast.distance(&2), Some(OrderedFloat(4.0)));
    assert_eq!(fast.distances, slow.distances);
}

proptest! {
    #[test]
    fn test_bellman_ford_agrees_with_dijkstra(
        n in 1usize..15,
        edges in proptest::collection::vec((0usize..15, 0usize..15, 0u32..50), 0..40),
        source in 0usize..15
    ) {
        let mut graph: DirectedGraph<usize> = DirectedGraph::new();
        for v in 0..n {
            graph.add_node(v);
        }
        for &(a, b, w) in &edges {
            graph.add_edge(a % n, b % n, f64::from(w));
        }
        let source = source % n;

        let bf = bellman_ford(&graph, &source).unwrap();
        let dj = dijkstra(&graph, &source).unwrap();
        prop_assert_eq!(&bf.distances, &dj.distances);

        // Every reached node's predecessor edge is tight
        for v in 0..n {
            if let Some(Some(p)) = dj.predecessors.get(&v) {
                let (pi, vi) = (graph.node_id(p).unwrap(), graph.node_id(&v).unwrap());
                let w = graph.weight(pi, vi).unwrap();
                prop_assert_eq!(dj.distances[p] + w, dj.distances[&v]);
            }
        }
    }

    #[test]
    fn test_bellman_ford_detects_reachable_negative_cycle(
        n in 3usize..10,
        edges in proptest::collection::vec((0usize..10, 0usize..10, 0u32..20), 0..20)
    ) {
        let mut graph: DirectedGraph<usize> = DirectedGraph::new();
        for v in 0..n {
            graph.add_node(v);
        }
        for &(a, b, w) in &edges {
            graph.add_edge(a % n, b % n, f64::from(w));
        }
        // 0 -> 1 -> 2 -> 1 with total cycle weight -1
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(1, 2, -100.0);
        graph.add_edge(2, 1, 99.0);

        let is_negative_cycle = matches!(bellman_ford(&graph, &0), Err(Error::NegativeCycle { .. }));
        prop_assert!(is_negative_cycle);
    }
}
