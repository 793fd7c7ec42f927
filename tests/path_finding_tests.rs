use dijkstra_graph::algorithm::dijkstra::Dijkstra;
use dijkstra_graph::algorithm::traits::ShortestPathAlgorithm;
use dijkstra_graph::graph::generators::{generate_grid, generate_grid_with_obstacles};
use dijkstra_graph::graph::DirectedGraph;
use dijkstra_graph::graph::{Graph, MutableGraph};
use dijkstra_graph::Error;
use ordered_float::OrderedFloat;
use std::collections::HashSet;

type LetterGraph = DirectedGraph<&'static str, OrderedFloat<f64>>;

// Test helper to build a graph from labels and weighted edges
fn build(nodes: &[&'static str], edges: &[(&'static str, &'static str, f64)]) -> LetterGraph {
    let mut graph = DirectedGraph::new();
    for &node in nodes {
        graph.insert_node(node).unwrap();
    }
    for &(from, to, weight) in edges {
        graph.insert_edge(&from, &to, OrderedFloat(weight)).unwrap();
    }
    graph
}

const FORWARD: [(&str, &str, f64); 7] = [
    ("A", "B", 15.0), ("A", "C", 1.0), ("A", "D", 4.0), ("B", "E", 1.0),
    ("E", "C", 10.0), ("D", "E", 10.0), ("B", "D", 2.0),
];

fn letters() -> LetterGraph {
    build(&["A", "B", "C", "D", "E"], &FORWARD)
}

fn two_way_letters() -> LetterGraph {
    let mut edges = FORWARD.to_vec();
    edges.extend(FORWARD.iter().map(|&(from, to, weight)| (to, from, weight)));
    build(&["A", "B", "C", "D", "E"], &edges)
}

#[test]
fn test_one_way_letters_prefers_route_through_d() {
    let graph = letters();
    let dijkstra = Dijkstra::new();

    assert_eq!(dijkstra.shortest_path_data(&graph, &"A", &"E").unwrap(), vec!["A", "D", "E"]);
    assert_eq!(dijkstra.shortest_path_cost(&graph, &"A", &"E").unwrap(), OrderedFloat(14.0));
}

#[test]
fn test_two_way_letters_uses_reverse_edge_from_d_to_b() {
    let graph = two_way_letters();
    let dijkstra = Dijkstra::new();

    assert_eq!(dijkstra.shortest_path_data(&graph, &"A", &"E").unwrap(), vec!["A", "D", "B", "E"]);
    assert_eq!(dijkstra.shortest_path_cost(&graph, &"A", &"E").unwrap(), OrderedFloat(7.0));

    assert_eq!(dijkstra.shortest_path_data(&graph, &"C", &"D").unwrap(), vec!["C", "A", "D"]);
    assert_eq!(dijkstra.shortest_path_cost(&graph, &"C", &"D").unwrap(), OrderedFloat(5.0));
}

#[test]
fn test_no_edges_into_destination() {
    let graph = build(&["A", "B", "C", "D", "E"], &[
        ("A", "B", 15.0), ("A", "C", 1.0), ("A", "D", 4.0), ("E", "C", 10.0),
        ("B", "A", 15.0), ("C", "A", 1.0), ("D", "A", 4.0), ("E", "B", 1.0), ("E", "D", 10.0),
    ]);
    let dijkstra = Dijkstra::new();

    let err = dijkstra.shortest_path_data(&graph, &"A", &"E").unwrap_err();
    assert!(matches!(err, Error::NoPathFound { .. }));
    let err = dijkstra.shortest_path_cost(&graph, &"A", &"E").unwrap_err();
    assert!(matches!(err, Error::NoPathFound { .. }));

    // The reverse direction is reachable
    assert_eq!(dijkstra.shortest_path_data(&graph, &"E", &"A").unwrap(), vec!["E", "C", "A"]);
    assert_eq!(dijkstra.shortest_path_cost(&graph, &"E", &"A").unwrap(), OrderedFloat(11.0));
}

#[test]
fn test_seven_node_graph() {
    let graph = build(&["A", "B", "C", "D", "E", "F", "G"], &[
        ("A", "E", 3.0), ("A", "D", 2.0), ("A", "B", 4.0), ("E", "D", 4.0),
        ("E", "B", 3.0), ("E", "C", 2.0), ("C", "B", 2.0), ("C", "F", 3.0),
        ("F", "G", 2.0), ("D", "G", 8.0), ("D", "C", 2.0),
    ]);
    let dijkstra = Dijkstra::new();

    assert_eq!(dijkstra.shortest_path_data(&graph, &"A", &"G").unwrap(), vec!["A", "D", "C", "F", "G"]);
    assert_eq!(dijkstra.shortest_path_cost(&graph, &"A", &"G").unwrap(), OrderedFloat(9.0));
}

#[test]
fn test_paths_leaving_a_late_node() {
    let graph = build(&["A", "B", "C", "D", "E", "F", "G"], &[
        ("A", "B", 1.0), ("A", "C", 4.0), ("A", "F", 2.0), ("B", "E", 4.0),
        ("B", "F", 3.0), ("F", "C", 1.0), ("F", "D", 3.0), ("C", "D", 1.0),
        ("C", "G", 4.0), ("D", "E", 2.0), ("D", "G", 2.0), ("E", "G", 3.0),
        ("E", "B", 2.0), ("D", "B", 4.0),
    ]);
    let dijkstra = Dijkstra::new();

    assert_eq!(dijkstra.shortest_path_data(&graph, &"E", &"B").unwrap(), vec!["E", "B"]);
    assert_eq!(dijkstra.shortest_path_cost(&graph, &"E", &"B").unwrap(), OrderedFloat(2.0));

    assert_eq!(dijkstra.shortest_path_data(&graph, &"E", &"D").unwrap(), vec!["E", "B", "F", "C", "D"]);
    assert_eq!(dijkstra.shortest_path_cost(&graph, &"E", &"D").unwrap(), OrderedFloat(7.0));
}

#[test]
fn test_parallel_edges_and_self_loop() {
    let mut graph: DirectedGraph<i32, OrderedFloat<f64>> = DirectedGraph::new();
    for node in [1, 6, 11] {
        graph.insert_node(node).unwrap();
    }
    graph.insert_edge(&11, &1, OrderedFloat(3.0)).unwrap();
    graph.insert_edge(&6, &11, OrderedFloat(3.0)).unwrap();
    graph.insert_edge(&1, &11, OrderedFloat(5.0)).unwrap();
    graph.insert_edge(&6, &6, OrderedFloat(1.0)).unwrap();
    graph.insert_edge(&1, &6, OrderedFloat(4.0)).unwrap();
    graph.insert_edge(&6, &1, OrderedFloat(6.0)).unwrap();
    graph.insert_edge(&6, &11, OrderedFloat(7.0)).unwrap();

    let dijkstra = Dijkstra::new();
    assert_eq!(dijkstra.shortest_path_data(&graph, &6, &11).unwrap(), vec![6, 11]);
    assert_eq!(dijkstra.shortest_path_cost(&graph, &6, &11).unwrap(), OrderedFloat(3.0));
    assert_eq!(dijkstra.shortest_path_cost(&graph, &11, &6).unwrap(), OrderedFloat(7.0));
}

#[test]
fn test_start_equals_end_ignores_self_loop() {
    let mut graph = letters();
    graph.insert_edge(&"A", &"A", OrderedFloat(5.0)).unwrap();
    let dijkstra = Dijkstra::new();

    let result = dijkstra.compute_shortest_path(&graph, &"A", &"A").unwrap();
    assert_eq!(result.path.len(), 1);
    assert_eq!(result.hops(), 0);
    assert_eq!(result.cost, OrderedFloat(0.0));
    assert_eq!(dijkstra.shortest_path_data(&graph, &"A", &"A").unwrap(), vec!["A"]);
    assert_eq!(dijkstra.shortest_path_cost(&graph, &"A", &"A").unwrap(), OrderedFloat(0.0));
}

#[test]
fn test_unknown_nodes_rejected_before_search() {
    let graph = letters();
    let dijkstra = Dijkstra::new();

    assert_eq!(
        dijkstra.shortest_path_data(&graph, &"X", &"A").unwrap_err(),
        Error::UnknownNode("\"X\"".to_string())
    );
    assert_eq!(
        dijkstra.shortest_path_cost(&graph, &"A", &"Z").unwrap_err(),
        Error::UnknownNode("\"Z\"".to_string())
    );
    assert!(matches!(
        dijkstra.compute_shortest_path(&graph, &"X", &"X"),
        Err(Error::UnknownNode(_))
    ));
}

#[test]
fn test_no_path_against_edge_direction() {
    let graph = build(&["A", "B", "C"], &[("A", "B", 2.0), ("B", "C", 3.0)]);
    let dijkstra = Dijkstra::new();

    assert_eq!(
        dijkstra.compute_shortest_path(&graph, &"B", &"A").unwrap_err(),
        Error::NoPathFound { start: "\"B\"".to_string(), end: "\"A\"".to_string() }
    );
    assert_eq!(dijkstra.shortest_path_cost(&graph, &"A", &"C").unwrap(), OrderedFloat(5.0));
}

#[test]
fn test_equal_cost_ties_follow_discovery_order() {
    let dijkstra = Dijkstra::new();

    // B is discovered before C, so the route through B is settled first
    let graph = build(&["A", "B", "C", "D"], &[
        ("A", "B", 1.0), ("A", "C", 1.0), ("B", "D", 1.0), ("C", "D", 1.0),
    ]);
    assert_eq!(dijkstra.shortest_path_data(&graph, &"A", &"D").unwrap(), vec!["A", "B", "D"]);

    let graph = build(&["A", "B", "C", "D"], &[
        ("A", "C", 1.0), ("A", "B", 1.0), ("B", "D", 1.0), ("C", "D", 1.0),
    ]);
    assert_eq!(dijkstra.shortest_path_data(&graph, &"A", &"D").unwrap(), vec!["A", "C", "D"]);
}

#[test]
fn test_cheaper_route_replaces_discovered_record() {
    // D is first discovered at cost 10 and later improved to 3 through B and C
    let graph = build(&["A", "B", "C", "D"], &[
        ("A", "D", 10.0), ("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0),
    ]);
    let dijkstra = Dijkstra::new();

    let result = dijkstra.compute_shortest_path(&graph, &"A", &"D").unwrap();
    assert_eq!(result.cost, OrderedFloat(3.0));
    assert_eq!(dijkstra.shortest_path_data(&graph, &"A", &"D").unwrap(), vec!["A", "B", "C", "D"]);
}

#[test]
fn test_zero_weight_cycle_terminates() {
    let graph = build(&["A", "B", "C", "D"], &[
        ("A", "B", 0.0), ("B", "C", 0.0), ("C", "A", 0.0), ("C", "D", 2.0),
    ]);
    let dijkstra = Dijkstra::new();

    assert_eq!(dijkstra.shortest_path_data(&graph, &"A", &"D").unwrap(), vec!["A", "B", "C", "D"]);
    assert_eq!(dijkstra.shortest_path_cost(&graph, &"A", &"D").unwrap(), OrderedFloat(2.0));
}

#[test]
fn test_search_stops_at_destination() {
    // The far side of the graph is never settled once B is finalized
    let graph = build(&["A", "B", "C", "D", "E"], &[
        ("A", "B", 1.0), ("A", "C", 5.0), ("C", "D", 1.0), ("D", "E", 1.0),
    ]);
    let dijkstra = Dijkstra::new();

    let result = dijkstra.compute_shortest_path(&graph, &"A", &"B").unwrap();
    assert_eq!(result.nodes_settled, 2);
    assert_eq!(result.edges_scanned, 2);
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10).unwrap();
    let dijkstra = Dijkstra::new();

    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let path = dijkstra.shortest_path_data(&graph, &source, &target).unwrap();
    let cost = dijkstra.shortest_path_cost(&graph, &source, &target).unwrap();

    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    assert_eq!(path.len(), 10, "Nine diagonal moves are cheapest");
    assert!((cost.into_inner() - 12.6).abs() < 1e-9);

    for pair in path.windows(2) {
        assert!(graph.contains_edge(&pair[0], &pair[1]), "Path should only use existing edges");
    }
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    let width = 10;
    let blocked: HashSet<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = generate_grid_with_obstacles(width, 10, &blocked).unwrap();
    let dijkstra = Dijkstra::new();

    let path = dijkstra.shortest_path_data(&graph, &0, &(width - 1)).unwrap();

    assert_eq!(path[0], 0);
    assert_eq!(path[path.len() - 1], width - 1);
    for &node in &path {
        assert!(!blocked.contains(&(node % width, node / width)), "Path should avoid obstacles");
    }
    for pair in path.windows(2) {
        assert!(graph.contains_edge(&pair[0], &pair[1]), "Path should only use existing edges");
    }

    // A blocked cell has no edges at all
    let wall = 5;
    assert!(matches!(
        dijkstra.compute_shortest_path(&graph, &0, &wall),
        Err(Error::NoPathFound { .. })
    ));
}
