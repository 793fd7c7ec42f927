use colored::*;
use dijkstra_graph::graph::{DirectedGraph, MutableGraph};
use dijkstra_graph::{Dijkstra, Error, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;

type Weight = OrderedFloat<f64>;

// Builds a graph from node labels and (from, to, weight) triples
fn build(nodes: &[&'static str], edges: &[(&'static str, &'static str, f64)]) -> Result<DirectedGraph<&'static str, Weight>, Error> {
    let mut graph = DirectedGraph::new();
    for &node in nodes {
        graph.insert_node(node)?;
    }
    for &(from, to, weight) in edges {
        graph.insert_edge(&from, &to, OrderedFloat(weight))?;
    }
    Ok(graph)
}

fn report(title: &str, graph: &DirectedGraph<&'static str, Weight>, start: &'static str, end: &'static str) {
    let dijkstra = Dijkstra::new();
    println!("\n{} {} -> {}", title.bold().cyan(), start.yellow(), end.yellow());

    match dijkstra.shortest_path_data(graph, &start, &end) {
        Ok(path) => {
            let cost = dijkstra
                .shortest_path_cost(graph, &start, &end)
                .map(|cost| cost.into_inner())
                .unwrap_or(f64::NAN);
            println!("  path: {}", path.join(" -> ").green());
            println!("  cost: {}", format!("{:.1}", cost).green());
        }
        Err(Error::NoPathFound { .. }) => println!("  {}", "no route exists".red()),
        Err(err) => println!("  {}", err.to_string().red()),
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    println!("{}", "=== Shortest path demo ===".bold());

    let letters = ["A", "B", "C", "D", "E"];
    let forward = [
        ("A", "B", 15.0), ("A", "C", 1.0), ("A", "D", 4.0), ("B", "E", 1.0),
        ("E", "C", 10.0), ("D", "E", 10.0), ("B", "D", 2.0),
    ];
    let mut symmetric = forward.to_vec();
    symmetric.extend(forward.iter().map(|&(from, to, weight)| (to, from, weight)));

    let one_way = build(&letters, &forward)?;
    report("One-way streets", &one_way, "A", "E");

    let two_way = build(&letters, &symmetric)?;
    report("Two-way streets", &two_way, "A", "E");
    report("Two-way streets", &two_way, "C", "D");

    let dead_end = build(&letters, &[
        ("A", "B", 15.0), ("A", "C", 1.0), ("A", "D", 4.0), ("E", "C", 10.0),
        ("B", "A", 15.0), ("C", "A", 1.0), ("D", "A", 4.0), ("E", "B", 1.0), ("E", "D", 10.0),
    ])?;
    report("Nothing leads to E", &dead_end, "A", "E");

    let seven = build(&["A", "B", "C", "D", "E", "F", "G"], &[
        ("A", "E", 3.0), ("A", "D", 2.0), ("A", "B", 4.0), ("E", "D", 4.0),
        ("E", "B", 3.0), ("E", "C", 2.0), ("C", "B", 2.0), ("C", "F", 3.0),
        ("F", "G", 2.0), ("D", "G", 8.0), ("D", "C", 2.0),
    ])?;
    report("Seven stops", &seven, "A", "G");
    report("Unknown stop", &seven, "A", "Z");

    Ok(())
}
