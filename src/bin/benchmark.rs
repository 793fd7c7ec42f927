use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ordered_float::OrderedFloat;
use dijkstra_graph::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use dijkstra_graph::graph::generators::generate_random_graph;
use dijkstra_graph::graph::{DirectedGraph, Graph};
use dijkstra_graph::Error;

/// Aggregate figures for one batch of queries
struct BatchStats {
    total_time: Duration,
    found: usize,
    unreachable: usize,
    nodes_settled: usize,
}

// Runs `queries` random single-pair queries against the graph
fn benchmark_queries<R: Rng>(
    graph: &DirectedGraph<usize, OrderedFloat<f64>>,
    queries: usize,
    rng: &mut R,
) -> Result<BatchStats, Error> {
    let dijkstra = Dijkstra::new();
    let n = graph.node_count();
    let mut stats = BatchStats {
        total_time: Duration::ZERO,
        found: 0,
        unreachable: 0,
        nodes_settled: 0,
    };

    for _ in 0..queries {
        let start = rng.gen_range(0..n);
        let end = rng.gen_range(0..n);

        let timer = Instant::now();
        let result = dijkstra.compute_shortest_path(graph, &start, &end);
        stats.total_time += timer.elapsed();

        match result {
            Ok(path) => {
                stats.found += 1;
                stats.nodes_settled += path.nodes_settled;
            }
            Err(Error::NoPathFound { .. }) => stats.unreachable += 1,
            Err(err) => return Err(err),
        }
    }

    Ok(stats)
}

fn main() -> Result<(), Error> {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per node
    let edge_factor = 2.0;
    let queries = 100;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: single-pair Dijkstra queries");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("Queries per graph: {}", queries);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random_graph(size, edge_factor, 100, &mut rng)?;
        println!("Graph has {} nodes and {} edges", graph.node_count(), graph.edge_count());

        let stats = benchmark_queries(&graph, queries, &mut rng)?;
        println!(
            "  - {} paths found, {} unreachable pairs in {:?}",
            stats.found, stats.unreachable, stats.total_time
        );

        results.push((size, stats));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<10} | {:<15}",
             "Nodes", "Avg query (us)", "Found", "Avg settled");
    println!("-----------------------------------------------------");

    for (size, stats) in &results {
        let avg_us = stats.total_time.as_secs_f64() * 1e6 / queries as f64;
        let avg_settled = if stats.found > 0 {
            stats.nodes_settled as f64 / stats.found as f64
        } else {
            0.0
        };

        println!("{:<10} | {:<15.2} | {:<10} | {:<15.1}",
                 size, avg_us, stats.found, avg_settled);
    }

    Ok(())
}
