use crate::graph::{DirectedGraph, MutableGraph};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::collections::HashSet;

/// Generates a random directed graph with `n` nodes labelled `0..n` and roughly
/// `edge_factor * n` edges.
///
/// Weights are whole numbers in `0..=max_weight`, so path costs stay exact when
/// summed. Self-loops and parallel edges are allowed.
pub fn generate_random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    rng: &mut R,
) -> Result<DirectedGraph<usize, OrderedFloat<f64>>> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.insert_node(v)?;
    }
    if n == 0 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(f64::from(rng.gen_range(0..=max_weight)));
        graph.insert_edge(&u, &v, weight)?;
    }

    Ok(graph)
}

/// Generates a `width` x `height` grid with 8-connectivity
///
/// Node payloads are `y * width + x`. Cardinal moves cost 1.0 and diagonal moves 1.4.
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<usize, OrderedFloat<f64>>> {
    generate_grid_with_obstacles(width, height, &HashSet::new())
}

/// Generates a grid like [`generate_grid`] where the cells in `blocked` have no edges
pub fn generate_grid_with_obstacles(
    width: usize,
    height: usize,
    blocked: &HashSet<(usize, usize)>,
) -> Result<DirectedGraph<usize, OrderedFloat<f64>>> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    for v in 0..(width * height) {
        graph.insert_node(v)?;
    }

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }
            let node = y * width + x;

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !blocked.contains(&(nx, ny)) {
                    graph.insert_edge(&node, &(ny * width + nx), OrderedFloat(cost))?;
                }
            }
        }
    }

    Ok(graph)
}
