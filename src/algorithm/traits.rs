use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};
use crate::graph::{Graph, NodeId};
use crate::{Error, Result};

/// Result of a single-pair shortest path query
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Node the path starts at
    pub source: NodeId,

    /// Node the path ends at
    pub target: NodeId,

    /// Nodes along the path, `source` first and `target` last
    pub path: Vec<NodeId>,

    /// Sum of the edge weights along `path`
    pub cost: W,

    /// Number of frontier records finalized before the target was reached
    pub nodes_settled: usize,

    /// Number of outgoing edges examined during the search
    pub edges_scanned: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Trait for single-pair shortest path algorithms
///
/// Implementors only provide [`compute_shortest_path`](Self::compute_shortest_path);
/// the payload and cost queries are derived from it.
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
    G: Graph<N, W>,
{
    /// Compute the cheapest path from the node carrying `start` to the node carrying `end`
    ///
    /// Fails with `UnknownNode` if either payload is not in the graph, and with
    /// `NoPathFound` if `end` cannot be reached from `start`.
    fn compute_shortest_path(&self, graph: &G, start: &N, end: &N) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the payloads along the shortest path, `start` first and `end` last
    fn shortest_path_data(&self, graph: &G, start: &N, end: &N) -> Result<Vec<N>> {
        let result = self.compute_shortest_path(graph, start, end)?;
        result
            .path
            .iter()
            .map(|&node| {
                graph
                    .node_data(node)
                    .cloned()
                    .ok_or(Error::InvalidNode(node.index()))
            })
            .collect()
    }

    /// Get the total cost of the shortest path
    fn shortest_path_cost(&self, graph: &G, start: &N, end: &N) -> Result<W> {
        self.compute_shortest_path(graph, start, end)
            .map(|result| result.cost)
    }
}
