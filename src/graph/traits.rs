use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Stable index of a node inside a graph's node arena
///
/// Ids are never reused while the graph lives, so an id handed out before a
/// `remove_node` keeps pointing at the same (now vacant) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Returns the arena index
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Trait representing a weighted directed graph whose nodes are keyed by payload
pub trait Graph<N, W>: Debug
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges counted individually
    fn edge_count(&self) -> usize;

    /// Looks up the node carrying the given payload
    fn resolve_node(&self, data: &N) -> Result<NodeId>;

    /// Returns the payload stored at a node, if the node exists
    fn node_data(&self, node: NodeId) -> Option<&N>;

    /// Returns an iterator over the outgoing edges from a node as (successor, weight)
    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;

    /// Returns an iterator over the incoming edges to a node as (predecessor, weight)
    fn incoming_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_>;

    /// Returns true if a node carries the given payload
    fn contains_node(&self, data: &N) -> bool {
        self.resolve_node(data).is_ok()
    }

    /// Returns true if there's at least one edge between the two nodes
    fn contains_edge(&self, from: &N, to: &N) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of the cheapest edge between two nodes, if any exists
    fn edge_weight(&self, from: &N, to: &N) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a node carrying `data` and returns its id
    fn insert_node(&mut self, data: N) -> Result<NodeId>;

    /// Removes the node carrying `data` together with every edge touching it
    fn remove_node(&mut self, data: &N) -> Result<N>;

    /// Adds a directed edge between two nodes; parallel edges are kept side by side
    fn insert_edge(&mut self, from: &N, to: &N, weight: W) -> Result<()>;

    /// Removes every edge from `from` to `to`, returning how many were removed
    fn remove_edge(&mut self, from: &N, to: &N) -> Result<usize>;
}
