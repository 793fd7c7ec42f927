use crate::graph::traits::{Graph, MutableGraph, NodeId};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A slot in the node arena
#[derive(Debug, Clone)]
struct NodeEntry<N, W> {
    data: N,
    /// Outgoing edges: [(successor, weight)]
    outgoing: Vec<(NodeId, W)>,
    /// Incoming edges: [(predecessor, weight)]
    incoming: Vec<(NodeId, W)>,
}

/// A directed graph implementation using an arena of adjacency lists
///
/// Nodes live in a `Vec` and are addressed by their index; edges refer to
/// their endpoints by index rather than by reference. Payloads are unique and
/// indexed so that queries can be phrased in terms of payload values.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Node arena; removed nodes leave a `None` behind so ids stay stable
    nodes: Vec<Option<NodeEntry<N, W>>>,

    /// Payload -> node id
    index: HashMap<N, NodeId>,

    /// Number of edges currently stored
    edge_count: usize,
}

impl<N, W> DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty directed graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Iterates over the ids of all live nodes in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| NodeId(i))
    }

    /// Iterates over (id, payload) pairs of all live nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|entry| (NodeId(i), &entry.data)))
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.nodes
            .iter()
            .flatten()
            .all(|entry| entry.outgoing.iter().all(|(_, weight)| *weight >= W::zero()))
    }

    fn entry(&self, node: NodeId) -> Option<&NodeEntry<N, W>> {
        self.nodes.get(node.index()).and_then(|slot| slot.as_ref())
    }

    fn entry_mut(&mut self, node: NodeId) -> Result<&mut NodeEntry<N, W>> {
        self.nodes
            .get_mut(node.index())
            .and_then(|slot| slot.as_mut())
            .ok_or(Error::InvalidNode(node.index()))
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.index.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn resolve_node(&self, data: &N) -> Result<NodeId> {
        self.index
            .get(data)
            .copied()
            .ok_or_else(|| Error::UnknownNode(format!("{:?}", data)))
    }

    fn node_data(&self, node: NodeId) -> Option<&N> {
        self.entry(node).map(|entry| &entry.data)
    }

    fn outgoing_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        match self.entry(node) {
            Some(entry) => Box::new(entry.outgoing.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn incoming_edges(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, W)> + '_> {
        match self.entry(node) {
            Some(entry) => Box::new(entry.incoming.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        let from = self.resolve_node(from).ok()?;
        let to = self.resolve_node(to).ok()?;
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .fold(None, |cheapest: Option<W>, weight| match cheapest {
                Some(current) if current <= weight => Some(current),
                _ => Some(weight),
            })
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn insert_node(&mut self, data: N) -> Result<NodeId> {
        if self.index.contains_key(&data) {
            return Err(Error::DuplicateNode(format!("{:?}", data)));
        }

        let id = NodeId(self.nodes.len());
        self.index.insert(data.clone(), id);
        self.nodes.push(Some(NodeEntry {
            data,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }));
        Ok(id)
    }

    fn remove_node(&mut self, data: &N) -> Result<N> {
        let id = self.resolve_node(data)?;
        let entry = self.nodes[id.index()]
            .take()
            .ok_or(Error::InvalidNode(id.index()))?;
        self.index.remove(&entry.data);

        // Self-loops show up in both lists but were only counted once
        let mut removed = entry.outgoing.len();
        for &(target, _) in &entry.outgoing {
            if let Some(Some(other)) = self.nodes.get_mut(target.index()) {
                other.incoming.retain(|(source, _)| *source != id);
            }
        }
        for &(source, _) in &entry.incoming {
            if source == id {
                continue;
            }
            removed += 1;
            if let Some(Some(other)) = self.nodes.get_mut(source.index()) {
                other.outgoing.retain(|(target, _)| *target != id);
            }
        }

        self.edge_count -= removed;
        Ok(entry.data)
    }

    fn insert_edge(&mut self, from: &N, to: &N, weight: W) -> Result<()> {
        let from = self.resolve_node(from)?;
        let to = self.resolve_node(to)?;
        if weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        self.entry_mut(from)?.outgoing.push((to, weight));
        self.entry_mut(to)?.incoming.push((from, weight));
        self.edge_count += 1;
        Ok(())
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> Result<usize> {
        let from = self.resolve_node(from)?;
        let to = self.resolve_node(to)?;

        let outgoing = &mut self.entry_mut(from)?.outgoing;
        let len_before = outgoing.len();
        outgoing.retain(|(target, _)| *target != to);
        let removed = len_before - outgoing.len();

        self.entry_mut(to)?.incoming.retain(|(source, _)| *source != from);

        self.edge_count -= removed;
        Ok(removed)
    }
}
