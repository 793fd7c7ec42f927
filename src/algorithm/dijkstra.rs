use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::graph::{Graph, NodeId};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{FrontierQueue, HashTableMap, KeyValueMap};
use crate::{Error, Result};

/// One candidate path endpoint discovered during a search
///
/// Records live in a per-search arena and are never modified once created; a
/// cheaper route to a node produces a new record instead.
#[derive(Debug, Clone, Copy)]
struct SearchRecord<W> {
    /// Node this record's path ends at
    node: NodeId,
    /// Cumulative weight from the start node
    cost: W,
    /// Arena index of the preceding record, `None` for the start record
    predecessor: Option<usize>,
}

/// Call-scoped bookkeeping for one search
#[derive(Debug)]
struct SearchState<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    records: Vec<SearchRecord<W>>,
    /// Min-queue of record indices keyed by cost. Records superseded by a
    /// cheaper one are left in place and skipped when popped.
    frontier: FrontierQueue<W>,
    /// Live record index for every discovered node
    best: HashTableMap<NodeId, usize>,
}

impl<W> SearchState<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn new(start: NodeId) -> Result<Self> {
        let mut state = SearchState {
            records: Vec::new(),
            frontier: FrontierQueue::new(),
            best: HashTableMap::new(),
        };
        state.discover(start, W::zero(), None)?;
        Ok(state)
    }

    /// Creates a record and makes it the live one for its node
    fn discover(&mut self, node: NodeId, cost: W, predecessor: Option<usize>) -> Result<()> {
        let index = self.records.len();
        self.records.push(SearchRecord { node, cost, predecessor });
        self.best.insert(node, index)?;
        self.frontier.push(index, cost);
        Ok(())
    }

    /// Offers the path `top -> successor` and keeps it if strictly cheaper than the known one
    fn relax(&mut self, top: usize, successor: NodeId, weight: W) -> Result<bool> {
        let candidate = self.records[top].cost + weight;

        if self.best.contains_key(&successor) {
            let current = *self.best.get(&successor)?;
            if self.records[current].cost <= candidate {
                return Ok(false);
            }
            self.best.remove(&successor)?;
        }

        self.discover(successor, candidate, Some(top))?;
        Ok(true)
    }

    /// Pops the cheapest record that is still live for its node
    fn pop_live(&mut self) -> Result<Option<usize>> {
        while let Some((index, cost)) = self.frontier.pop() {
            let node = self.records[index].node;
            if *self.best.get(&node)? == index {
                return Ok(Some(index));
            }
            trace!("skipping superseded record for {} at cost {:?}", node, cost);
        }
        Ok(None)
    }

    /// Walks the predecessor chain back to the start record
    fn reconstruct(&self, index: usize) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(index);
        while let Some(i) = current {
            let record = &self.records[i];
            path.push(record.node);
            current = record.predecessor;
        }
        path.reverse();
        path
    }
}

/// Classic Dijkstra's algorithm for single-pair queries
///
/// Stops as soon as the end node is finalized. Among frontier records of equal
/// cost, the one discovered first is expanded first.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_path(&self, graph: &G, start: &N, end: &N) -> Result<ShortestPathResult<W>> {
        let source = graph.resolve_node(start)?;
        let target = graph.resolve_node(end)?;
        debug!("searching {:?} ({}) -> {:?} ({})", start, source, end, target);

        let mut state = SearchState::new(source)?;
        let mut nodes_settled = 0;
        let mut edges_scanned = 0;

        while let Some(top) = state.pop_live()? {
            nodes_settled += 1;
            let SearchRecord { node, cost, .. } = state.records[top];

            if node == target {
                let path = state.reconstruct(top);
                debug!(
                    "found path of {} hops, cost {:?}, after settling {} nodes ({} frontier pushes)",
                    path.len() - 1,
                    cost,
                    nodes_settled,
                    state.frontier.pushed()
                );
                return Ok(ShortestPathResult {
                    source,
                    target,
                    path,
                    cost,
                    nodes_settled,
                    edges_scanned,
                });
            }

            for (successor, weight) in graph.outgoing_edges(node) {
                edges_scanned += 1;
                if state.relax(top, successor, weight)? {
                    trace!("relaxed {} -> {} to {:?}", node, successor, cost + weight);
                }
            }
        }

        debug!(
            "frontier exhausted after settling {} nodes ({} frontier pushes) without reaching {:?}",
            nodes_settled,
            state.frontier.pushed(),
            end
        );
        Err(Error::NoPathFound {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
        })
    }
}
