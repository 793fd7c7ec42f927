//! Dijkstra Graph - single-pair shortest path queries
//!
//! This library answers "what is the cheapest route from `start` to `end`" over a
//! weighted directed graph whose nodes are looked up by payload value. Each query
//! runs Dijkstra's algorithm with a min-priority frontier and returns either the
//! sequence of node payloads along the winning path or its total cost.
//!
//! Edge weights must be non-negative.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::NodeId;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("No path found from {start} to {end}")]
    NoPathFound { start: String, end: String },

    #[error("Node already present in graph: {0}")]
    DuplicateNode(String),

    #[error("Invalid node ID: {0}")]
    InvalidNode(usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Key already present: {0}")]
    DuplicateKey(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
