use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node of a stored graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
}

/// An edge of a stored graph, endpoints given by node id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    /// Set when the edge lies on the session's most recent shortest path
    #[serde(default)]
    pub is_path: bool,
}

/// Represents a complete graph held by a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

/// An edge in a graph creation request, endpoints given by label
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Parameters for graph creation
#[derive(Debug, Deserialize)]
pub struct GraphCreationRequest {
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    /// Also insert every edge in the opposite direction with the same weight
    #[serde(default)]
    pub symmetric: bool,
}

/// Parameters for a shortest path query
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    pub start: String,
    pub end: String,
}

/// Response containing a shortest path
#[derive(Debug, Clone, Serialize)]
pub struct PathResponse {
    pub query_id: Uuid,
    pub algorithm: String,
    pub start: String,
    pub end: String,
    pub path: Vec<String>,
    pub cost: f64,
    pub hops: usize,
    pub nodes_settled: usize,
    pub edges_scanned: usize,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Short description of a session for listings
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub node_count: usize,
    pub edge_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Session containing graph data and its latest query
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub graph: WebGraph,
    pub last_query: Option<PathResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: WebGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            last_query: None,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            id: self.id,
            node_count: self.graph.nodes.len(),
            edge_count: self.graph.links.len(),
            created_at: self.created_at,
        }
    }
}
