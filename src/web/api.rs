use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Graph, MutableGraph};
use crate::web::models::*;
use crate::Error;

/// Graph type served by the API: nodes are labelled by strings
pub type LabelGraph = DirectedGraph<String, OrderedFloat<f64>>;

/// Error half of every handler's result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Default cap on stored sessions
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(DEFAULT_MAX_SESSIONS)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/paths/:session_id", post(find_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Build a graph from labelled nodes and edges and open a session for it
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphCreationRequest>,
) -> Result<Json<Session>, ApiError> {
    let graph = build_graph(&request).map_err(|err| {
        warn!("rejected graph: {}", err);
        api_error(StatusCode::BAD_REQUEST, "invalid_graph", err.to_string())
    })?;

    let session = Session::new(convert_graph_to_web(&graph));
    {
        let mut sessions = lock_sessions(&state)?;
        if sessions.len() >= state.max_sessions {
            return Err(api_error(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions can be stored", state.max_sessions),
            ));
        }
        sessions.insert(session.id, session.clone());
    }

    info!(
        "created session {} with {} nodes and {} edges",
        session.id,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(Json(session))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = lock_sessions(&state)?;
    sessions
        .get(&session_id)
        .map(|session| Json(session.graph.clone()))
        .ok_or_else(session_not_found)
}

/// Run a shortest path query against a session's graph
pub async fn find_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let web_graph = {
        let sessions = lock_sessions(&state)?;
        match sessions.get(&session_id) {
            Some(session) => session.graph.clone(),
            None => return Err(session_not_found()),
        }
    };

    let graph = convert_web_graph_to_rust(&web_graph).map_err(|err| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "graph_conversion_failed",
            format!("Failed to convert graph: {}", err),
        )
    })?;

    let dijkstra = Dijkstra::new();
    let start_time = Instant::now();
    let result = dijkstra
        .compute_shortest_path(&graph, &request.start, &request.end)
        .map_err(|err| {
            warn!("query {} -> {} failed: {}", request.start, request.end, err);
            error_response(&err)
        })?;
    let execution_time = start_time.elapsed();

    let path = result
        .path
        .iter()
        .map(|&node| {
            graph
                .node_data(node)
                .cloned()
                .ok_or(Error::InvalidNode(node.index()))
        })
        .collect::<Result<Vec<String>, Error>>()
        .map_err(|err| error_response(&err))?;

    let response = PathResponse {
        query_id: Uuid::new_v4(),
        algorithm: <Dijkstra as ShortestPathAlgorithm<String, OrderedFloat<f64>, LabelGraph>>::name(&dijkstra)
            .to_string(),
        start: request.start,
        end: request.end,
        hops: result.hops(),
        path,
        cost: result.cost.into_inner(),
        nodes_settled: result.nodes_settled,
        edges_scanned: result.edges_scanned,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    };

    {
        let mut sessions = lock_sessions(&state)?;
        if let Some(session) = sessions.get_mut(&session_id) {
            mark_path(&mut session.graph, &response.path);
            session.last_query = Some(response.clone());
        }
    }

    Ok(Json(response))
}

/// List all active sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SessionSummary>>, ApiError> {
    let sessions = lock_sessions(&state)?;
    let mut summaries: Vec<SessionSummary> = sessions.values().map(Session::summary).collect();
    summaries.sort_by_key(|summary| summary.created_at);
    Ok(Json(summaries))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Session>, ApiError> {
    let sessions = lock_sessions(&state)?;
    sessions
        .get(&session_id)
        .map(|session| Json(session.clone()))
        .ok_or_else(session_not_found)
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn lock_sessions(state: &AppState) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
    state.sessions.lock().map_err(|_| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "state_poisoned",
            "Session store is unavailable".to_string(),
        )
    })
}

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (status, Json(ErrorResponse {
        error: error.to_string(),
        message,
        details: None,
    }))
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found".to_string())
}

/// Maps library errors onto HTTP statuses
fn error_response(err: &Error) -> ApiError {
    let (status, code) = match err {
        Error::UnknownNode(_) => (StatusCode::NOT_FOUND, "unknown_node"),
        Error::NoPathFound { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "no_path_found"),
        Error::DuplicateNode(_) | Error::NegativeWeight(_) | Error::InvalidNode(_) => {
            (StatusCode::BAD_REQUEST, "invalid_graph")
        }
        Error::KeyNotFound(_) | Error::DuplicateKey(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
        }
    };
    api_error(status, code, err.to_string())
}

/// Builds a graph from a creation request, rejecting duplicate labels,
/// dangling edge endpoints and negative weights.
pub fn build_graph(request: &GraphCreationRequest) -> crate::Result<LabelGraph> {
    let mut graph = DirectedGraph::with_capacity(request.nodes.len());
    for label in &request.nodes {
        graph.insert_node(label.clone())?;
    }
    for edge in &request.edges {
        let weight = OrderedFloat(edge.weight);
        graph.insert_edge(&edge.source, &edge.target, weight)?;
        if request.symmetric {
            graph.insert_edge(&edge.target, &edge.source, weight)?;
        }
    }
    Ok(graph)
}

fn convert_graph_to_web(graph: &LabelGraph) -> WebGraph {
    let nodes = graph
        .nodes()
        .map(|(id, label)| WebNode {
            id: id.index(),
            label: label.clone(),
        })
        .collect();

    let mut links = Vec::new();
    for u in graph.node_ids() {
        for (v, weight) in graph.outgoing_edges(u) {
            links.push(WebEdge {
                source: u.index(),
                target: v.index(),
                weight: weight.into_inner(),
                is_path: false,
            });
        }
    }

    WebGraph { nodes, links }
}

fn convert_web_graph_to_rust(web_graph: &WebGraph) -> crate::Result<LabelGraph> {
    let mut graph = DirectedGraph::with_capacity(web_graph.nodes.len());
    let mut labels = HashMap::with_capacity(web_graph.nodes.len());

    for node in &web_graph.nodes {
        graph.insert_node(node.label.clone())?;
        labels.insert(node.id, &node.label);
    }

    for edge in &web_graph.links {
        let source = labels.get(&edge.source).ok_or(Error::InvalidNode(edge.source))?;
        let target = labels.get(&edge.target).ok_or(Error::InvalidNode(edge.target))?;
        graph.insert_edge(*source, *target, OrderedFloat(edge.weight))?;
    }

    Ok(graph)
}

/// Flags the links joining consecutive path labels and clears every other flag
fn mark_path(web_graph: &mut WebGraph, path: &[String]) {
    let ids: HashMap<&str, usize> = web_graph
        .nodes
        .iter()
        .map(|node| (node.label.as_str(), node.id))
        .collect();

    let hops: Vec<(usize, usize)> = path
        .windows(2)
        .filter_map(|pair| Some((*ids.get(pair[0].as_str())?, *ids.get(pair[1].as_str())?)))
        .collect();

    for link in &mut web_graph.links {
        link.is_path = hops.contains(&(link.source, link.target));
    }
}
