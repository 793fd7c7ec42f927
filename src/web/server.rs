use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::web::api::{create_router, AppState, DEFAULT_MAX_SESSIONS};

/// Environment variable consulted for the listening port
pub const PORT_ENV_VAR: &str = "DIJKSTRA_GRAPH_PORT";

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory of static files served for unmatched routes
    pub static_dir: Option<String>,
    pub enable_cors: bool,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: None,
            enable_cors: true,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl ServerConfig {
    /// Picks the port from `arg` if it parses, then from `DIJKSTRA_GRAPH_PORT`,
    /// and otherwise keeps the default.
    pub fn from_args_and_env(arg: Option<&str>) -> Self {
        let env_port = std::env::var(PORT_ENV_VAR).ok();
        Self::resolve(arg, env_port.as_deref())
    }

    fn resolve(arg: Option<&str>, env_port: Option<&str>) -> Self {
        let defaults = Self::default();
        let port = arg
            .and_then(|value| value.parse().ok())
            .or_else(|| env_port.and_then(|value| value.parse().ok()))
            .unwrap_or(defaults.port);

        Self { port, ..defaults }
    }
}

/// Build the application router for a configuration
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::with_max_sessions(config.max_sessions);

    let mut app = create_router();
    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    let mut app = app.with_state(app_state);
    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    app
}

/// Start the web server with the given configuration
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("listening on http://{}", addr);
    if let Some(dir) = &config.static_dir {
        info!("serving static files from {}", dir);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
