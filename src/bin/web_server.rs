use dijkstra_graph::web::server::{start_server, ServerConfig};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Port comes from the first argument, then DIJKSTRA_GRAPH_PORT
    let arg = env::args().nth(1);
    let config = ServerConfig::from_args_and_env(arg.as_deref());

    info!("starting shortest path server");
    info!("  port: {}", config.port);
    info!("  static files: {}", config.static_dir.as_deref().unwrap_or("(none)"));
    info!("  cors enabled: {}", config.enable_cors);
    info!("  max sessions: {}", config.max_sessions);

    start_server(config).await?;

    Ok(())
}
