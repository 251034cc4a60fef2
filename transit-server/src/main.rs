use std::net::SocketAddr;
use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_server::catalog::{load_file, sample_catalog};
use transit_server::directory::StopDirectory;
use transit_server::graph::RouteGraph;
use transit_server::planner::SearchConfig;
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Catalog from the configured file, or the built-in sample network.
    let catalog = match std::env::var("TRANSIT_CATALOG") {
        Ok(path) => load_file(Path::new(&path)).expect("failed to load catalog"),
        Err(_) => {
            info!("TRANSIT_CATALOG not set, using the built-in sample network");
            sample_catalog()
        }
    };

    let graph = RouteGraph::build(&catalog.expand());
    let directory = StopDirectory::from_services(catalog.services());
    let closures = catalog.closures().clone();

    let state = AppState::new(graph, directory, closures, SearchConfig::default());
    let app = create_router(state);

    let addr: SocketAddr = match std::env::var("TRANSIT_ADDR") {
        Ok(raw) => raw.parse().expect("TRANSIT_ADDR must be a socket address"),
        Err(_) => SocketAddr::from(([127, 0, 0, 1], 3000)),
    };

    info!(%addr, "transit journey planner listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app).await.expect("server error");
}
