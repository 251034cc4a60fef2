//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::closures::ClosureSet;
use crate::directory::StopDirectory;
use crate::graph::RouteGraph;
use crate::planner::{Planner, SearchConfig};

/// Shared application state.
///
/// The graph and directory are read-only after startup. The closure set
/// is an `Arc` snapshot behind a lock: replacing it swaps the `Arc`, so
/// queries in flight keep reading the snapshot they started with.
#[derive(Clone)]
pub struct AppState {
    /// The journey planner (graph, directory, search configuration).
    pub planner: Arc<Planner>,

    /// The route graph, shared with the planner.
    pub graph: Arc<RouteGraph>,

    /// The stop directory, shared with the planner.
    pub directory: Arc<StopDirectory>,

    /// The active closure set.
    pub closures: Arc<RwLock<Arc<ClosureSet>>>,
}

impl AppState {
    /// Create the app state from startup-built pieces.
    pub fn new(
        graph: RouteGraph,
        directory: StopDirectory,
        closures: ClosureSet,
        config: SearchConfig,
    ) -> Self {
        let graph = Arc::new(graph);
        let directory = Arc::new(directory);

        Self {
            planner: Arc::new(Planner::new(
                Arc::clone(&graph),
                Arc::clone(&directory),
                config,
            )),
            graph,
            directory,
            closures: Arc::new(RwLock::new(Arc::new(closures))),
        }
    }

    /// Take an immutable snapshot of the active closures.
    pub async fn closures_snapshot(&self) -> Arc<ClosureSet> {
        Arc::clone(&*self.closures.read().await)
    }

    /// Replace the active closure set atomically.
    pub async fn replace_closures(&self, closures: ClosureSet) {
        *self.closures.write().await = Arc::new(closures);
    }
}
