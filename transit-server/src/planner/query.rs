//! Query layer.
//!
//! Validates stop names against the directory before the engine runs,
//! applies the optional required-via filter to the result, and hands
//! back the outcome. Validation failures are errors; a search that
//! finds nothing is not.

use std::sync::Arc;

use tracing::debug;

use crate::closures::ClosureSet;
use crate::directory::StopDirectory;
use crate::domain::StopName;
use crate::graph::RouteGraph;

use super::config::SearchConfig;
use super::search::{CancelToken, SearchOutcome, Searcher};

/// Error from query validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A supplied stop name is not in the known stop set.
    #[error("unknown stop: {0}")]
    InvalidStop(String),
}

/// A journey query as supplied by the caller.
#[derive(Debug, Clone)]
pub struct JourneyQuery {
    /// Starting stop name.
    pub from: String,

    /// Destination stop name.
    pub to: String,

    /// Optional stop the journey must pass through.
    pub via: Option<String>,

    /// Optional cap on service changes; the configured default applies
    /// when absent.
    pub max_transfers: Option<usize>,
}

/// The journey planner: graph, directory and configuration bundled
/// behind one `plan` operation.
pub struct Planner {
    graph: Arc<RouteGraph>,
    directory: Arc<StopDirectory>,
    config: SearchConfig,
}

impl Planner {
    /// Create a planner over a built graph.
    pub fn new(graph: Arc<RouteGraph>, directory: Arc<StopDirectory>, config: SearchConfig) -> Self {
        Self {
            graph,
            directory,
            config,
        }
    }

    /// Returns the planner's configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Plan a journey.
    ///
    /// All supplied stop names are validated (case-insensitively)
    /// against the directory before the engine is invoked; the resolved
    /// canonical casing is what appears in the result. `closures` is
    /// the caller's immutable snapshot for this query.
    pub fn plan(
        &self,
        query: &JourneyQuery,
        closures: &ClosureSet,
        cancel: &CancelToken,
    ) -> Result<SearchOutcome, QueryError> {
        let from = self.resolve(&query.from)?;
        let to = self.resolve(&query.to)?;
        let via = query
            .via
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(|v| self.resolve(v))
            .transpose()?;

        let max_transfers = query.max_transfers.unwrap_or(self.config.max_transfers);

        debug!(
            from = %from,
            to = %to,
            via = via.as_ref().map(|v| v.as_str()),
            max_transfers,
            "planning journey"
        );

        let searcher = Searcher::new(&self.graph, closures, &self.config);
        let outcome = searcher.find_best_path(&from, &to, max_transfers, cancel);

        // The via constraint is a filter over results, not a search
        // input. The path runs from `from` to `to`, so containment
        // already implies the right relative order; with the
        // single-best-path contract a filtered-out path leaves nothing.
        if let Some(via) = via {
            if let SearchOutcome::Found(path) = &outcome {
                if !path.contains(&via) {
                    debug!(via = %via, "best path misses via stop");
                    return Ok(SearchOutcome::NoPath);
                }
            }
        }

        Ok(outcome)
    }

    fn resolve(&self, name: &str) -> Result<StopName, QueryError> {
        self.directory
            .resolve(name)
            .cloned()
            .ok_or_else(|| QueryError::InvalidStop(name.trim().to_string()))
    }
}
