//! Label-setting route search.
//!
//! A Dijkstra-style search over the route graph. Cost accumulates one
//! segment cost per edge plus a transfer cost whenever the edge's
//! service differs from the service used for the previous edge; the
//! first edge of a path never charges a transfer. Because the penalty
//! depends on which service was last used, search states are keyed by
//! (stop, last service), not by stop alone — relaxing per stop only can
//! miss a cheaper path that re-enters a stop on a through service.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::closures::ClosureSet;
use crate::domain::{Edge, PathResult, ServiceId, StopName};
use crate::graph::RouteGraph;

use super::config::SearchConfig;

/// Cooperative cancellation for an in-flight search.
///
/// The search loop checks the token once per extracted frontier entry,
/// so cancellation takes effect promptly without the loop having to run
/// to the iteration ceiling.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of the search holding this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns true if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Why a search gave up without an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The iteration ceiling was reached.
    IterationLimit,
    /// The caller cancelled the search.
    Cancelled,
}

impl AbortReason {
    /// Machine-readable label for API responses.
    pub fn label(&self) -> &'static str {
        match self {
            AbortReason::IterationLimit => "iteration_limit",
            AbortReason::Cancelled => "cancelled",
        }
    }
}

/// The outcome of one route search.
///
/// `NoPath` and `Aborted` are ordinary results, not errors: `NoPath`
/// means the frontier was exhausted and provably no path satisfies the
/// transfer bound, `Aborted` means the search gave up before it could
/// tell.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// The single best path found.
    Found(PathResult),
    /// No path exists within the transfer bound.
    NoPath,
    /// The search stopped before resolving, for the given reason.
    Aborted(AbortReason),
}

impl SearchOutcome {
    /// Returns the path if one was found.
    pub fn path(&self) -> Option<&PathResult> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// A settled or frontier search state.
struct SearchState {
    stop: StopName,
    last_service: Option<ServiceId>,
    transfers: usize,
    stops: Vec<StopName>,
    edges: Vec<Edge>,
}

/// Key of the best-cost table: (folded stop, last service used).
type StateKey = (String, Option<ServiceId>);

/// Route searcher over one graph/closure-set pair.
///
/// Borrows its inputs; the graph is shared and read-only, the closure
/// set is the caller's immutable snapshot for this query.
pub struct Searcher<'a> {
    graph: &'a RouteGraph,
    closures: &'a ClosureSet,
    config: &'a SearchConfig,
}

impl<'a> Searcher<'a> {
    /// Create a searcher.
    pub fn new(graph: &'a RouteGraph, closures: &'a ClosureSet, config: &'a SearchConfig) -> Self {
        Self {
            graph,
            closures,
            config,
        }
    }

    /// Find the minimum-cost path from `start` to `end`, using at most
    /// `max_transfers` service changes.
    ///
    /// The first frontier entry extracted at the destination is the
    /// answer; equally-optimal alternatives are not enumerated. A start
    /// or end stop absent from the graph is not an error: the frontier
    /// simply exhausts and the outcome is [`SearchOutcome::NoPath`].
    pub fn find_best_path(
        &self,
        start: &StopName,
        end: &StopName,
        max_transfers: usize,
        cancel: &CancelToken,
    ) -> SearchOutcome {
        if start == end {
            // Answered from the seed state: no edges, no cost, even if
            // the stop has no adjacency entries at all.
            return SearchOutcome::Found(PathResult::trivial(start.clone()));
        }

        // States are stored out of line; the heap holds (cost, index)
        // entries so ordering never has to look at the state itself.
        // The tie-break on index keeps extraction order deterministic.
        let mut states: Vec<SearchState> = vec![SearchState {
            stop: start.clone(),
            last_service: None,
            transfers: 0,
            stops: vec![start.clone()],
            edges: Vec::new(),
        }];

        let mut frontier: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();
        frontier.push(Reverse((0, 0)));

        let mut best: HashMap<StateKey, u64> = HashMap::new();
        best.insert((start.folded().to_string(), None), 0);

        let mut iterations: usize = 0;

        while let Some(Reverse((cost, index))) = frontier.pop() {
            if cancel.is_cancelled() {
                debug!(iterations, "search cancelled");
                return SearchOutcome::Aborted(AbortReason::Cancelled);
            }

            iterations += 1;
            if iterations > self.config.max_iterations {
                debug!(iterations, "search hit iteration ceiling");
                return SearchOutcome::Aborted(AbortReason::IterationLimit);
            }

            let state = &states[index];

            // Stale heap entry: this (stop, service) has been reached
            // more cheaply since the entry was pushed.
            let key = (state.stop.folded().to_string(), state.last_service.clone());
            if best.get(&key).is_some_and(|&known| cost > known) {
                continue;
            }

            if &state.stop == end {
                debug!(
                    cost,
                    transfers = state.transfers,
                    segments = state.edges.len(),
                    iterations,
                    "destination reached"
                );
                return SearchOutcome::Found(PathResult::new(
                    state.stops.clone(),
                    state.edges.clone(),
                    state.transfers,
                    cost,
                ));
            }

            let mut successors: Vec<(u64, SearchState)> = Vec::new();

            for edge in self.graph.edges_from(&state.stop) {
                if self.closures.is_closed(&edge.from, &edge.to) {
                    trace!(from = %edge.from, to = %edge.to, "edge closed, skipping");
                    continue;
                }

                let is_transfer = state
                    .last_service
                    .as_ref()
                    .is_some_and(|last| last != &edge.service.id);

                let transfers = state.transfers + usize::from(is_transfer);
                if transfers > max_transfers {
                    continue;
                }

                let mut next_cost = cost + self.config.segment_cost;
                if is_transfer {
                    next_cost += self.config.transfer_cost;
                }

                let next_key = (edge.to.folded().to_string(), Some(edge.service.id.clone()));
                if best.get(&next_key).is_some_and(|&known| next_cost >= known) {
                    continue;
                }
                best.insert(next_key, next_cost);

                trace!(
                    from = %edge.from,
                    to = %edge.to,
                    service = %edge.service.id,
                    cost = next_cost,
                    transfers,
                    "relaxing edge"
                );

                let mut stops = state.stops.clone();
                stops.push(edge.to.clone());
                let mut edges = state.edges.clone();
                edges.push(edge.clone());

                successors.push((
                    next_cost,
                    SearchState {
                        stop: edge.to.clone(),
                        last_service: Some(edge.service.id.clone()),
                        transfers,
                        stops,
                        edges,
                    },
                ));
            }

            for (next_cost, next_state) in successors {
                states.push(next_state);
                frontier.push(Reverse((next_cost, states.len() - 1)));
            }
        }

        debug!(iterations, "frontier exhausted, no path");
        SearchOutcome::NoPath
    }
}
