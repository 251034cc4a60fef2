//! Departures board.
//!
//! Lists the directed service variants leaving a given stop: every
//! outgoing edge of the stop whose segment is not closed is one
//! departure. The caller resolves the stop name first; an unknown stop
//! is its problem, a valid stop with nothing departing is just an empty
//! board.

use std::sync::Arc;

use crate::closures::ClosureSet;
use crate::domain::{DirectedService, StopName};
use crate::graph::RouteGraph;

/// One entry on a departures board.
#[derive(Debug, Clone)]
pub struct Departure {
    /// The departing service variant.
    pub service: Arc<DirectedService>,
    /// The next stop the variant calls at.
    pub next_stop: StopName,
    /// The variant's final destination.
    pub destination: StopName,
}

/// List the services departing `stop`, closure-filtered.
///
/// Entries are sorted by service display name, then variant ID for a
/// stable order between same-named variants.
pub fn departures_from(
    graph: &RouteGraph,
    stop: &StopName,
    closures: &ClosureSet,
) -> Vec<Departure> {
    let mut departures: Vec<Departure> = graph
        .edges_from(stop)
        .iter()
        .filter(|edge| !closures.is_closed(&edge.from, &edge.to))
        .map(|edge| Departure {
            service: Arc::clone(&edge.service),
            next_stop: edge.to.clone(),
            destination: edge.service.destination().clone(),
        })
        .collect();

    departures.sort_by(|a, b| {
        a.service
            .name
            .cmp(&b.service.name)
            .then_with(|| a.service.id.as_str().cmp(b.service.id.as_str()))
    });

    departures
}
