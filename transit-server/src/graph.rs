//! Route graph.
//!
//! The adjacency structure the search runs over: for every consecutive
//! stop pair in every directed service variant, one directed edge tagged
//! with the owning variant. Built once at startup and read-only
//! thereafter; rebuilding is the only way to reflect catalog changes.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::domain::{DirectedService, Edge, StopName};

/// Adjacency over all edges from all directed service variants.
///
/// Keys are folded stop names, so lookups are case-insensitive. The
/// graph is an explicitly owned object passed to the search, never
/// ambient state; multiple graphs can coexist (e.g. in tests).
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: HashMap<String, Vec<Edge>>,
    edge_count: usize,
}

impl RouteGraph {
    /// Build the graph from the expanded service set.
    ///
    /// Multiplicity is preserved: two services traversing the same stop
    /// pair in the same direction contribute two distinct edges.
    pub fn build(variants: &[Arc<DirectedService>]) -> Self {
        let mut adjacency: HashMap<String, Vec<Edge>> = HashMap::new();
        let mut edge_count = 0;

        for variant in variants {
            for pair in variant.stops().windows(2) {
                let edge = Edge {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    service: Arc::clone(variant),
                };
                adjacency
                    .entry(pair[0].folded().to_string())
                    .or_default()
                    .push(edge);
                edge_count += 1;
            }
            // Terminal stops still get an adjacency entry, so that
            // contains_stop covers every stop a variant visits.
            if let Some(last) = variant.stops().last() {
                adjacency.entry(last.folded().to_string()).or_default();
            }
        }

        info!(
            stops = adjacency.len(),
            edges = edge_count,
            variants = variants.len(),
            "route graph built"
        );

        RouteGraph {
            adjacency,
            edge_count,
        }
    }

    /// Returns the outgoing edges of a stop.
    ///
    /// Unknown stops have no edges.
    pub fn edges_from(&self, stop: &StopName) -> &[Edge] {
        self.adjacency
            .get(stop.folded())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if the stop appears anywhere in the graph.
    pub fn contains_stop(&self, stop: &StopName) -> bool {
        self.adjacency.contains_key(stop.folded())
    }

    /// Returns the number of distinct stops in the graph.
    pub fn stop_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, Mode, Service, ServiceId};

    fn stop(s: &str) -> StopName {
        StopName::parse(s).unwrap()
    }

    fn make_service(id: &str, stop_names: &[&str]) -> Service {
        Service::new(
            ServiceId::new(id.to_string()).unwrap(),
            format!("{id} line"),
            Mode::Train,
            "Test Transit".to_string(),
            stop_names.iter().map(|s| stop(s)).collect(),
        )
        .unwrap()
    }

    fn expand(services: &[Service]) -> Vec<Arc<DirectedService>> {
        services
            .iter()
            .flat_map(|s| {
                [
                    Arc::new(DirectedService::from_service(s, Direction::Outbound)),
                    Arc::new(DirectedService::from_service(s, Direction::Inbound)),
                ]
            })
            .collect()
    }

    #[test]
    fn builds_edges_per_consecutive_pair() {
        let variants = expand(&[make_service("s1", &["A", "B", "C"])]);
        let graph = RouteGraph::build(&variants);

        // 2 segments per direction
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.stop_count(), 3);

        let from_a = graph.edges_from(&stop("A"));
        assert_eq!(from_a.len(), 1);
        assert_eq!(from_a[0].to, stop("B"));
        assert_eq!(from_a[0].service.id.as_str(), "s1-out");

        // B has edges in both directions
        let from_b = graph.edges_from(&stop("B"));
        assert_eq!(from_b.len(), 2);
    }

    #[test]
    fn preserves_multiplicity_of_shared_segments() {
        let variants = expand(&[
            make_service("s1", &["A", "B"]),
            make_service("s2", &["A", "B"]),
        ]);
        let graph = RouteGraph::build(&variants);

        let from_a = graph.edges_from(&stop("A"));
        assert_eq!(from_a.len(), 2);

        let ids: Vec<&str> = from_a.iter().map(|e| e.service.id.as_str()).collect();
        assert!(ids.contains(&"s1-out"));
        assert!(ids.contains(&"s2-out"));
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let variants = expand(&[make_service("s1", &["Ashton", "Barley"])]);
        let graph = RouteGraph::build(&variants);

        assert!(graph.contains_stop(&stop("ASHTON")));
        assert_eq!(graph.edges_from(&stop("ashton")).len(), 1);
    }

    #[test]
    fn unknown_stop_has_no_edges() {
        let variants = expand(&[make_service("s1", &["A", "B"])]);
        let graph = RouteGraph::build(&variants);

        assert!(!graph.contains_stop(&stop("Z")));
        assert!(graph.edges_from(&stop("Z")).is_empty());
    }

    #[test]
    fn empty_graph() {
        let graph = RouteGraph::build(&[]);
        assert_eq!(graph.stop_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
