//! Path result types.
//!
//! A `PathResult` is the output of one route search: the visited stops,
//! the service-tagged edges traversed between them, and the accumulated
//! transfer count and cost.

use std::sync::Arc;

use super::{DirectedService, StopName};

/// One directed, service-tagged hop between two consecutive stops.
///
/// Edges are derived from the stop sequences of directed service
/// variants; two services sharing a segment produce two distinct edges.
#[derive(Debug, Clone)]
pub struct Edge {
    /// The stop this edge leaves from.
    pub from: StopName,
    /// The stop this edge arrives at.
    pub to: StopName,
    /// The directed service variant this edge belongs to.
    pub service: Arc<DirectedService>,
}

/// A consecutive run of same-service edges within a path.
///
/// Legs are the display grouping of a path: board once, ride the
/// service through `stops`, alight at the end.
#[derive(Debug, Clone)]
pub struct PathLeg {
    /// The service ridden for this leg.
    pub service: Arc<DirectedService>,
    /// The stops visited on this leg, boarding stop first, length >= 2.
    pub stops: Vec<StopName>,
}

/// The result of a successful route search.
///
/// Created fresh per query and not retained by the engine.
///
/// # Invariants
///
/// - `stops` has exactly one more entry than `edges`
/// - each edge connects consecutive stops (`edges[i].from == stops[i]`,
///   `edges[i].to == stops[i + 1]`)
/// - `transfers` is the number of service changes along `edges`
///
/// These hold by construction: the search engine is the only producer.
#[derive(Debug, Clone)]
pub struct PathResult {
    stops: Vec<StopName>,
    edges: Vec<Edge>,
    transfers: usize,
    cost: u64,
}

impl PathResult {
    /// Assemble a path from search output.
    ///
    /// Connectivity of `stops` and `edges` is the caller's responsibility;
    /// it is checked in debug builds only.
    pub(crate) fn new(stops: Vec<StopName>, edges: Vec<Edge>, transfers: usize, cost: u64) -> Self {
        debug_assert_eq!(stops.len(), edges.len() + 1);
        debug_assert!(
            edges
                .iter()
                .enumerate()
                .all(|(i, e)| e.from == stops[i] && e.to == stops[i + 1])
        );

        PathResult {
            stops,
            edges,
            transfers,
            cost,
        }
    }

    /// The zero-cost path from a stop to itself.
    pub(crate) fn trivial(stop: StopName) -> Self {
        PathResult {
            stops: vec![stop],
            edges: Vec::new(),
            transfers: 0,
            cost: 0,
        }
    }

    /// Returns the visited stops in order, start first.
    pub fn stops(&self) -> &[StopName] {
        &self.stops
    }

    /// Returns the traversed edges in order, one per segment.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of service changes along the path.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// Returns the total accumulated cost.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Returns the starting stop.
    pub fn start(&self) -> &StopName {
        // Invariant: stops is never empty
        &self.stops[0]
    }

    /// Returns the final stop.
    pub fn end(&self) -> &StopName {
        &self.stops[self.stops.len() - 1]
    }

    /// Returns true if the path contains the given stop.
    pub fn contains(&self, stop: &StopName) -> bool {
        self.stops.contains(stop)
    }

    /// Group consecutive same-service edges into legs for display.
    ///
    /// A trivial path (start equals end) has no legs.
    pub fn legs(&self) -> Vec<PathLeg> {
        let mut legs: Vec<PathLeg> = Vec::new();

        for edge in &self.edges {
            match legs.last_mut() {
                Some(leg) if leg.service.id == edge.service.id => {
                    leg.stops.push(edge.to.clone());
                }
                _ => {
                    legs.push(PathLeg {
                        service: Arc::clone(&edge.service),
                        stops: vec![edge.from.clone(), edge.to.clone()],
                    });
                }
            }
        }

        legs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, Mode, Service, ServiceId};

    fn stop(s: &str) -> StopName {
        StopName::parse(s).unwrap()
    }

    fn variant(id: &str, stop_names: &[&str]) -> Arc<DirectedService> {
        let service = Service::new(
            ServiceId::new(id.to_string()).unwrap(),
            format!("{id} line"),
            Mode::Train,
            "Test Transit".to_string(),
            stop_names.iter().map(|s| stop(s)).collect(),
        )
        .unwrap();
        Arc::new(DirectedService::from_service(&service, Direction::Outbound))
    }

    fn edge(service: &Arc<DirectedService>, from: &str, to: &str) -> Edge {
        Edge {
            from: stop(from),
            to: stop(to),
            service: Arc::clone(service),
        }
    }

    #[test]
    fn trivial_path() {
        let path = PathResult::trivial(stop("A"));

        assert_eq!(path.stops(), &[stop("A")]);
        assert!(path.edges().is_empty());
        assert_eq!(path.transfers(), 0);
        assert_eq!(path.cost(), 0);
        assert_eq!(path.start(), &stop("A"));
        assert_eq!(path.end(), &stop("A"));
        assert!(path.legs().is_empty());
    }

    #[test]
    fn legs_group_consecutive_same_service_edges() {
        let s1 = variant("s1", &["A", "B", "C"]);
        let s2 = variant("s2", &["C", "D"]);

        let path = PathResult::new(
            vec![stop("A"), stop("B"), stop("C"), stop("D")],
            vec![edge(&s1, "A", "B"), edge(&s1, "B", "C"), edge(&s2, "C", "D")],
            1,
            3,
        );

        let legs = path.legs();
        assert_eq!(legs.len(), 2);

        assert_eq!(legs[0].service.id, s1.id);
        assert_eq!(legs[0].stops, vec![stop("A"), stop("B"), stop("C")]);

        assert_eq!(legs[1].service.id, s2.id);
        assert_eq!(legs[1].stops, vec![stop("C"), stop("D")]);
    }

    #[test]
    fn single_service_path_is_one_leg() {
        let s1 = variant("s1", &["A", "B", "C"]);

        let path = PathResult::new(
            vec![stop("A"), stop("B"), stop("C")],
            vec![edge(&s1, "A", "B"), edge(&s1, "B", "C")],
            0,
            2,
        );

        let legs = path.legs();
        assert_eq!(legs.len(), 1);
        assert_eq!(legs[0].stops, vec![stop("A"), stop("B"), stop("C")]);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let s1 = variant("s1", &["A", "B"]);
        let path = PathResult::new(
            vec![stop("Ashton"), stop("Barley")],
            vec![Edge {
                from: stop("Ashton"),
                to: stop("Barley"),
                service: s1,
            }],
            0,
            1,
        );

        assert!(path.contains(&stop("ASHTON")));
        assert!(path.contains(&stop("barley")));
        assert!(!path.contains(&stop("Carlow")));
    }
}
