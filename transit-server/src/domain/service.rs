//! Transit service types.
//!
//! A `Service` is an immutable catalog record: an ordered sequence of
//! stops operated by one carrier under one mode. Services as configured
//! are traversable in both directions; `DirectedService` is one
//! traversable direction of a service, produced by the bidirectional
//! expansion at startup.

use std::fmt;

use super::{Mode, StopName};

/// Error returned when constructing an invalid service ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service ID: {reason}")]
pub struct InvalidServiceId {
    reason: &'static str,
}

/// A unique service identifier.
///
/// Service IDs are opaque strings from the catalog. The only validation
/// is that they must be non-blank.
///
/// # Examples
///
/// ```
/// use transit_server::domain::ServiceId;
///
/// let id = ServiceId::new("northern-line".to_string()).unwrap();
/// assert_eq!(id.as_str(), "northern-line");
///
/// // Blank IDs are rejected
/// assert!(ServiceId::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ServiceId(String);

impl ServiceId {
    /// Create a new service ID from a string.
    ///
    /// Returns an error if the string is blank.
    pub fn new(s: String) -> Result<Self, InvalidServiceId> {
        if s.trim().is_empty() {
            return Err(InvalidServiceId {
                reason: "must not be blank",
            });
        }
        Ok(ServiceId(s))
    }

    /// Returns the service ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceId({})", self.0)
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when constructing an invalid service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid service: {reason}")]
pub struct InvalidService {
    reason: &'static str,
}

/// An immutable transit service from the catalog.
///
/// Created once at startup from static configuration and never mutated.
///
/// # Invariants
///
/// - `name` and `operator` are non-blank
/// - `stops` has at least two entries
#[derive(Debug, Clone)]
pub struct Service {
    /// Unique service identifier.
    pub id: ServiceId,
    /// Display name (e.g., "Riverside Line").
    pub name: String,
    /// Transport mode.
    pub mode: Mode,
    /// Operating carrier.
    pub operator: String,
    /// Ordered stop sequence, length >= 2.
    stops: Vec<StopName>,
}

impl Service {
    /// Construct a service, validating its invariants.
    pub fn new(
        id: ServiceId,
        name: String,
        mode: Mode,
        operator: String,
        stops: Vec<StopName>,
    ) -> Result<Self, InvalidService> {
        if name.trim().is_empty() {
            return Err(InvalidService {
                reason: "name must not be blank",
            });
        }
        if operator.trim().is_empty() {
            return Err(InvalidService {
                reason: "operator must not be blank",
            });
        }
        if stops.len() < 2 {
            return Err(InvalidService {
                reason: "must have at least two stops",
            });
        }

        Ok(Service {
            id,
            name,
            mode,
            operator,
            stops,
        })
    }

    /// Returns the ordered stop sequence.
    pub fn stops(&self) -> &[StopName] {
        &self.stops
    }
}

/// One traversable direction of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The stop sequence as configured.
    Outbound,
    /// The stop sequence reversed.
    Inbound,
}

impl Direction {
    /// The ID suffix distinguishing this direction's variant.
    pub fn suffix(&self) -> &'static str {
        match self {
            Direction::Outbound => "out",
            Direction::Inbound => "in",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Outbound => "outbound",
            Direction::Inbound => "inbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A directed, traversable variant of a service.
///
/// Produced by the bidirectional expansion: each catalog service yields
/// an outbound variant (stops as configured) and an inbound variant
/// (stops reversed). The variant ID is derived from the parent service
/// ID plus the direction suffix, so the two variants of a service never
/// collide; both carry the parent's name, mode and operator unchanged.
#[derive(Debug, Clone)]
pub struct DirectedService {
    /// Derived unique ID (`<parent>-out` or `<parent>-in`).
    pub id: ServiceId,
    /// ID of the parent catalog service.
    pub parent_id: ServiceId,
    /// Display name, shared with the parent.
    pub name: String,
    /// Transport mode, shared with the parent.
    pub mode: Mode,
    /// Operating carrier, shared with the parent.
    pub operator: String,
    /// Which direction of the parent this variant traverses.
    pub direction: Direction,
    /// Ordered stop sequence for this direction, length >= 2.
    stops: Vec<StopName>,
}

impl DirectedService {
    /// Derive the variant of `service` travelling in `direction`.
    pub fn from_service(service: &Service, direction: Direction) -> Self {
        let mut stops = service.stops().to_vec();
        if direction == Direction::Inbound {
            stops.reverse();
        }

        // Parent IDs are non-blank, so the derived ID is too.
        let id = ServiceId(format!("{}-{}", service.id.as_str(), direction.suffix()));

        DirectedService {
            id,
            parent_id: service.id.clone(),
            name: service.name.clone(),
            mode: service.mode,
            operator: service.operator.clone(),
            direction,
            stops,
        }
    }

    /// Returns the ordered stop sequence for this direction.
    pub fn stops(&self) -> &[StopName] {
        &self.stops
    }

    /// Returns the first stop of this variant.
    pub fn origin(&self) -> &StopName {
        // Invariant: stops has at least two entries
        &self.stops[0]
    }

    /// Returns the final stop of this variant.
    pub fn destination(&self) -> &StopName {
        &self.stops[self.stops.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(s: &str) -> StopName {
        StopName::parse(s).unwrap()
    }

    fn stops(names: &[&str]) -> Vec<StopName> {
        names.iter().map(|s| stop(s)).collect()
    }

    fn make_service(id: &str, names: &[&str]) -> Service {
        Service::new(
            ServiceId::new(id.to_string()).unwrap(),
            format!("{id} line"),
            Mode::Train,
            "Test Transit".to_string(),
            stops(names),
        )
        .unwrap()
    }

    #[test]
    fn service_id_rejects_blank() {
        assert!(ServiceId::new(String::new()).is_err());
        assert!(ServiceId::new("  ".to_string()).is_err());
        assert!(ServiceId::new("s1".to_string()).is_ok());
    }

    #[test]
    fn service_requires_two_stops() {
        let err = Service::new(
            ServiceId::new("s1".to_string()).unwrap(),
            "Line".to_string(),
            Mode::Bus,
            "Op".to_string(),
            stops(&["Only Stop"]),
        );
        assert!(err.is_err());
    }

    #[test]
    fn service_rejects_blank_name_and_operator() {
        let id = || ServiceId::new("s1".to_string()).unwrap();
        assert!(
            Service::new(
                id(),
                " ".to_string(),
                Mode::Bus,
                "Op".to_string(),
                stops(&["A", "B"])
            )
            .is_err()
        );
        assert!(
            Service::new(
                id(),
                "Line".to_string(),
                Mode::Bus,
                "".to_string(),
                stops(&["A", "B"])
            )
            .is_err()
        );
    }

    #[test]
    fn outbound_variant_keeps_stop_order() {
        let service = make_service("s1", &["A", "B", "C"]);
        let outbound = DirectedService::from_service(&service, Direction::Outbound);

        assert_eq!(outbound.id.as_str(), "s1-out");
        assert_eq!(outbound.stops(), stops(&["A", "B", "C"]).as_slice());
        assert_eq!(outbound.origin(), &stop("A"));
        assert_eq!(outbound.destination(), &stop("C"));
    }

    #[test]
    fn inbound_variant_reverses_stop_order() {
        let service = make_service("s1", &["A", "B", "C"]);
        let inbound = DirectedService::from_service(&service, Direction::Inbound);

        assert_eq!(inbound.id.as_str(), "s1-in");
        assert_eq!(inbound.stops(), stops(&["C", "B", "A"]).as_slice());
        assert_eq!(inbound.origin(), &stop("C"));
        assert_eq!(inbound.destination(), &stop("A"));
    }

    #[test]
    fn variants_share_parent_metadata() {
        let service = make_service("s1", &["A", "B"]);
        let outbound = DirectedService::from_service(&service, Direction::Outbound);
        let inbound = DirectedService::from_service(&service, Direction::Inbound);

        for variant in [&outbound, &inbound] {
            assert_eq!(variant.parent_id, service.id);
            assert_eq!(variant.name, service.name);
            assert_eq!(variant.mode, service.mode);
            assert_eq!(variant.operator, service.operator);
        }
        assert_ne!(outbound.id, inbound.id);
    }

    #[test]
    fn direction_labels() {
        assert_eq!(Direction::Outbound.suffix(), "out");
        assert_eq!(Direction::Inbound.suffix(), "in");
        assert_eq!(format!("{}", Direction::Outbound), "outbound");
        assert_eq!(format!("{}", Direction::Inbound), "inbound");
    }
}
