//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::departures::Departure;
use crate::domain::{PathLeg, PathResult};

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct JourneyRequest {
    /// Starting stop name.
    pub from: String,

    /// Destination stop name.
    pub to: String,

    /// Optional stop the journey must pass through.
    pub via: Option<String>,

    /// Optional cap on service changes.
    pub max_transfers: Option<usize>,
}

/// A planned journey.
#[derive(Debug, Serialize)]
pub struct JourneyResponse {
    /// Visited stops in order, canonical casing.
    pub stops: Vec<String>,

    /// The journey grouped into per-service legs.
    pub legs: Vec<LegResult>,

    /// Number of service changes.
    pub transfers: usize,

    /// Total accumulated cost.
    pub cost: u64,
}

impl JourneyResponse {
    /// Build the response from a path result.
    pub fn from_path(path: &PathResult) -> Self {
        Self {
            stops: path.stops().iter().map(|s| s.as_str().to_string()).collect(),
            legs: path.legs().iter().map(LegResult::from_leg).collect(),
            transfers: path.transfers(),
            cost: path.cost(),
        }
    }
}

/// One per-service leg of a journey.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Directed variant ID.
    pub service_id: String,

    /// Service display name.
    pub service_name: String,

    /// Transport mode label.
    pub mode: String,

    /// Operating carrier.
    pub operator: String,

    /// Direction of travel (outbound/inbound).
    pub direction: String,

    /// Stops ridden on this leg, boarding stop first.
    pub stops: Vec<String>,
}

impl LegResult {
    /// Build the leg DTO from a path leg.
    pub fn from_leg(leg: &PathLeg) -> Self {
        Self {
            service_id: leg.service.id.as_str().to_string(),
            service_name: leg.service.name.clone(),
            mode: leg.service.mode.label().to_string(),
            operator: leg.service.operator.clone(),
            direction: leg.service.direction.label().to_string(),
            stops: leg.stops.iter().map(|s| s.as_str().to_string()).collect(),
        }
    }
}

/// Request to search stop names.
#[derive(Debug, Deserialize)]
pub struct StopSearchRequest {
    /// Substring to match, case-insensitively.
    pub q: String,

    /// Maximum number of suggestions.
    pub limit: Option<usize>,
}

/// Stop name search results.
#[derive(Debug, Serialize)]
pub struct StopSearchResponse {
    /// Matching stop names, canonical casing, sorted.
    pub stops: Vec<String>,
}

/// Request for a departures board.
#[derive(Debug, Deserialize)]
pub struct DeparturesRequest {
    /// The stop to list departures for.
    pub stop: String,
}

/// A departures board.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    /// The stop, canonical casing.
    pub stop: String,

    /// Departing services, sorted by name.
    pub departures: Vec<DepartureResult>,
}

/// One departures-board entry.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    /// Directed variant ID.
    pub service_id: String,

    /// Service display name.
    pub service_name: String,

    /// Transport mode label.
    pub mode: String,

    /// Operating carrier.
    pub operator: String,

    /// Direction of travel.
    pub direction: String,

    /// The next stop the service calls at.
    pub next_stop: String,

    /// The service's final destination.
    pub destination: String,
}

impl DepartureResult {
    /// Build the DTO from a departures-board entry.
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            service_id: departure.service.id.as_str().to_string(),
            service_name: departure.service.name.clone(),
            mode: departure.service.mode.label().to_string(),
            operator: departure.service.operator.clone(),
            direction: departure.service.direction.label().to_string(),
            next_stop: departure.next_stop.as_str().to_string(),
            destination: departure.destination.as_str().to_string(),
        }
    }
}

/// One closed segment on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosureEntry {
    /// One end of the closed segment.
    pub from: String,

    /// The other end.
    pub to: String,
}

/// The active closure list.
#[derive(Debug, Serialize)]
pub struct ClosuresResponse {
    pub closures: Vec<ClosureEntry>,
}

/// Request to replace the closure list.
#[derive(Debug, Deserialize)]
pub struct ReplaceClosuresRequest {
    pub closures: Vec<ClosureEntry>,
}

/// Error payload.
///
/// `kind` is a machine-readable marker; in particular it lets callers
/// tell "no path exists" from "the search gave up".
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}
