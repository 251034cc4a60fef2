//! Built-in sample network.
//!
//! Used when no catalog file is configured, and as a fixture in tests.
//! A small fictional city: trains radiate from Kingsmere, trams and a
//! trolleybus cover the centre, buses and ferries reach the coast.

use super::{Catalog, CatalogRecords, ClosureRecord, ServiceRecord};

fn service(id: &str, name: &str, mode: &str, operator: &str, stops: &[&str]) -> ServiceRecord {
    ServiceRecord {
        id: id.to_string(),
        name: name.to_string(),
        mode: mode.to_string(),
        operator: operator.to_string(),
        stops: stops.iter().map(|s| s.to_string()).collect(),
    }
}

/// The built-in sample catalog.
pub fn sample_catalog() -> Catalog {
    let records = CatalogRecords {
        services: vec![
            service(
                "harbour-line",
                "Harbour Line",
                "train",
                "Great Western Trains",
                &["Kingsmere", "Redeswell", "Ashford Bridge", "Harbourside"],
            ),
            service(
                "valley-line",
                "Valley Line",
                "train",
                "Great Western Trains",
                &["Kingsmere", "Oakhampton", "Millbrook", "Netherfield"],
            ),
            service(
                "orbital-tram",
                "Orbital Tram",
                "tram",
                "City Trams",
                &["Harbourside", "Guild Square", "Museum Quarter", "Oldgate"],
            ),
            service(
                "hillside-tram",
                "Hillside Tram",
                "tram",
                "City Trams",
                &["Guild Square", "St Aldric's", "Upper Hill", "Windmere Park"],
            ),
            service(
                "riverside-tram",
                "Riverside Tram",
                "tram",
                "City Trams",
                &["Museum Quarter", "Riverside Walk", "Millbrook"],
            ),
            service(
                "coast-bus",
                "Coast Bus",
                "bus",
                "Shoreline Buses",
                &["Harbourside", "Saltmarsh", "Penwyn Cove", "Westcliff"],
            ),
            service(
                "market-bus",
                "Market Bus",
                "bus",
                "Shoreline Buses",
                &["Kingsmere", "Guild Square", "Market Row", "Netherfield"],
            ),
            service(
                "airport-express",
                "Airport Express",
                "bus",
                "Shoreline Buses",
                &["Kingsmere", "Moorfield Airport"],
            ),
            service(
                "north-loop-trolley",
                "North Loop Trolleybus",
                "trolleybus",
                "City Trams",
                &["Oldgate", "Tanners Yard", "St Aldric's"],
            ),
            service(
                "estuary-ferry",
                "Estuary Ferry",
                "ferry",
                "Estuary Ferries",
                &["Harbourside", "Ferrymans Reach", "Saltmarsh"],
            ),
            service(
                "island-ferry",
                "Island Ferry",
                "ferry",
                "Estuary Ferries",
                &["Penwyn Cove", "Gull Island"],
            ),
            service(
                "island-hopper",
                "Island Hopper",
                "plane",
                "Air Severn",
                &["Moorfield Airport", "Gull Island"],
            ),
        ],
        closures: Vec::<ClosureRecord>::new(),
    };

    // The sample network is static and kept valid by the tests below.
    Catalog::from_records(records).expect("built-in sample catalog is valid")
}
