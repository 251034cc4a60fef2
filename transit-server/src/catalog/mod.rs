//! Service catalog.
//!
//! Static definitions of the transport services the planner knows about,
//! loaded once at startup from a JSON file (or the built-in sample
//! network) and validated into domain types. Also home to the
//! bidirectional expansion that derives the traversable service set.

mod records;
mod sample;

pub use records::{CatalogRecords, ClosureRecord, ServiceRecord, load_file};
pub use sample::sample_catalog;

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;

use crate::closures::ClosureSet;
use crate::domain::{
    Direction, DirectedService, InvalidService, InvalidServiceId, InvalidStopName, Mode, Service,
    ServiceId, StopName,
};

/// Error from loading or validating the catalog.
///
/// Any of these is fatal to the build that hit it; the previous catalog
/// (if any) stays in effect.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Could not read the catalog file.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON for the expected shape.
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A service carries an unusable ID.
    #[error("service id {id:?}: {source}")]
    ServiceId {
        id: String,
        #[source]
        source: InvalidServiceId,
    },

    /// Two services share an ID.
    #[error("duplicate service id {0:?}")]
    DuplicateServiceId(String),

    /// A service's stop list contains an unusable name.
    #[error("service {id:?} has an invalid stop name: {source}")]
    ServiceStop {
        id: String,
        #[source]
        source: InvalidStopName,
    },

    /// A service definition breaks a structural invariant.
    #[error("service {id:?}: {source}")]
    Service {
        id: String,
        #[source]
        source: InvalidService,
    },

    /// A closure names a stop with an unusable name.
    #[error("closure has an invalid stop name: {0}")]
    ClosureStop(InvalidStopName),

    /// A closure references a stop no service visits.
    #[error("closure references unknown stop {0:?}")]
    UnknownClosureStop(String),
}

/// The validated service catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    services: Vec<Service>,
    closures: ClosureSet,
}

impl Catalog {
    /// Validate raw catalog records into a catalog.
    ///
    /// Applies the configuration rules: every service needs at least two
    /// stops, non-blank id/name/operator and a globally unique ID, and
    /// closures must reference stops that appear in some service.
    /// Unknown mode labels are tolerated and fall back to the generic
    /// mode with a warning.
    pub fn from_records(records: CatalogRecords) -> Result<Self, CatalogError> {
        let mut services = Vec::with_capacity(records.services.len());
        let mut seen_ids: HashSet<String> = HashSet::new();

        for record in records.services {
            let id = ServiceId::new(record.id.clone()).map_err(|source| {
                CatalogError::ServiceId {
                    id: record.id.clone(),
                    source,
                }
            })?;

            if !seen_ids.insert(record.id.clone()) {
                return Err(CatalogError::DuplicateServiceId(record.id));
            }

            let mode = match Mode::from_label(&record.mode) {
                Some(mode) => mode,
                None => {
                    warn!(
                        service = %record.id,
                        mode = %record.mode,
                        "unknown transport mode, treating as generic"
                    );
                    Mode::Other
                }
            };

            let mut stops = Vec::with_capacity(record.stops.len());
            for raw in &record.stops {
                let stop =
                    StopName::parse(raw).map_err(|source| CatalogError::ServiceStop {
                        id: record.id.clone(),
                        source,
                    })?;
                stops.push(stop);
            }

            let service = Service::new(id, record.name, mode, record.operator, stops).map_err(
                |source| CatalogError::Service {
                    id: record.id,
                    source,
                },
            )?;
            services.push(service);
        }

        let known: HashSet<&str> = services
            .iter()
            .flat_map(|s| s.stops())
            .map(|s| s.folded())
            .collect();

        let mut closures = ClosureSet::new();
        for record in records.closures {
            let from = StopName::parse(&record.from).map_err(CatalogError::ClosureStop)?;
            let to = StopName::parse(&record.to).map_err(CatalogError::ClosureStop)?;

            for stop in [&from, &to] {
                if !known.contains(stop.folded()) {
                    return Err(CatalogError::UnknownClosureStop(stop.as_str().to_string()));
                }
            }

            closures.add(from, to);
        }

        Ok(Catalog { services, closures })
    }

    /// Returns the catalog services.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Returns the closures configured alongside the services.
    pub fn closures(&self) -> &ClosureSet {
        &self.closures
    }

    /// Expand the catalog into the full directed service set.
    pub fn expand(&self) -> Vec<Arc<DirectedService>> {
        expand_bidirectional(&self.services)
    }
}

/// Derive the traversable service set from the catalog services.
///
/// Every service yields exactly two directed variants: outbound (stops
/// as configured) and inbound (stops reversed), with distinct derived
/// IDs and the parent's metadata on both. Pure transform, no error
/// conditions.
pub fn expand_bidirectional(services: &[Service]) -> Vec<Arc<DirectedService>> {
    services
        .iter()
        .flat_map(|service| {
            [
                Arc::new(DirectedService::from_service(service, Direction::Outbound)),
                Arc::new(DirectedService::from_service(service, Direction::Inbound)),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_record(id: &str, stops: &[&str]) -> ServiceRecord {
        ServiceRecord {
            id: id.to_string(),
            name: format!("{id} line"),
            mode: "train".to_string(),
            operator: "Test Transit".to_string(),
            stops: stops.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn records(services: Vec<ServiceRecord>, closures: Vec<ClosureRecord>) -> CatalogRecords {
        CatalogRecords { services, closures }
    }

    #[test]
    fn valid_records_produce_catalog() {
        let catalog = Catalog::from_records(records(
            vec![
                service_record("s1", &["A", "B", "C"]),
                service_record("s2", &["C", "D"]),
            ],
            vec![ClosureRecord {
                from: "A".to_string(),
                to: "B".to_string(),
            }],
        ))
        .unwrap();

        assert_eq!(catalog.services().len(), 2);
        assert_eq!(catalog.closures().len(), 1);
    }

    #[test]
    fn rejects_blank_service_id() {
        let result = Catalog::from_records(records(vec![service_record(" ", &["A", "B"])], vec![]));
        assert!(matches!(result, Err(CatalogError::ServiceId { .. })));
    }

    #[test]
    fn rejects_duplicate_service_id() {
        let result = Catalog::from_records(records(
            vec![
                service_record("s1", &["A", "B"]),
                service_record("s1", &["C", "D"]),
            ],
            vec![],
        ));
        assert!(matches!(result, Err(CatalogError::DuplicateServiceId(id)) if id == "s1"));
    }

    #[test]
    fn rejects_single_stop_service() {
        let result = Catalog::from_records(records(vec![service_record("s1", &["A"])], vec![]));
        assert!(matches!(result, Err(CatalogError::Service { .. })));
    }

    #[test]
    fn rejects_blank_stop_name() {
        let result =
            Catalog::from_records(records(vec![service_record("s1", &["A", "  "])], vec![]));
        assert!(matches!(result, Err(CatalogError::ServiceStop { .. })));
    }

    #[test]
    fn rejects_closure_on_unknown_stop() {
        let result = Catalog::from_records(records(
            vec![service_record("s1", &["A", "B"])],
            vec![ClosureRecord {
                from: "A".to_string(),
                to: "Z".to_string(),
            }],
        ));
        assert!(matches!(result, Err(CatalogError::UnknownClosureStop(s)) if s == "Z"));
    }

    #[test]
    fn closure_stop_matching_is_case_insensitive() {
        let result = Catalog::from_records(records(
            vec![service_record("s1", &["Ashton", "Barley"])],
            vec![ClosureRecord {
                from: "ASHTON".to_string(),
                to: "barley".to_string(),
            }],
        ));
        assert!(result.is_ok());
    }

    #[test]
    fn unknown_mode_becomes_other() {
        let mut record = service_record("s1", &["A", "B"]);
        record.mode = "zeppelin".to_string();

        let catalog = Catalog::from_records(records(vec![record], vec![])).unwrap();
        assert_eq!(catalog.services()[0].mode, Mode::Other);
    }

    #[test]
    fn expansion_doubles_the_service_set() {
        let catalog = Catalog::from_records(records(
            vec![
                service_record("s1", &["A", "B", "C"]),
                service_record("s2", &["C", "D"]),
            ],
            vec![],
        ))
        .unwrap();

        let variants = catalog.expand();
        assert_eq!(variants.len(), 4);

        let ids: HashSet<&str> = variants.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids.len(), 4, "variant ids must be globally unique");
        assert!(ids.contains("s1-out"));
        assert!(ids.contains("s1-in"));
        assert!(ids.contains("s2-out"));
        assert!(ids.contains("s2-in"));
    }
}
