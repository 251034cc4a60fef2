//! Catalog file records.
//!
//! The serde model of the catalog JSON document, kept separate from the
//! domain types: records are whatever the file says, domain types are
//! validated. `load_file` is the bridge between the two.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::{Catalog, CatalogError};

/// The root of the catalog document.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecords {
    /// Service definitions.
    pub services: Vec<ServiceRecord>,

    /// Segment closures active at startup.
    #[serde(default)]
    pub closures: Vec<ClosureRecord>,
}

/// One service as written in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceRecord {
    /// Unique service identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Transport mode label (open set; unknown labels are tolerated).
    pub mode: String,

    /// Operating carrier.
    pub operator: String,

    /// Ordered stop names, at least two.
    pub stops: Vec<String>,
}

/// One closed segment as written in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct ClosureRecord {
    /// One end of the closed segment.
    pub from: String,

    /// The other end.
    pub to: String,
}

/// Load and validate a catalog from a JSON file.
pub fn load_file(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let records: CatalogRecords = serde_json::from_str(&raw)?;
    let catalog = Catalog::from_records(records)?;

    info!(
        path = %path.display(),
        services = catalog.services().len(),
        closures = catalog.closures().len(),
        "catalog loaded"
    );

    Ok(catalog)
}
