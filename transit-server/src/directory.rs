//! Stop directory.
//!
//! The authoritative list of valid stop names, derived from the union of
//! all service stop sequences at catalog load time. Backs query-layer
//! validation and the stop name search endpoint.

use std::collections::HashMap;

use crate::domain::{Service, StopName};

/// Default maximum number of name-search suggestions.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Case-insensitive lookup of known stop names.
///
/// The canonical display casing of a stop is the casing it first appears
/// with in the catalog.
#[derive(Debug, Clone, Default)]
pub struct StopDirectory {
    by_folded: HashMap<String, StopName>,
}

impl StopDirectory {
    /// Build the directory from catalog services.
    ///
    /// First-seen casing wins for display.
    pub fn from_services(services: &[Service]) -> Self {
        let mut by_folded = HashMap::new();

        for service in services {
            for stop in service.stops() {
                by_folded
                    .entry(stop.folded().to_string())
                    .or_insert_with(|| stop.clone());
            }
        }

        StopDirectory { by_folded }
    }

    /// Resolve a name to its canonical stop, case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&StopName> {
        self.by_folded.get(name.trim().to_lowercase().as_str())
    }

    /// Returns true if the name is a known stop.
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Case-insensitive substring search over stop names.
    ///
    /// Results carry canonical casing and are sorted alphabetically.
    /// An empty or blank query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<StopName> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<StopName> = self
            .by_folded
            .iter()
            .filter(|(folded, _)| folded.contains(&needle))
            .map(|(_, stop)| stop.clone())
            .collect();

        matches.sort_by(|a, b| a.folded().cmp(b.folded()));
        matches.truncate(limit);
        matches
    }

    /// Iterate over all known stops, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &StopName> {
        self.by_folded.values()
    }

    /// Returns the number of known stops.
    pub fn len(&self) -> usize {
        self.by_folded.len()
    }

    /// Returns true if no stops are known.
    pub fn is_empty(&self) -> bool {
        self.by_folded.is_empty()
    }
}
