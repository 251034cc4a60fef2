//! Segment closures.
//!
//! A closure marks the segment between two stops as temporarily unusable
//! in either direction. Closures live outside the route graph and are
//! consulted per edge expansion during search, so the closure list can
//! change between queries without rebuilding the graph.

use std::collections::HashSet;

use crate::domain::StopName;

/// A set of closed segments.
///
/// Closures are direction-agnostic: closing `{a, b}` blocks both a→b
/// and b→a. Lookups are case-insensitive, like all stop-name matching.
#[derive(Debug, Clone, Default)]
pub struct ClosureSet {
    /// Folded stop-name pairs, stored with the lexically smaller name first.
    closed: HashSet<(String, String)>,
    /// The pairs as supplied, for listing back to callers.
    display: Vec<(StopName, StopName)>,
}

impl ClosureSet {
    /// Create an empty closure set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the segment between two stops, in both directions.
    ///
    /// Adding the same pair twice (in either orientation) is a no-op.
    pub fn add(&mut self, a: StopName, b: StopName) {
        if self.closed.insert(Self::key(&a, &b)) {
            self.display.push((a, b));
        }
    }

    /// Returns true if the segment between `from` and `to` is closed,
    /// in either orientation.
    pub fn is_closed(&self, from: &StopName, to: &StopName) -> bool {
        self.closed.contains(&Self::key(from, to))
    }

    /// Iterate over the closed pairs as supplied.
    pub fn iter(&self) -> impl Iterator<Item = &(StopName, StopName)> {
        self.display.iter()
    }

    /// Returns the number of closed segments.
    pub fn len(&self) -> usize {
        self.closed.len()
    }

    /// Returns true if no segments are closed.
    pub fn is_empty(&self) -> bool {
        self.closed.is_empty()
    }

    /// Canonical unordered key for a stop pair.
    fn key(a: &StopName, b: &StopName) -> (String, String) {
        let (a, b) = (a.folded(), b.folded());
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }
}
