//! Search configuration for the route planner.

/// Configuration parameters for route search.
///
/// The transfer cost is orders of magnitude larger than the segment
/// cost, so the search minimises transfers first and segment count
/// second; the tie-break falls out of summing costs.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Cost of traversing one edge.
    pub segment_cost: u64,

    /// Additional cost charged each time the service changes between
    /// consecutive edges.
    pub transfer_cost: u64,

    /// Maximum number of service changes allowed, unless the query
    /// specifies its own bound.
    pub max_transfers: usize,

    /// Hard ceiling on extracted frontier entries per search.
    /// A guard against pathological inputs, not a tuning knob.
    pub max_iterations: usize,

    /// Maximum number of results to return from one query.
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            segment_cost: 1,
            transfer_cost: 50_000,
            max_transfers: 7,
            max_iterations: 500_000,
            max_results: 8,
        }
    }
}
