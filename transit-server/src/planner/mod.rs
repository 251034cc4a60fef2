//! Route planner.
//!
//! This module implements the core route-search engine: a label-setting
//! shortest-path search over the route graph with a transfer-penalty
//! cost model, closure-aware edge filtering and a bound on the number
//! of service changes, plus the query layer that validates input and
//! applies the required-via filter.

mod config;
mod query;
mod search;

pub use config::SearchConfig;
pub use query::{JourneyQuery, Planner, QueryError};
pub use search::{AbortReason, CancelToken, SearchOutcome, Searcher};
