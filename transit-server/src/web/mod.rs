//! Web layer for the journey planner.
//!
//! Provides the JSON API: journey planning, stop name search,
//! departures boards and closure management.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
