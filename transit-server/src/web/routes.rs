//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::warn;

use crate::closures::ClosureSet;
use crate::departures::departures_from;
use crate::directory::DEFAULT_SEARCH_LIMIT;
use crate::domain::StopName;
use crate::planner::{AbortReason, CancelToken, JourneyQuery, QueryError, SearchOutcome};

use super::dto::*;
use super::state::AppState;

/// Largest accepted stop-search limit.
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/journey", get(plan_journey))
        .route("/api/stops", get(search_stops))
        .route("/api/departures", get(departures_board))
        .route("/api/closures", get(list_closures).put(replace_closures))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan a journey between two stops.
async fn plan_journey(
    State(state): State<AppState>,
    Query(req): Query<JourneyRequest>,
) -> Result<Json<JourneyResponse>, AppError> {
    if req.from.trim().is_empty() || req.to.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "from and to must both be supplied".to_string(),
        });
    }

    let query = JourneyQuery {
        from: req.from,
        to: req.to,
        via: req.via,
        max_transfers: req.max_transfers,
    };

    // Snapshot the closures for the whole query; a concurrent PUT
    // cannot affect a search already in flight.
    let closures = state.closures_snapshot().await;

    let outcome = state
        .planner
        .plan(&query, &closures, &CancelToken::new())
        .map_err(AppError::from)?;

    match outcome {
        SearchOutcome::Found(path) => Ok(Json(JourneyResponse::from_path(&path))),
        SearchOutcome::NoPath => Err(AppError::NoPath),
        SearchOutcome::Aborted(reason) => Err(AppError::Aborted(reason)),
    }
}

/// Search stop names for autocomplete.
async fn search_stops(
    State(state): State<AppState>,
    Query(req): Query<StopSearchRequest>,
) -> Json<StopSearchResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);

    let stops = state
        .directory
        .search(&req.q, limit)
        .into_iter()
        .map(|s| s.as_str().to_string())
        .collect();

    Json(StopSearchResponse { stops })
}

/// Departures board for one stop.
async fn departures_board(
    State(state): State<AppState>,
    Query(req): Query<DeparturesRequest>,
) -> Result<Json<DeparturesResponse>, AppError> {
    let stop = state
        .directory
        .resolve(&req.stop)
        .cloned()
        .ok_or_else(|| AppError::UnknownStop {
            name: req.stop.trim().to_string(),
        })?;

    let closures = state.closures_snapshot().await;
    let departures = departures_from(&state.graph, &stop, &closures)
        .iter()
        .map(DepartureResult::from_departure)
        .collect();

    Ok(Json(DeparturesResponse {
        stop: stop.as_str().to_string(),
        departures,
    }))
}

/// The active closure list.
async fn list_closures(State(state): State<AppState>) -> Json<ClosuresResponse> {
    let closures = state.closures_snapshot().await;

    let entries = closures
        .iter()
        .map(|(from, to)| ClosureEntry {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        })
        .collect();

    Json(ClosuresResponse { closures: entries })
}

/// Replace the closure list atomically.
///
/// Every referenced stop must be known; otherwise the whole request is
/// rejected and the previous list stays in effect.
async fn replace_closures(
    State(state): State<AppState>,
    Json(req): Json<ReplaceClosuresRequest>,
) -> Result<Json<ClosuresResponse>, AppError> {
    let mut closures = ClosureSet::new();

    for entry in &req.closures {
        let from = resolve_closure_stop(&state, &entry.from)?;
        let to = resolve_closure_stop(&state, &entry.to)?;
        closures.add(from, to);
    }

    let entries = closures
        .iter()
        .map(|(from, to)| ClosureEntry {
            from: from.as_str().to_string(),
            to: to.as_str().to_string(),
        })
        .collect();

    state.replace_closures(closures).await;

    Ok(Json(ClosuresResponse { closures: entries }))
}

/// Resolve a closure endpoint, rejecting unknown stops as bad requests.
fn resolve_closure_stop(state: &AppState, name: &str) -> Result<StopName, AppError> {
    state
        .directory
        .resolve(name)
        .cloned()
        .ok_or_else(|| AppError::BadRequest {
            message: format!("closure references unknown stop: {}", name.trim()),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or invalid input.
    BadRequest { message: String },
    /// A supplied stop name is not in the directory.
    UnknownStop { name: String },
    /// The search proved no path exists within the bound.
    NoPath,
    /// The search gave up before resolving.
    Aborted(AbortReason),
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::InvalidStop(name) => AppError::UnknownStop { name },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            AppError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "bad_request", message.clone())
            }
            AppError::UnknownStop { name } => (
                StatusCode::NOT_FOUND,
                "unknown_stop",
                format!("unknown stop: {name}"),
            ),
            AppError::NoPath => (
                StatusCode::NOT_FOUND,
                "no_path",
                "no path satisfies the transfer bound".to_string(),
            ),
            AppError::Aborted(reason) => (
                StatusCode::NOT_FOUND,
                "aborted",
                format!("search aborted: {}", reason.label()),
            ),
        };

        warn!(%status, kind, %message, "request failed");

        let body = Json(ErrorResponse {
            error: message,
            kind: kind.to_string(),
        });
        (status, body).into_response()
    }
}
