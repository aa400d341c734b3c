//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;

use crate::bridge::{BridgeError, Fidelity, transform_departure};
use crate::directions::{DirectionGroups, group_departures};
use crate::domain::{Departure, ModeFilter, StationId};
use crate::stations::MAX_SEARCH_RESULTS;

use super::dto::*;
use super::state::AppState;

/// Minimum station search query length, in characters.
const MIN_QUERY_CHARS: usize = 2;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(search_stations))
        .route("/api/departures/:station_id", get(departures))
        .route("/api/departures/:station_id/grouped", get(grouped_departures))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Result<Json<Vec<StationResult>>, AppError> {
    let query = req.query.as_deref().unwrap_or("");
    if query.chars().count() < MIN_QUERY_CHARS {
        return Err(AppError::BadRequest {
            message: "Please provide a search query (min 2 characters)".to_string(),
        });
    }

    let matches = state.stations.search(query, MAX_SEARCH_RESULTS);
    Ok(Json(
        matches.into_iter().map(StationResult::from_station).collect(),
    ))
}

/// Upcoming departures for one station, unsorted and ungrouped.
async fn departures(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
    Query(req): Query<DeparturesRequest>,
) -> Result<Json<DeparturesResponse>, AppError> {
    let station = parse_station(&station_id)?;
    let filter = ModeFilter::parse(&req.modes);

    let departures = fetch_and_transform(&state, &station, &filter).await?;

    Ok(Json(DeparturesResponse { departures }))
}

/// Upcoming departures for one station, grouped by travel direction.
async fn grouped_departures(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
    Query(req): Query<GroupedDeparturesRequest>,
) -> Result<Json<DirectionGroups>, AppError> {
    let station = parse_station(&station_id)?;
    let filter = ModeFilter::parse(&req.modes);

    let departures = fetch_and_transform(&state, &station, &filter).await?;

    let mut groups = group_departures(departures, &station, &state.rules);
    groups.truncate(req.limit);

    tracing::debug!(
        station = %station,
        direction1 = groups.direction1.len(),
        direction2 = groups.direction2.len(),
        "grouped departures"
    );

    Ok(Json(groups))
}

/// Fetch raw departures through the cache, apply the mode filter and
/// normalize into the wire shape.
///
/// Normalization runs per request even on cache hits because minute
/// countdowns depend on the current wall clock.
async fn fetch_and_transform(
    state: &AppState,
    station: &StationId,
    filter: &ModeFilter,
) -> Result<Vec<Departure>, AppError> {
    let raw = state.bridge.departures(station).await?;

    let now = Utc::now();
    let mut degraded = 0usize;
    let mut departures = Vec::new();

    for record in raw
        .iter()
        .filter(|record| filter.matches(record.product_label().as_deref()))
    {
        let Some(transformed) = transform_departure(record, now) else {
            continue;
        };
        if transformed.fidelity == Fidelity::Degraded {
            degraded += 1;
        }
        departures.push(transformed.departure);
    }

    if degraded > 0 {
        tracing::warn!(
            station = %station,
            degraded,
            "departures normalized without a usable time"
        );
    }

    Ok(departures)
}

fn parse_station(raw: &str) -> Result<StationId, AppError> {
    StationId::parse(raw).map_err(|e| AppError::BadRequest {
        message: format!("Invalid station id {raw:?}: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<BridgeError> for AppError {
    fn from(e: BridgeError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors for debugging
        tracing::error!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
