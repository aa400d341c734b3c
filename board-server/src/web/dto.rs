//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Departure;
use crate::stations::Station;

/// Request to search for stations.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Search text, at least two characters
    pub query: Option<String>,
}

/// A station in search results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station id, e.g. "de:09162:6"
    pub id: String,

    /// Display name, e.g. "München, Hauptbahnhof"
    pub name: String,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
        }
    }
}

/// Query parameters for the flat departures endpoint.
#[derive(Debug, Deserialize)]
pub struct DeparturesRequest {
    /// Comma-separated mode tokens (`tram`, `bus`, `ubahn`, `sbahn`) or
    /// `all` for no filtering
    #[serde(default = "default_modes")]
    pub modes: String,
}

/// Query parameters for the grouped departures endpoint.
#[derive(Debug, Deserialize)]
pub struct GroupedDeparturesRequest {
    /// Comma-separated mode tokens or `all`
    #[serde(default = "default_modes")]
    pub modes: String,

    /// Maximum departures per direction
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// Response for the flat departures endpoint.
#[derive(Debug, Serialize)]
pub struct DeparturesResponse {
    pub departures: Vec<Departure>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

fn default_modes() -> String {
    "all".to_string()
}

fn default_limit() -> usize {
    4
}
