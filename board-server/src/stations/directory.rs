//! Station directory and name search.

use std::path::Path;

use serde::Deserialize;

use crate::domain::StationId;

use super::error::StationError;

/// Maximum number of search results returned to a client.
pub const MAX_SEARCH_RESULTS: usize = 25;

/// Raw station entry as stored in the stations file.
#[derive(Debug, Clone, Deserialize)]
struct StationEntry {
    id: String,
    name: String,
}

/// One station in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

/// In-memory station list backing the search box.
///
/// Loaded once at startup from a JSON array of `{id, name}` objects
/// (generated from the MVG station dump) and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: Vec<Station>,
}

impl StationDirectory {
    /// Load the directory from a stations file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let text = std::fs::read_to_string(path)?;
        let entries: Vec<StationEntry> =
            serde_json::from_str(&text).map_err(|e| StationError::Json {
                message: e.to_string(),
            })?;
        Ok(Self::from_entries(entries))
    }

    /// Build the directory, skipping entries whose id fails validation.
    fn from_entries(entries: Vec<StationEntry>) -> Self {
        let stations = entries
            .into_iter()
            .filter_map(|entry| match StationId::parse(&entry.id) {
                Ok(id) => Some(Station {
                    id,
                    name: entry.name,
                }),
                Err(e) => {
                    tracing::warn!("skipping station {:?}: {e}", entry.name);
                    None
                }
            })
            .collect();
        Self::from_stations(stations)
    }

    /// Build a directory from already-validated stations.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Case-insensitive substring search over station names.
    ///
    /// Results keep the file's order and are capped at `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Station> {
        let query = query.to_lowercase();
        self.stations
            .iter()
            .filter(|station| station.name.to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
