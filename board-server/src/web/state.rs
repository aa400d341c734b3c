//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedBridgeClient;
use crate::directions::DirectionRules;
use crate::stations::StationDirectory;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached bridge client
    pub bridge: Arc<CachedBridgeClient>,

    /// Station directory for the search box
    pub stations: Arc<StationDirectory>,

    /// Manual direction rules
    pub rules: Arc<DirectionRules>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        bridge: CachedBridgeClient,
        stations: StationDirectory,
        rules: DirectionRules,
    ) -> Self {
        Self {
            bridge: Arc::new(bridge),
            stations: Arc::new(stations),
            rules: Arc::new(rules),
        }
    }
}
