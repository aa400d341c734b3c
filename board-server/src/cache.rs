//! Caching layer for bridge responses.
//!
//! Every fetch spawns a Python process, which dwarfs all other work the
//! server does, so raw responses are cached per station for a short TTL.
//! Raw records are cached rather than normalized departures: minute
//! countdowns depend on the wall clock at response time, so normalization
//! has to run per request anyway.
//!
//! Entries are only ever written after a successful fetch. A failing bridge
//! therefore never evicts the last good board; it keeps serving until the
//! TTL retires it.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::bridge::{BridgeClient, BridgeError, RawDeparture};
use crate::domain::StationId;

/// Cached raw departure list for one station.
type BoardEntry = Arc<Vec<RawDeparture>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached stations.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(60),
            max_capacity: 1000,
        }
    }
}

/// Cache of raw bridge responses, keyed by station id.
pub struct BoardCache {
    boards: MokaCache<StationId, BoardEntry>,
}

impl BoardCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let boards = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { boards }
    }

    /// Get a cached board entry.
    pub async fn get(&self, station: &StationId) -> Option<BoardEntry> {
        self.boards.get(station).await
    }

    /// Insert a board entry into the cache.
    pub async fn insert(&self, station: StationId, entry: BoardEntry) {
        self.boards.insert(station, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.boards.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.boards.invalidate_all();
    }
}

/// Bridge client with caching.
///
/// Wraps a `BridgeClient` and caches raw departure lists per station.
pub struct CachedBridgeClient {
    client: BridgeClient,
    cache: BoardCache,
}

impl CachedBridgeClient {
    /// Create a new cached client.
    pub fn new(client: BridgeClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: BoardCache::new(cache_config),
        }
    }

    /// Get the raw departures for a station, using cache if available.
    pub async fn departures(&self, station: &StationId) -> Result<BoardEntry, BridgeError> {
        // Try cache first
        if let Some(cached) = self.cache.get(station).await {
            tracing::debug!(station = %station, "cache hit");
            return Ok(cached);
        }

        // Fetch through the bridge
        let raw = self.client.fetch_departures(station).await?;

        // Cache and return
        let entry = Arc::new(raw);
        self.cache.insert(station.clone(), entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &BridgeClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
