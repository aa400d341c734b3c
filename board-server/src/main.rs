use std::net::SocketAddr;

use board_server::bridge::{BridgeClient, BridgeConfig};
use board_server::cache::{CacheConfig, CachedBridgeClient};
use board_server::directions::DirectionRules;
use board_server::stations::StationDirectory;
use board_server::web::{AppState, create_router};

/// Port to listen on when `PORT` is not set.
const DEFAULT_PORT: u16 = 3000;

/// Stations file to load when `STATIONS_PATH` is not set.
const DEFAULT_STATIONS_PATH: &str = "data/stations.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Bridge configuration from the environment
    let mut bridge_config = BridgeConfig::default();
    if let Ok(program) = std::env::var("BRIDGE_PROGRAM") {
        bridge_config.program = program;
    }
    if let Ok(script) = std::env::var("BRIDGE_SCRIPT") {
        bridge_config.script = script.into();
    }
    if let Some(secs) = std::env::var("BRIDGE_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
    {
        bridge_config.timeout_secs = Some(secs);
    }

    let bridge = BridgeClient::new(bridge_config);
    let cached_bridge = CachedBridgeClient::new(bridge, &CacheConfig::default());

    // Load the station directory; an unreadable file degrades the search
    // box but departures still work, so start anyway
    let stations_path =
        std::env::var("STATIONS_PATH").unwrap_or_else(|_| DEFAULT_STATIONS_PATH.to_string());
    let stations = match StationDirectory::load(&stations_path) {
        Ok(stations) => {
            println!("Loaded {} stations from {stations_path}", stations.len());
            stations
        }
        Err(e) => {
            eprintln!("Warning: could not load stations from {stations_path}: {e}");
            StationDirectory::default()
        }
    };

    // Direction rules: optional file override, built-in table otherwise
    let rules = match std::env::var("DIRECTION_RULES_PATH") {
        Ok(path) => DirectionRules::load(&path)
            .unwrap_or_else(|e| panic!("failed to load direction rules from {path}: {e}")),
        Err(_) => DirectionRules::builtin(),
    };
    println!("Loaded direction rules for {} stations", rules.len());

    // Build app state
    let state = AppState::new(cached_bridge, stations, rules);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Departure board listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                             - Health check");
    println!("  GET /api/stations?query=...             - Station search");
    println!("  GET /api/departures/:station_id         - Departures for a station");
    println!("  GET /api/departures/:station_id/grouped - Departures grouped by direction");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
