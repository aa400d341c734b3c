//! MVG departure bridge.
//!
//! This module fetches raw departure data for a station and normalizes it
//! into [`Departure`](crate::domain::Departure) records.
//!
//! Key characteristics of the bridge:
//! - The upstream is reached via a **subprocess**, not HTTP: a Python
//!   helper wrapping the `mvg` library is spawned per fetch and prints one
//!   JSON payload to stdout
//! - The helper exits zero even on MVG failures and reports them in-band
//!   via an `error` field, so the payload decides success
//! - Raw records have no stable schema; all interpretation lives in
//!   [`transform_departure`]

mod client;
mod convert;
mod error;
mod types;

pub use client::{BridgeClient, BridgeConfig};
pub use convert::{Fidelity, TransformedDeparture, transform_departure};
pub use error::BridgeError;
pub use types::{BridgePayload, RawDeparture};
