//! Domain types for the departure board.
//!
//! This module contains the core model types shared by the bridge, the
//! grouping logic and the web layer. Identifier types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod departure;
mod mode;
mod station;

pub use departure::Departure;
pub use mode::{ModeFilter, TransportMode};
pub use station::{InvalidStationId, StationId};
