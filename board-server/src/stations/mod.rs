//! Station directory: id and name data for the search box.
//!
//! Backed by a static JSON file generated from the MVG station dump,
//! loaded once at startup.

mod directory;
mod error;

pub use directory::{MAX_SEARCH_RESULTS, Station, StationDirectory};
pub use error::StationError;
