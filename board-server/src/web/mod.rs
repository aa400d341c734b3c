//! Web layer for the departure board.
//!
//! Provides the JSON endpoints polled by the browser front end.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
