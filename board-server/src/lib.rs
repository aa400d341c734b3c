//! Munich departure board server.
//!
//! A web application that answers: "when do the next trams, buses and
//! trains leave my stop, in each direction?"

pub mod bridge;
pub mod cache;
pub mod directions;
pub mod domain;
pub mod stations;
pub mod web;
