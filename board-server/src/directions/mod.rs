//! Direction grouping for departure boards.
//!
//! The front end shows a station's departures as two columns, one per
//! travel direction, but the upstream data carries no direction field.
//! This module reconstructs the split from destination headsigns:
//! an operator-curated per-station rule when one exists, and a
//! frequency-plus-prefix-similarity heuristic otherwise.

mod group;
mod rules;
mod similarity;

pub use group::{DirectionGroups, group_departures};
pub use rules::{Direction, DirectionRules, ManualRule, RulesError};
pub use similarity::prefix_similarity;
