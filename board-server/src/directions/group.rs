//! Partitioning departures into the two travel directions.

use serde::Serialize;

use crate::domain::{Departure, StationId};

use super::rules::{Direction, DirectionRules, ManualRule};
use super::similarity::prefix_similarity;

/// Departures split into a station's two travel directions.
///
/// This is the wire shape of the grouped endpoint. Both lists preserve the
/// relative order the departures arrived in, and every input departure
/// lands in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectionGroups {
    pub direction1: Vec<Departure>,
    pub direction2: Vec<Departure>,
}

impl DirectionGroups {
    /// Total departures across both directions.
    pub fn len(&self) -> usize {
        self.direction1.len() + self.direction2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.direction1.is_empty() && self.direction2.is_empty()
    }

    /// Cap each direction at `limit` entries.
    pub fn truncate(&mut self, limit: usize) {
        self.direction1.truncate(limit);
        self.direction2.truncate(limit);
    }
}

/// Partition departures into two directional groups.
///
/// A manual rule for the station takes precedence; without one, the
/// destination-frequency heuristic picks two representative headsigns and
/// assigns every departure to the more similar one. Either way the
/// partition is stable and total: no departure is dropped, reordered
/// relative to its group, or duplicated. When in doubt the tie-break is
/// always direction1.
pub fn group_departures(
    departures: Vec<Departure>,
    station: &StationId,
    rules: &DirectionRules,
) -> DirectionGroups {
    if departures.is_empty() {
        return DirectionGroups::default();
    }

    match rules.get(station) {
        Some(rule) => group_by_rule(departures, rule),
        None => group_by_headsign(departures),
    }
}

fn group_by_rule(departures: Vec<Departure>, rule: &ManualRule) -> DirectionGroups {
    let mut groups = DirectionGroups::default();
    for departure in departures {
        match rule.classify(&departure.destination) {
            Direction::Direction1 => groups.direction1.push(departure),
            Direction::Direction2 => groups.direction2.push(departure),
        }
    }
    groups
}

/// Frequency-and-similarity fallback for stations without a manual rule.
///
/// The two most frequent headsigns stand in for the two directions; on
/// frequency ties the earlier-seen headsign ranks first (the sort is stable
/// over a first-seen tally). With fewer than two distinct headsigns there
/// is nothing to split and everything stays in direction1.
fn group_by_headsign(departures: Vec<Departure>) -> DirectionGroups {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for departure in &departures {
        match tally
            .iter_mut()
            .find(|(name, _)| *name == departure.destination)
        {
            Some(entry) => entry.1 += 1,
            None => tally.push((&departure.destination, 1)),
        }
    }
    tally.sort_by(|a, b| b.1.cmp(&a.1));

    if tally.len() < 2 {
        return DirectionGroups {
            direction1: departures,
            direction2: Vec::new(),
        };
    }

    let representative1 = tally[0].0.to_string();
    let representative2 = tally[1].0.to_string();

    let mut groups = DirectionGroups::default();
    for departure in departures {
        let sim1 = prefix_similarity(&departure.destination, &representative1);
        let sim2 = prefix_similarity(&departure.destination, &representative2);
        if sim1 >= sim2 {
            groups.direction1.push(departure);
        } else {
            groups.direction2.push(departure);
        }
    }
    groups
}
