//! Manual direction rules.
//!
//! Some stations group badly under the destination heuristic, for example a
//! stop served by lines whose headsigns share no useful prefix structure.
//! For those, an operator-curated table maps the station to destination
//! keyword lists per direction; a configured station never takes the
//! heuristic path.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::StationId;

/// Errors loading a direction-rules file.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// Reading the rules file failed
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    /// The rules file was not valid JSON
    #[error("rules file parse error: {message}")]
    Json { message: String },
}

/// Destination keyword lists for one station's two directions.
///
/// Keywords are matched as case-sensitive substrings of the departure's
/// destination, so `"Westendstraße"` also catches `"Westendstraße U"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManualRule {
    #[serde(default)]
    pub direction1: Vec<String>,

    #[serde(default)]
    pub direction2: Vec<String>,
}

/// Which group a rule assigned a destination to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Direction1,
    Direction2,
}

impl ManualRule {
    /// Classify a destination by keyword match.
    ///
    /// Only an unambiguous direction2 match lands in direction2; matching
    /// both lists, neither list, or only direction1 all land in direction1.
    /// Clients lay the groups out as outward/inward and rely on this exact
    /// tie-break.
    pub fn classify(&self, destination: &str) -> Direction {
        let in1 = self.matches_any(&self.direction1, destination);
        let in2 = self.matches_any(&self.direction2, destination);
        if in2 && !in1 {
            Direction::Direction2
        } else {
            Direction::Direction1
        }
    }

    fn matches_any(&self, keywords: &[String], destination: &str) -> bool {
        keywords.iter().any(|keyword| destination.contains(keyword.as_str()))
    }
}

/// Read-only station-to-rule table, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct DirectionRules {
    rules: HashMap<StationId, ManualRule>,
}

impl DirectionRules {
    /// The built-in table shipped with the server.
    ///
    /// Currently covers one western tram stop (`de:09162:632`) where two
    /// branches interleave and the headsign prefixes defeat the heuristic.
    pub fn builtin() -> Self {
        fn keywords(words: &[&str]) -> Vec<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        let westendstrasse = ManualRule {
            direction1: keywords(&[
                "Laimer Platz",
                "Emdenstraße",
                "Neuperlach Süd",
                "Grünwald",
                "Berg am Laim",
                "Effnerplatz",
            ]),
            direction2: keywords(&["Willibaldplatz", "Westendstraße", "Westfriedhof"]),
        };

        let mut rules = HashMap::new();
        if let Ok(station) = StationId::parse("de:09162:632") {
            rules.insert(station, westendstrasse);
        }

        Self { rules }
    }

    /// Load a table from a JSON file.
    ///
    /// Expected shape: `{"<station id>": {"direction1": [...], "direction2":
    /// [...]}, ...}`. Entries with invalid station ids are skipped with a
    /// warning rather than failing startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RulesError> {
        let text = std::fs::read_to_string(path)?;
        let parsed: HashMap<String, ManualRule> =
            serde_json::from_str(&text).map_err(|e| RulesError::Json {
                message: e.to_string(),
            })?;

        let mut rules = HashMap::new();
        for (id, rule) in parsed {
            match StationId::parse(&id) {
                Ok(station) => {
                    rules.insert(station, rule);
                }
                Err(e) => {
                    tracing::warn!("skipping direction rule for invalid station id {id:?}: {e}");
                }
            }
        }

        Ok(Self { rules })
    }

    /// Build a table from explicit entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (StationId, ManualRule)>) -> Self {
        Self {
            rules: entries.into_iter().collect(),
        }
    }

    /// The rule for a station, if one is configured.
    pub fn get(&self, station: &StationId) -> Option<&ManualRule> {
        self.rules.get(station)
    }

    /// Number of configured stations.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
