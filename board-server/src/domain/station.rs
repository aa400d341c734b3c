//! Station identifier types.

use std::fmt;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A validated MVG station identifier.
///
/// MVG identifies stations by DHID-style global ids such as `de:09162:632`
/// (country prefix, district, station number, colon-separated). The exact
/// scheme is owned by the upstream, so this type only enforces the
/// structural minimum every id shares: non-empty, no whitespace. An id that
/// passes validation but names no real station simply yields an empty
/// departure board.
///
/// # Examples
///
/// ```
/// use board_server::domain::StationId;
///
/// let hbf = StationId::parse("de:09162:6").unwrap();
/// assert_eq!(hbf.as_str(), "de:09162:6");
///
/// // Empty and whitespace-containing ids are rejected
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("de:09162 6").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be non-empty and contain no whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidStationId {
                reason: "must not contain whitespace",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating plausible station ids: colon-separated
    /// alphanumeric segments
    fn valid_id_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[a-z]{2}:[0-9]{5}:[0-9]{1,4}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_id_string()) {
            let id = StationId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        /// Any non-empty whitespace-free string parses
        #[test]
        fn whitespace_free_always_parses(s in "[!-~]{1,40}") {
            prop_assert!(StationId::parse(&s).is_ok());
        }

        /// Strings containing whitespace are always rejected
        #[test]
        fn whitespace_rejected(
            prefix in "[!-~]{0,10}",
            ws in proptest::sample::select(vec![' ', '\t', '\n']),
            suffix in "[!-~]{0,10}",
        ) {
            let s = format!("{prefix}{ws}{suffix}");
            prop_assert!(StationId::parse(&s).is_err());
        }
    }
}
