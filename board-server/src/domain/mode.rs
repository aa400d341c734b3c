//! Transport mode filtering.

/// One of the four MVG surface modes the board can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Tram,
    Bus,
    UBahn,
    SBahn,
}

impl TransportMode {
    /// Parse a filter token from the `modes` query parameter.
    ///
    /// Tokens are the flat forms used in URLs (`ubahn`, not `u-bahn`).
    /// Unknown tokens yield `None` and are ignored by the caller.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "tram" => Some(TransportMode::Tram),
            "bus" => Some(TransportMode::Bus),
            "ubahn" => Some(TransportMode::UBahn),
            "sbahn" => Some(TransportMode::SBahn),
            _ => None,
        }
    }

    /// Whether an already-lowercased product label names this mode.
    ///
    /// Product labels are the hyphenated forms the upstream uses
    /// (`"u-bahn"`, `"s-bahn"`).
    fn matches_label(self, label: &str) -> bool {
        match self {
            TransportMode::Tram => label == "tram",
            TransportMode::Bus => label == "bus",
            TransportMode::UBahn => label == "u-bahn",
            TransportMode::SBahn => label == "s-bahn",
        }
    }
}

/// Mode filter parsed from the `modes` query parameter.
///
/// `modes=all` (in any case) disables filtering. Anything else is read as a
/// comma-separated token list; tokens that name no known mode are dropped,
/// so a filter made up entirely of unknown tokens keeps nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeFilter {
    /// No filtering, every record passes.
    All,

    /// Keep only records whose product label names one of these modes.
    Only(Vec<TransportMode>),
}

impl ModeFilter {
    /// Parse the `modes` query parameter value.
    pub fn parse(modes: &str) -> Self {
        if modes.trim().eq_ignore_ascii_case("all") {
            return ModeFilter::All;
        }

        let modes = modes
            .split(',')
            .filter_map(|token| TransportMode::from_token(token.trim()))
            .collect();
        ModeFilter::Only(modes)
    }

    /// Test a record's product label against the filter.
    ///
    /// Records without any label are dropped by an active filter, there is
    /// no way to tell which mode they belong to.
    pub fn matches(&self, label: Option<&str>) -> bool {
        match self {
            ModeFilter::All => true,
            ModeFilter::Only(modes) => match label {
                Some(label) => {
                    let label = label.to_lowercase();
                    modes.iter().any(|mode| mode.matches_label(&label))
                }
                None => false,
            },
        }
    }
}
