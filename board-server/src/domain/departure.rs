//! Normalized departure records.

use serde::Serialize;

/// A single upcoming departure, normalized from a raw bridge record.
///
/// This struct doubles as the wire format: the browser front end reads
/// exactly these camelCase fields, so the serde names are part of the HTTP
/// contract. A departure that is due right now carries `minutes == 0`; the
/// server never substitutes a "due" sentinel, display wording is the
/// client's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    /// Line label shown on the vehicle, e.g. `"19"` or `"U3"`. `"?"` when
    /// the source provided none.
    pub line: String,

    /// Destination headsign. `"Unknown"` when the source provided none.
    pub destination: String,

    /// Whole minutes until departure, floored and clamped at zero.
    pub minutes: u32,

    /// Departure time in epoch milliseconds.
    pub departure_time: i64,

    /// Minutes of delay against the planned time. Zero when the departure
    /// is on time or no planned time is known.
    pub delay_minutes: u32,

    /// Whether the source marked this departure with realtime tracking.
    pub is_live: bool,

    /// Platform label, empty when not announced.
    pub platform: String,

    /// Transport mode label as sent by the source (e.g. `"Tram"`), empty
    /// when absent.
    #[serde(rename = "type")]
    pub transport_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Departure {
        Departure {
            line: "19".to_string(),
            destination: "Pasing".to_string(),
            minutes: 4,
            departure_time: 1_718_000_100_000,
            delay_minutes: 2,
            is_live: true,
            platform: "2".to_string(),
            transport_type: "Tram".to_string(),
        }
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["line"], "19");
        assert_eq!(json["destination"], "Pasing");
        assert_eq!(json["minutes"], 4);
        assert_eq!(json["departureTime"], 1_718_000_100_000_i64);
        assert_eq!(json["delayMinutes"], 2);
        assert_eq!(json["isLive"], true);
        assert_eq!(json["platform"], "2");
        assert_eq!(json["type"], "Tram");
    }

    #[test]
    fn no_snake_case_leaks_onto_the_wire() {
        let json = serde_json::to_value(sample()).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("departure_time"));
        assert!(!object.contains_key("delay_minutes"));
        assert!(!object.contains_key("is_live"));
        assert!(!object.contains_key("transport_type"));
        assert_eq!(object.len(), 8);
    }
}
