//! Normalization of raw bridge records into [`Departure`]s.
//!
//! Raw records are duck-typed: the interesting fields go by several names
//! (`line`/`label`/`product`, `time`/`planned`/`realtimeDepartureTime`) and
//! their values may be strings or numbers depending on which MVG endpoint
//! version the bridge talked to. This module owns the ordered fallback
//! resolution and keeps the conversion total: any JSON input yields either a
//! departure or `None`, never a panic.

use chrono::{DateTime, Utc};

use crate::domain::Departure;

use super::types::{RawDeparture, value_integer, value_truthy};

/// How much of the raw record survived normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fidelity {
    /// The departure time came from the record itself.
    Parsed,

    /// The record carried no usable time, so it was normalized against the
    /// current wall clock and reads as "due now".
    Degraded,
}

/// A normalized departure together with its conversion fidelity.
///
/// Degraded departures are served like any other; the marker exists so that
/// callers can count them and make upstream data drift visible in the logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedDeparture {
    pub departure: Departure,
    pub fidelity: Fidelity,
}

/// Normalize one raw record against the given wall-clock time.
///
/// Returns `None` when the entry is not a JSON object at all; callers skip
/// those. Every object produces a departure: missing display fields take
/// their documented defaults, and a missing, zero or uncoercible time
/// degrades to "due now" rather than failing the whole board.
pub fn transform_departure(
    raw: &RawDeparture,
    now: DateTime<Utc>,
) -> Option<TransformedDeparture> {
    if !raw.is_record() {
        return None;
    }

    let now_secs = now.timestamp();
    let (time_secs, fidelity) = match resolve_departure_time(raw) {
        Some(secs) => (secs, Fidelity::Parsed),
        None => (now_secs, Fidelity::Degraded),
    };

    let minutes = clamp_minutes(time_secs.saturating_sub(now_secs).div_euclid(60));

    let delay_minutes = raw
        .get("planned")
        .filter(|value| value_truthy(value))
        .and_then(value_integer)
        .filter(|planned| *planned != 0 && time_secs > *planned)
        .map(|planned| round_to_minutes(time_secs.saturating_sub(planned)))
        .unwrap_or(0);

    let departure = Departure {
        line: raw
            .text_any(&["line", "label", "product"])
            .unwrap_or_else(|| "?".to_string()),
        destination: raw
            .text("destination")
            .unwrap_or_else(|| "Unknown".to_string()),
        minutes,
        departure_time: time_secs.saturating_mul(1000),
        delay_minutes,
        is_live: raw.truthy("realtime"),
        platform: raw.text("platform").unwrap_or_default(),
        transport_type: raw.text("type").unwrap_or_default(),
    };

    Some(TransformedDeparture { departure, fidelity })
}

/// Resolve the authoritative departure time in epoch seconds.
///
/// `realtimeDepartureTime` wins whenever the field is present and non-null,
/// even if its value then turns out to be uncoercible; only an absent field
/// falls through to the first truthy of `time` and `planned`. A resolved
/// value of zero counts as unusable, the upstream writes zero for "not set".
fn resolve_departure_time(raw: &RawDeparture) -> Option<i64> {
    let selected = match raw.get("realtimeDepartureTime") {
        Some(value) if !value.is_null() => Some(value),
        _ => raw
            .get("time")
            .filter(|value| value_truthy(value))
            .or_else(|| raw.get("planned").filter(|value| value_truthy(value))),
    };

    selected.and_then(value_integer).filter(|secs| *secs != 0)
}

/// Clamp a possibly-negative minute count into `u32`.
fn clamp_minutes(minutes: i64) -> u32 {
    u32::try_from(minutes.max(0)).unwrap_or(u32::MAX)
}

/// Round a positive second delta to whole minutes, half away from zero.
fn round_to_minutes(secs: i64) -> u32 {
    clamp_minutes((secs as f64 / 60.0).round() as i64)
}
