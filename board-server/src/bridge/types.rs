//! Bridge payload types.
//!
//! The bridge prints a single JSON object to stdout:
//! `{"departures": [...]}` on success, or `{"departures": [], "error": "..."}`
//! when the MVG call failed. The departure records themselves have no
//! guaranteed schema. Field names and value types drift between MVG endpoint
//! versions, so records stay loosely typed here and all interpretation
//! happens in [`transform_departure`](super::transform_departure).

use serde::Deserialize;
use serde_json::Value;

/// The JSON object printed by the bridge script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BridgePayload {
    /// Raw departure records in board order.
    #[serde(default)]
    pub departures: Vec<RawDeparture>,

    /// In-band error report. The bridge exits zero even when the MVG call
    /// failed and reports the failure here instead, so this field decides
    /// success, not the exit status alone.
    #[serde(default)]
    pub error: Option<String>,
}

/// One raw departure record as delivered by the bridge.
///
/// Usually an object carrying some of `line`/`label`/`product`,
/// `destination`, `time`/`planned`/`realtimeDepartureTime`, `platform`,
/// `realtime` and `type`, but nothing is promised: values may be strings or
/// numbers, fields may be missing, and whole entries may not be objects at
/// all.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawDeparture(pub Value);

impl RawDeparture {
    /// Whether the entry is a JSON object at all.
    ///
    /// Non-object entries carry no usable fields and are skipped during
    /// normalization.
    pub fn is_record(&self) -> bool {
        self.0.is_object()
    }

    /// Raw access to a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Extract a field as display text.
    ///
    /// Non-empty strings pass through and non-zero numbers become their
    /// decimal form; everything else (including empty strings and zero, the
    /// upstream's "not set" markers) counts as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(value_text)
    }

    /// First present text value among `keys`, in order.
    pub fn text_any(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.text(key))
    }

    /// Truthiness of a field. Absent fields count as false.
    pub fn truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(value_truthy)
    }

    /// The label used for mode filtering: `product`, falling back to `type`.
    pub fn product_label(&self) -> Option<String> {
        self.text_any(&["product", "type"])
    }
}

/// Truthiness of a JSON value.
///
/// Matches how the upstream records mark absence: `null`, `false`, zero and
/// the empty string all mean "not set", while arrays and objects are always
/// set.
pub(crate) fn value_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a truthy scalar, `None` for everything else.
pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(_) if value_truthy(value) => Some(value.to_string()),
        _ => None,
    }
}

/// Coerce a value to whole epoch seconds.
///
/// Numbers truncate toward zero; strings must parse fully as a decimal
/// integer (ignoring surrounding whitespace). Anything else is unusable.
pub(crate) fn value_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_without_error_field() {
        let payload: BridgePayload =
            serde_json::from_str(r#"{"departures": [{"line": "19"}, {"line": "29"}]}"#).unwrap();
        assert_eq!(payload.departures.len(), 2);
        assert_eq!(payload.error, None);
    }

    #[test]
    fn payload_with_error_and_empty_departures() {
        let payload: BridgePayload =
            serde_json::from_str(r#"{"departures": [], "error": "MVG API unreachable"}"#).unwrap();
        assert!(payload.departures.is_empty());
        assert_eq!(payload.error.as_deref(), Some("MVG API unreachable"));
    }

    #[test]
    fn missing_departures_defaults_to_empty() {
        let payload: BridgePayload = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert!(payload.departures.is_empty());
    }

    #[test]
    fn departures_may_be_any_json_shape() {
        let payload: BridgePayload =
            serde_json::from_str(r#"{"departures": [{"line": "19"}, "junk", 7, null]}"#).unwrap();
        assert_eq!(payload.departures.len(), 4);
        assert!(payload.departures[0].is_record());
        assert!(!payload.departures[1].is_record());
        assert!(!payload.departures[2].is_record());
        assert!(!payload.departures[3].is_record());
    }

    #[test]
    fn text_coerces_numbers_and_skips_falsy() {
        let raw = RawDeparture(json!({
            "line": "19",
            "platform": 2,
            "empty": "",
            "zero": 0,
            "frac": 2.5,
            "flag": true,
        }));
        assert_eq!(raw.text("line").as_deref(), Some("19"));
        assert_eq!(raw.text("platform").as_deref(), Some("2"));
        assert_eq!(raw.text("frac").as_deref(), Some("2.5"));
        assert_eq!(raw.text("empty"), None);
        assert_eq!(raw.text("zero"), None);
        assert_eq!(raw.text("flag"), None);
        assert_eq!(raw.text("missing"), None);
    }

    #[test]
    fn text_any_takes_the_first_present() {
        let raw = RawDeparture(json!({"line": "", "label": "U3", "product": "u-bahn"}));
        assert_eq!(raw.text_any(&["line", "label", "product"]).as_deref(), Some("U3"));
    }

    #[test]
    fn truthy_follows_upstream_absence_markers() {
        let raw = RawDeparture(json!({
            "a": null, "b": false, "c": 0, "d": "", "e": "x", "f": 1, "g": [], "h": {},
        }));
        assert!(!raw.truthy("a"));
        assert!(!raw.truthy("b"));
        assert!(!raw.truthy("c"));
        assert!(!raw.truthy("d"));
        assert!(raw.truthy("e"));
        assert!(raw.truthy("f"));
        assert!(raw.truthy("g"));
        assert!(raw.truthy("h"));
        assert!(!raw.truthy("missing"));
    }

    #[test]
    fn product_label_falls_back_to_type() {
        let with_product = RawDeparture(json!({"product": "Tram", "type": "Bus"}));
        assert_eq!(with_product.product_label().as_deref(), Some("Tram"));

        let type_only = RawDeparture(json!({"type": "Bus"}));
        assert_eq!(type_only.product_label().as_deref(), Some("Bus"));

        let neither = RawDeparture(json!({"line": "19"}));
        assert_eq!(neither.product_label(), None);
    }

    #[test]
    fn integer_coercion() {
        assert_eq!(value_integer(&json!(1_718_000_100_i64)), Some(1_718_000_100));
        assert_eq!(value_integer(&json!(1_718_000_100.9)), Some(1_718_000_100));
        assert_eq!(value_integer(&json!("1718000100")), Some(1_718_000_100));
        assert_eq!(value_integer(&json!(" 42 ")), Some(42));
        assert_eq!(value_integer(&json!("-60")), Some(-60));
        // Partial numeric prefixes do not count
        assert_eq!(value_integer(&json!("1718 later")), None);
        assert_eq!(value_integer(&json!("soon")), None);
        assert_eq!(value_integer(&json!(null)), None);
        assert_eq!(value_integer(&json!([1])), None);
    }
}
