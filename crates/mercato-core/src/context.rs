//! Request context parsing and canonicalization.

use crate::{GeoPoint, MercatoError, MercatoResult};
use serde_json::Value;

/// Caller-supplied situational hints for a recommendation request.
///
/// A context is an arbitrary JSON object; the engine recognizes `location`
/// (geo-point or null) and `time_of_day` (string or null). The parsed object
/// is canonicalized once at construction so that semantically identical
/// contexts serialize identically: `serde_json` object maps are BTree-ordered,
/// so re-serializing the parsed value yields stable key ordering at every
/// nesting level.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    value: Value,
    canonical: String,
}

impl RequestContext {
    /// Parses and canonicalizes a raw JSON context.
    ///
    /// Anything that is not a JSON object is rejected with
    /// [`MercatoError::InvalidContext`]; the caller must refuse the request
    /// rather than cache under a malformed key.
    pub fn parse(raw: &str) -> MercatoResult<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| MercatoError::invalid_context(format!("not valid JSON: {}", e)))?;

        if !value.is_object() {
            return Err(MercatoError::invalid_context(format!(
                "expected a JSON object, got {}",
                json_type_name(&value)
            )));
        }

        let canonical = value.to_string();
        Ok(Self { value, canonical })
    }

    /// Parses an optional raw context, substituting the empty default when absent.
    pub fn parse_or_default(raw: Option<&str>) -> MercatoResult<Self> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Ok(Self::default()),
        }
    }

    /// Returns the canonical serialized form used for fingerprinting.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Returns the caller-supplied location hint, if present and well-formed.
    #[must_use]
    pub fn location(&self) -> Option<GeoPoint> {
        let loc = self.value.get("location")?;
        serde_json::from_value(loc.clone()).ok()
    }

    /// Reports whether the context carries a non-null `location` member.
    ///
    /// Presence is decided on the raw JSON, so a location the caller sent in
    /// an unexpected shape still counts as present even though [`location`]
    /// cannot produce coordinates from it.
    ///
    /// [`location`]: Self::location
    #[must_use]
    pub fn has_location(&self) -> bool {
        self.value
            .get("location")
            .map_or(false, |loc| !loc.is_null())
    }

    /// Returns the caller-supplied time-of-day hint, if present.
    #[must_use]
    pub fn time_of_day(&self) -> Option<&str> {
        self.value.get("time_of_day")?.as_str()
    }

    /// Returns an arbitrary context value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        let value = serde_json::json!({ "location": null, "time_of_day": null });
        let canonical = value.to_string();
        Self { value, canonical }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = RequestContext::parse("{not json").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONTEXT");
    }

    #[test]
    fn test_parse_rejects_non_object() {
        for raw in ["null", "42", "\"hello\"", "[1, 2]"] {
            let err = RequestContext::parse(raw).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_CONTEXT", "raw = {raw}");
        }
    }

    #[test]
    fn test_canonical_ordering_is_stable() {
        let a = RequestContext::parse(r#"{"time_of_day": "morning", "location": null}"#).unwrap();
        let b = RequestContext::parse(r#"{"location": null, "time_of_day": "morning"}"#).unwrap();
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn test_canonical_ordering_is_stable_for_nested_objects() {
        let a = RequestContext::parse(r#"{"location": {"lon": -74.0, "lat": 40.7}}"#).unwrap();
        let b = RequestContext::parse(r#"{"location": {"lat": 40.7, "lon": -74.0}}"#).unwrap();
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn test_location_accessor() {
        let ctx = RequestContext::parse(r#"{"location": {"lat": 40.7, "lon": -74.0}}"#).unwrap();
        let loc = ctx.location().unwrap();
        assert_eq!(loc.lat, 40.7);
        assert_eq!(loc.lon, -74.0);
    }

    #[test]
    fn test_null_location_is_absent() {
        let ctx = RequestContext::parse(r#"{"location": null}"#).unwrap();
        assert!(ctx.location().is_none());
        assert!(!ctx.has_location());
    }

    #[test]
    fn test_malformed_location_is_present_but_unparseable() {
        let ctx = RequestContext::parse(r#"{"location": {"lat": 1.0}}"#).unwrap();
        assert!(ctx.has_location());
        assert!(ctx.location().is_none());
    }

    #[test]
    fn test_default_context_has_no_hints() {
        let ctx = RequestContext::default();
        assert!(ctx.location().is_none());
        assert!(ctx.time_of_day().is_none());
    }

    #[test]
    fn test_parse_or_default() {
        let ctx = RequestContext::parse_or_default(None).unwrap();
        assert_eq!(ctx.canonical(), RequestContext::default().canonical());

        let ctx = RequestContext::parse_or_default(Some(r#"{"time_of_day": "evening"}"#)).unwrap();
        assert_eq!(ctx.time_of_day(), Some("evening"));
    }
}
