// Request payload decoding for the write endpoints
use crate::domain::error::TripError;
use crate::domain::trip::{LocationUpdate, TelemetryUpdate};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct TelemetryPayload {
    pub speed: Option<Value>,
    pub distance: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct LocationPayload {
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

impl TryFrom<TelemetryPayload> for TelemetryUpdate {
    type Error = TripError;

    fn try_from(payload: TelemetryPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            speed: coerce_number("speed", payload.speed)?,
            distance: coerce_number("distance", payload.distance)?,
        })
    }
}

impl TryFrom<LocationPayload> for LocationUpdate {
    type Error = TripError;

    fn try_from(payload: LocationPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            latitude: coerce_number("latitude", payload.latitude)?,
            longitude: coerce_number("longitude", payload.longitude)?,
        })
    }
}

/// Decode a JSON object body. Empty bodies and empty JSON values count as "no data".
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, TripError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(TripError::NoData);
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| TripError::MalformedBody(e.to_string()))?;

    if is_empty_value(&value) {
        return Err(TripError::NoData);
    }
    if !value.is_object() {
        return Err(TripError::MalformedBody("expected a JSON object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| TripError::MalformedBody(e.to_string()))
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Numbers pass through, numeric strings are parsed, `null` means absent.
fn coerce_number(field: &'static str, value: Option<Value>) -> Result<Option<f64>, TripError> {
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    number.map(Some).ok_or_else(|| TripError::InvalidField {
        field,
        reason: "expected a number".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telemetry(body: &str) -> Result<TelemetryUpdate, TripError> {
        decode_body::<TelemetryPayload>(body.as_bytes()).and_then(TelemetryUpdate::try_from)
    }

    fn location(body: &str) -> Result<LocationUpdate, TripError> {
        decode_body::<LocationPayload>(body.as_bytes()).and_then(LocationUpdate::try_from)
    }

    #[test]
    fn test_empty_bodies_mean_no_data() {
        for body in ["", "   ", "{}", "null", "[]", "\"\"", "0", "false"] {
            assert!(
                matches!(telemetry(body), Err(TripError::NoData)),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn test_malformed_and_non_object_bodies() {
        assert!(matches!(telemetry("{speed: 1"), Err(TripError::MalformedBody(_))));
        assert!(matches!(telemetry("[1, 2]"), Err(TripError::MalformedBody(_))));
        assert!(matches!(telemetry("42"), Err(TripError::MalformedBody(_))));
    }

    #[test]
    fn test_partial_fields_decode_as_absent() {
        let update = telemetry(r#"{"distance": 3.2}"#).unwrap();
        assert_eq!(update, TelemetryUpdate { speed: None, distance: Some(3.2) });

        let update = location(r#"{"latitude": 40.0, "longitude": null}"#).unwrap();
        assert_eq!(update, LocationUpdate { latitude: Some(40.0), longitude: None });
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let update = telemetry(r#"{"speed": " 12.5 ", "distance": 7}"#).unwrap();
        assert_eq!(update.speed, Some(12.5));
        assert_eq!(update.distance, Some(7.0));
    }

    #[test]
    fn test_non_numeric_field_names_the_field() {
        let err = telemetry(r#"{"speed": "fast"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for speed: expected a number");

        let err = location(r#"{"latitude": true, "longitude": 1}"#).unwrap_err();
        assert!(matches!(err, TripError::InvalidField { field: "latitude", .. }));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let update = telemetry(r#"{"battery": 88}"#).unwrap();
        assert_eq!(update, TelemetryUpdate::default());
    }
}
