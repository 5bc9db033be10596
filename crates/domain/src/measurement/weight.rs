use serde::Serialize;
use serde_json::Value;

use crate::error::ValidationError;

/// Payload key carrying the weight in grams.
pub const WEIGHT_FIELD: &str = "peso";

pub const MIN_WEIGHT_G: f64 = 0.0;
pub const MAX_WEIGHT_G: f64 = 1_000_000.0;

/// Value object for a validated weight in grams.
///
/// Rules:
/// - Finite real number
/// - Within [0, 1,000,000] g inclusive
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Weight(f64);

impl Weight {
    /// Create a new Weight with range validation
    pub fn new(grams: f64) -> Result<Self, ValidationError> {
        if !grams.is_finite() {
            return Err(ValidationError::InvalidType {
                field: WEIGHT_FIELD,
                found: grams.to_string(),
            });
        }

        if !(MIN_WEIGHT_G..=MAX_WEIGHT_G).contains(&grams) {
            return Err(ValidationError::OutOfRange {
                value: grams,
                min: MIN_WEIGHT_G,
                max: MAX_WEIGHT_G,
            });
        }

        Ok(Self(grams))
    }

    /// Extract and validate the weight from an arbitrary request payload.
    ///
    /// Accepts JSON numbers and strings holding a finite number.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let raw = match payload.get(WEIGHT_FIELD) {
            None | Some(Value::Null) => return Err(ValidationError::MissingField(WEIGHT_FIELD)),
            Some(raw) => raw,
        };

        let grams = match raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match grams {
            Some(g) => Self::new(g),
            None => Err(ValidationError::InvalidType {
                field: WEIGHT_FIELD,
                found: describe(raw),
            }),
        }
    }

    pub fn grams(&self) -> f64 {
        self.0
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_number() {
        let w = Weight::from_payload(&json!({"peso": 512.5})).unwrap();
        assert_eq!(w.grams(), 512.5);
    }

    #[test]
    fn test_integer_number() {
        let w = Weight::from_payload(&json!({"peso": 300})).unwrap();
        assert_eq!(w.grams(), 300.0);
    }

    #[test]
    fn test_numeric_string() {
        let w = Weight::from_payload(&json!({"peso": " 42.75 "})).unwrap();
        assert_eq!(w.grams(), 42.75);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Weight::from_payload(&json!({"peso": 0})).is_ok());
        assert!(Weight::from_payload(&json!({"peso": 1_000_000})).is_ok());
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(
            Weight::from_payload(&json!({"weight": 10})).unwrap_err(),
            ValidationError::MissingField("peso")
        );
        assert_eq!(
            Weight::from_payload(&json!({"peso": null})).unwrap_err(),
            ValidationError::MissingField("peso")
        );
    }

    #[test]
    fn test_non_object_payload_is_missing_field() {
        assert_eq!(
            Weight::from_payload(&json!([1, 2, 3])).unwrap_err(),
            ValidationError::MissingField("peso")
        );
    }

    #[test]
    fn test_invalid_types() {
        for bad in [json!("abc"), json!(true), json!([1]), json!({"g": 1}), json!("NaN"), json!("inf")] {
            let err = Weight::from_payload(&json!({ "peso": bad.clone() })).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidType { field: "peso", .. }),
                "expected InvalidType for {bad}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        let err = Weight::from_payload(&json!({"peso": -0.5})).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { value, .. } if value == -0.5));

        let err = Weight::from_payload(&json!({"peso": 1_000_000.01})).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn test_out_of_range_numeric_string() {
        let err = Weight::from_payload(&json!({"peso": "-3"})).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }
}
