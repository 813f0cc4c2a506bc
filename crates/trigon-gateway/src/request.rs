// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strict parsing of classification requests.
//!
//! Request bodies are arbitrary JSON from untrusted callers. This module turns
//! a body into three `f64` sides, or a [`RequestError`] that never reaches the
//! classifier.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use thiserror::Error;
use trigon_core::{Sides, TriangleReport};

/// Transport-level failures for `POST /api/identify-triangle`.
///
/// The `Display` text is the `error` field of the 400 response body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// The body is not a JSON object.
    #[error("Invalid request format")]
    InvalidFormat,

    /// A side is missing or not a JSON number. Numeric sides are echoed,
    /// the others are zeroed.
    #[error("All sides must be valid numbers")]
    NonNumericSides { echoed: Sides },
}

impl RequestError {
    /// The sides reported back to the caller alongside the error.
    pub fn echoed_sides(&self) -> Sides {
        match self {
            RequestError::InvalidFormat => Sides::default(),
            RequestError::NonNumericSides { echoed } => *echoed,
        }
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let report = TriangleReport::invalid(self.echoed_sides(), self.to_string());
        (StatusCode::BAD_REQUEST, Json(report)).into_response()
    }
}

/// Parse a request body of the form `{"sideA": n, "sideB": n, "sideC": n}`.
///
/// Extra keys are ignored. Numeric strings such as `"3"` are not numbers.
/// Literals outside the `f64` range overflow to infinity (or underflow to
/// zero) and are left for the classifier to reject.
pub fn parse_sides(body: &[u8]) -> Result<Sides, RequestError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| RequestError::InvalidFormat)?;
    let object = value.as_object().ok_or(RequestError::InvalidFormat)?;

    match (
        number_field(object, "sideA"),
        number_field(object, "sideB"),
        number_field(object, "sideC"),
    ) {
        (Some(a), Some(b), Some(c)) => Ok(Sides::new(a, b, c)),
        (a, b, c) => Err(RequestError::NonNumericSides {
            echoed: Sides::new(a.unwrap_or(0.0), b.unwrap_or(0.0), c.unwrap_or(0.0)),
        }),
    }
}

fn number_field(object: &Map<String, Value>, key: &str) -> Option<f64> {
    match object.get(key)? {
        // With `arbitrary_precision` the number keeps its source text.
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_sides() {
        let sides = parse_sides(br#"{"sideA": 3, "sideB": 4.5, "sideC": -5}"#).unwrap();
        assert_eq!(sides, Sides::new(3.0, 4.5, -5.0));
    }

    #[test]
    fn ignores_unknown_keys() {
        let sides = parse_sides(br#"{"sideA": 1, "sideB": 1, "sideC": 1, "unit": "cm"}"#).unwrap();
        assert_eq!(sides, Sides::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn malformed_json_is_invalid_format() {
        assert_eq!(parse_sides(b"{sideA: 3"), Err(RequestError::InvalidFormat));
        assert_eq!(parse_sides(b""), Err(RequestError::InvalidFormat));
    }

    #[test]
    fn non_object_json_is_invalid_format() {
        assert_eq!(parse_sides(b"null"), Err(RequestError::InvalidFormat));
        assert_eq!(parse_sides(b"[3, 4, 5]"), Err(RequestError::InvalidFormat));
        assert_eq!(parse_sides(b"42"), Err(RequestError::InvalidFormat));
    }

    #[test]
    fn out_of_range_numbers_overflow_instead_of_failing() {
        let sides = parse_sides(br#"{"sideA": 1e400, "sideB": -1e400, "sideC": 1e-400}"#).unwrap();
        assert_eq!(sides.a, f64::INFINITY);
        assert_eq!(sides.b, f64::NEG_INFINITY);
        assert_eq!(sides.c, 0.0);
    }

    #[test]
    fn decimal_literals_parse_to_nearest_f64() {
        let sides = parse_sides(br#"{"sideA": 0.1, "sideB": 2.2, "sideC": 3}"#).unwrap();
        assert_eq!(sides, Sides::new(0.1, 2.2, 3.0));
    }

    #[test]
    fn string_side_is_non_numeric_and_echoes_the_rest() {
        let err = parse_sides(br#"{"sideA": "3", "sideB": 4, "sideC": 5}"#).unwrap_err();
        assert_eq!(
            err,
            RequestError::NonNumericSides {
                echoed: Sides::new(0.0, 4.0, 5.0)
            }
        );
        assert_eq!(err.to_string(), "All sides must be valid numbers");
    }

    #[test]
    fn missing_and_null_sides_are_non_numeric() {
        let err = parse_sides(br#"{"sideA": 2, "sideC": null}"#).unwrap_err();
        assert_eq!(err.echoed_sides(), Sides::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn invalid_format_reports_zeroed_sides() {
        assert_eq!(RequestError::InvalidFormat.echoed_sides(), Sides::default());
        assert_eq!(RequestError::InvalidFormat.to_string(), "Invalid request format");
    }
}
