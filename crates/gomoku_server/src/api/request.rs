//! Move request parsing and validation.
//!
//! Fields are read as raw JSON first so rejections can echo back exactly
//! what the client sent.

use crate::api::error::ApiError;
use gomoku_core::{BOARD_SIZE, Stone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Move submission body as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMoveRequest {
    #[serde(default)]
    row: Value,
    #[serde(default)]
    col: Value,
    #[serde(default)]
    stone: Value,
}

/// A move submission whose fields passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRequest {
    /// Zero-based row, `0..15`.
    pub row: usize,
    /// Zero-based column, `0..15`.
    pub col: usize,
    /// Color being placed.
    pub stone: Stone,
}

impl RawMoveRequest {
    /// Parses a request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body).map_err(|_| ApiError::InvalidBody)
    }

    /// Checks coordinates, then the stone color.
    pub fn validate(self) -> Result<MoveRequest, ApiError> {
        let (Some(row), Some(col)) = (coordinate(&self.row), coordinate(&self.col)) else {
            return Err(ApiError::InvalidCoordinates {
                row: self.row,
                col: self.col,
            });
        };

        let stone = self
            .stone
            .as_str()
            .and_then(|name| name.parse::<Stone>().ok())
            .ok_or(ApiError::InvalidStone {
                received: self.stone,
            })?;

        Ok(MoveRequest { row, col, stone })
    }
}

/// Whole-valued numbers in range, including float forms such as `7.0`.
fn coordinate(value: &Value) -> Option<usize> {
    let whole = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v < BOARD_SIZE as f64)
            .map(|v| v as u64)
    })?;
    usize::try_from(whole).ok().filter(|v| *v < BOARD_SIZE)
}

/// JSON type name of a value, for error details.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<MoveRequest, ApiError> {
        RawMoveRequest::from_slice(body.as_bytes())?.validate()
    }

    #[test]
    fn test_valid_request() {
        let req = parse(r#"{"row": 7, "col": 14, "stone": "white"}"#).unwrap();
        assert_eq!(
            req,
            MoveRequest {
                row: 7,
                col: 14,
                stone: Stone::White
            }
        );
    }

    #[test]
    fn test_whole_float_coordinates_accepted() {
        let req = parse(r#"{"row": 7.0, "col": 0.0, "stone": "black"}"#).unwrap();
        assert_eq!((req.row, req.col), (7, 0));
        assert!(matches!(
            parse(r#"{"row": 15.0, "col": 7, "stone": "black"}"#),
            Err(ApiError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(parse("{row: 7"), Err(ApiError::InvalidBody)));
    }

    #[test]
    fn test_coordinates_checked_before_stone() {
        assert!(matches!(
            parse(r#"{"row": 15, "col": 7, "stone": "purple"}"#),
            Err(ApiError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_fractional_and_missing_coordinates() {
        for body in [
            r#"{"row": -1, "col": 7, "stone": "black"}"#,
            r#"{"row": 1.5, "col": 7, "stone": "black"}"#,
            r#"{"row": "7", "col": 7, "stone": "black"}"#,
            r#"{"col": 7, "stone": "black"}"#,
        ] {
            assert!(
                matches!(parse(body), Err(ApiError::InvalidCoordinates { .. })),
                "{body}"
            );
        }
    }

    #[test]
    fn test_rejects_unknown_stone() {
        match parse(r#"{"row": 7, "col": 7, "stone": "Black"}"#) {
            Err(ApiError::InvalidStone { received }) => assert_eq!(received, "Black"),
            other => panic!("expected InvalidStone, got {other:?}"),
        }
        assert!(matches!(
            parse(r#"{"row": 7, "col": 7}"#),
            Err(ApiError::InvalidStone { .. })
        ));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&Value::Null), "null");
        assert_eq!(type_name(&serde_json::json!(3)), "number");
        assert_eq!(type_name(&serde_json::json!("3")), "string");
    }
}
