/// Shared serializable output types.
///
/// These are what gets written to stdout in the JSON formats. They are
/// decoupled from the internal `AirportRecord` / `AirportRegistry` types.
use serde::Serialize;
use serde_json::{Map, Value};

use crate::airports::{AirportRecord, AirportsError, Field, FieldValue};

/// One airport projected onto the selected fields, keys in field order.
///
/// Missing coordinates serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AirportOutput(pub Map<String, Value>);

impl AirportOutput {
    #[must_use]
    pub fn project(record: &AirportRecord, fields: &[Field]) -> Self {
        let mut map = Map::new();
        for field in fields {
            for (column, value) in field.columns().iter().zip(field.values(record)) {
                map.insert((*column).to_owned(), json_value(value));
            }
        }
        Self(map)
    }
}

fn json_value(value: FieldValue<'_>) -> Value {
    match value {
        FieldValue::Text(s) => Value::String(s.to_owned()),
        FieldValue::Coordinate(Some(v)) => Value::from(v),
        FieldValue::Coordinate(None) => Value::Null,
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from an `AirportsError`.
    #[must_use]
    pub fn from_airports_error(err: &AirportsError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
