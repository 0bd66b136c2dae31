//! Submitted score records and their shape validation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Human-readable description of the only accepted submission shape.
pub const EXPECTED_SHAPE: &str =
    "Expected a single object of {name:name, high_score:number, date:date}";

/// Reasons a submitted score is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("submission is not an object. {}", EXPECTED_SHAPE)]
    NotAnObject,

    #[error("field `{field}` must be a {expected}. {}", EXPECTED_SHAPE)]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

/// A single leaderboard entry.
///
/// `high_score` keeps the JSON number exactly as submitted so integers are
/// echoed back as integers. Fields beyond the canonical three are neither
/// validated nor dropped; they ride along in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub high_score: Number,
    pub date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScoreRecord {
    pub fn new(
        name: impl Into<String>,
        high_score: impl Into<Number>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            high_score: high_score.into(),
            date: date.into(),
            extra: Map::new(),
        }
    }

    /// Validates an arbitrary JSON value against the canonical shape.
    ///
    /// No coercion is applied: `"100"` is not a number and `100` is not a
    /// string.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let object = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let name = match object.get("name") {
            Some(Value::String(name)) => name.clone(),
            _ => return Err(invalid("name", "string")),
        };
        let high_score = match object.get("high_score") {
            Some(Value::Number(score)) => score.clone(),
            _ => return Err(invalid("high_score", "number")),
        };
        let date = match object.get("date") {
            Some(Value::String(date)) => date.clone(),
            _ => return Err(invalid("date", "string")),
        };

        let extra = object
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "name" | "high_score" | "date"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            name,
            high_score,
            date,
            extra,
        })
    }

    /// Numeric score used for ordering.
    pub fn score(&self) -> f64 {
        self.high_score.as_f64().unwrap_or(0.0)
    }

    pub fn to_value(&self) -> Value {
        let mut object = self.extra.clone();
        object.insert("name".into(), Value::String(self.name.clone()));
        object.insert("high_score".into(), Value::Number(self.high_score.clone()));
        object.insert("date".into(), Value::String(self.date.clone()));
        Value::Object(object)
    }
}

fn invalid(field: &'static str, expected: &'static str) -> ValidationError {
    ValidationError::InvalidField { field, expected }
}
