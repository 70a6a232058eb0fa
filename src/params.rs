//! Task parameter codec.
//!
//! Tasks cross screen transitions as JSON strings. `decode` is the only way a
//! record from the navigation layer reaches the store: anything that fails to
//! parse or validate is treated as absent.

use serde_json::Value;

use crate::error::ParamError;
use crate::task::Task;

/// A raw navigation parameter. The same name may be given more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    /// The value that counts: the string itself, or the first of several.
    pub fn first(&self) -> Option<&str> {
        match self {
            ParamValue::Single(s) => Some(s.as_str()),
            ParamValue::Multiple(values) => values.first().map(String::as_str),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multiple(values)
    }
}

/// Serialize a task to its transport string.
pub fn encode(task: &Task) -> Result<String, ParamError> {
    serde_json::to_string(task).map_err(ParamError::Encode)
}

/// Decode and validate a task parameter, reporting why it was rejected.
pub fn try_decode(value: Option<&ParamValue>) -> Result<Task, ParamError> {
    let raw = value
        .and_then(ParamValue::first)
        .filter(|s| !s.is_empty())
        .ok_or(ParamError::Absent)?;

    let parsed: Value = serde_json::from_str(raw).map_err(ParamError::Malformed)?;
    if !parsed.is_object() {
        return Err(ParamError::NotAnObject);
    }

    let task: Task = serde_json::from_value(parsed).map_err(ParamError::InvalidTask)?;
    if task.updated_at < task.created_at {
        return Err(ParamError::TimestampOrder {
            id: task.id,
            created_at: task.created_at,
            updated_at: task.updated_at,
        });
    }
    Ok(task)
}

/// Decode a task parameter. Absent or invalid input yields `None`.
pub fn decode(value: Option<&ParamValue>) -> Option<Task> {
    match try_decode(value) {
        Ok(task) => Some(task),
        Err(ParamError::Absent) => None,
        Err(e) => {
            tracing::debug!(error = %e, "discarding task parameter");
            None
        }
    }
}
