//! Error types for the parameter boundary, form submission and edit lookup.

use thiserror::Error;

/// Why a task parameter could not be turned into a `Task`.
#[derive(Debug, Error)]
pub enum ParamError {
    /// No parameter, an empty string, or an empty list.
    #[error("parameter is absent")]
    Absent,

    /// The value is not valid JSON.
    #[error("parameter is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The JSON value is not an object.
    #[error("parameter is not a JSON object")]
    NotAnObject,

    /// A field is missing or has the wrong type or value.
    #[error("parameter is not a valid task: {0}")]
    InvalidTask(#[source] serde_json::Error),

    /// `updatedAt` precedes `createdAt`.
    #[error("task {id} was updated at {updated_at} before it was created at {created_at}")]
    TimestampOrder {
        id: String,
        created_at: i64,
        updated_at: i64,
    },

    #[error("failed to encode task: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Form submission rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// The title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// The edit screen could not resolve the task it was asked to edit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("task not found")]
    NotFound,
}
