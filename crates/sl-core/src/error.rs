//! Error types for sl-core

use thiserror::Error;

/// Core error type for Starload
///
/// Data-quality anomalies (nulls, duplicates, out-of-range values, orphan
/// references) are never errors; they are repaired or dropped by the
/// transform layer with a diagnostic count. These variants cover structural
/// problems only, and callers are expected to fail the enclosing run on
/// them.
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: A required column is absent from the batch
    #[error("[E001] {entity} batch is missing required column '{column}' at row {row}")]
    MissingColumn {
        entity: String,
        column: String,
        row: usize,
    },

    /// E002: A column value has the wrong type
    #[error("[E002] {entity}.{column} at row {row}: expected {expected}, found {found}")]
    ColumnType {
        entity: String,
        column: String,
        row: usize,
        expected: String,
        found: String,
    },

    /// E003: Invalid cleaning policy value
    #[error("[E003] Invalid policy: {message}")]
    PolicyInvalid { message: String },

    /// E004: Failed to parse a policy or config document
    #[error("[E004] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
