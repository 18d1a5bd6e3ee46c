//! Domain errors for snapshot parsing and reference table validation

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("nutrition snapshot must be a JSON object, found {found}")]
    SnapshotNotObject { found: &'static str },

    #[error("nutrition batch contains no snapshots")]
    EmptyBatch,

    #[error("reference range for '{nutrient}' has min {min} greater than max {max}")]
    InvalidReferenceRange { nutrient: String, min: f64, max: f64 },

    #[error("reference range for '{nutrient}' has a non-finite bound")]
    NonFiniteBound { nutrient: String },

    #[error("reference range for '{nutrient}' is defined more than once")]
    DuplicateNutrient { nutrient: String },

    #[error("'{nutrient}' in {table} has no reference range")]
    UnknownNutrient { nutrient: String, table: &'static str },

    #[error("jitter amplitude must lie between 0 and 90, got {0}")]
    InvalidJitter(f64),
}

/// JSON type name used in error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
