//! Error taxonomy for the conversion pipeline.
//!
//! Every variant is fatal. Records with an unrecognised `testType` are not
//! errors; the grouper drops them.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("normalized input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },

    #[error("record {index} is not an object (found {found})")]
    NotAnObject { index: usize, found: &'static str },

    #[error("record {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: field `{field}` must be a string, found {found}")]
    FieldType {
        index: usize,
        field: &'static str,
        found: &'static str,
    },

    #[error("record {index}: field `{field}` is not an integer: {value}")]
    NotAnInteger {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("failed to serialize {bucket} trials: {source}")]
    Serialize {
        bucket: crate::Bucket,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Short JSON type name used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
