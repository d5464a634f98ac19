//! Parser — turns normalized text into an ordered list of [`RawRecord`]s.

use crate::error::json_kind;
use crate::{ConvertError, RawRecord, Result};
use serde_json::Value;

/// Parse `text` as a JSON array of objects.
///
/// There is no recovery: the first structural problem aborts the parse.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(text)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ConvertError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(RawRecord { index, fields }),
            other => Err(ConvertError::NotAnObject {
                index,
                found: json_kind(&other),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(records = records.len(), "parsed source");
    Ok(records)
}
