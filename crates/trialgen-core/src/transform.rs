//! Transform — maps bucketed raw records into typed [`Trial`]s.
//!
//! `order` and `subOrder` are coerced to integers; every other field passes
//! through as a string. Missing or mistyped fields are hard errors.

use crate::error::json_kind;
use crate::{Bucket, Buckets, ConvertError, RawRecord, Result, Trial};
use serde_json::Value;

impl Trial {
    /// Build the output form of `raw` for `bucket`.
    pub fn from_raw(raw: &RawRecord, bucket: Bucket) -> Result<Self> {
        Ok(Trial {
            test_type: bucket,
            order: integer_field(raw, "order")?,
            condition: text_field(raw, "condition")?,
            word: text_field(raw, "word")?,
            meaning: text_field(raw, "meaning")?,
            sentence: text_field(raw, "sentence")?,
            theme: text_field(raw, "theme")?,
            sub_order: integer_field(raw, "subOrder")?,
            notes: text_field(raw, "notes")?,
            is_warmup: false,
        })
    }
}

/// Transform every bucket in emission order, failing on the first bad record.
pub fn transform(buckets: Buckets<RawRecord>) -> Result<Buckets<Trial>> {
    buckets.try_map(|bucket, raw| Trial::from_raw(&raw, bucket))
}

fn field<'a>(raw: &'a RawRecord, field: &'static str) -> Result<&'a Value> {
    raw.fields.get(field).ok_or(ConvertError::MissingField {
        index: raw.index,
        field,
    })
}

fn text_field(raw: &RawRecord, name: &'static str) -> Result<String> {
    match field(raw, name)? {
        Value::String(s) => Ok(s.clone()),
        other => Err(ConvertError::FieldType {
            index: raw.index,
            field: name,
            found: json_kind(other),
        }),
    }
}

/// Integer from a numeric string (surrounding whitespace allowed) or a JSON
/// integer.
fn integer_field(raw: &RawRecord, name: &'static str) -> Result<i64> {
    let value = field(raw, name)?;
    let parsed = match value {
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    };
    parsed.ok_or_else(|| ConvertError::NotAnInteger {
        index: raw.index,
        field: name,
        value: value.to_string(),
    })
}
