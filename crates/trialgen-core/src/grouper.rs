//! Grouper — partitions raw records into the four test buckets.

use crate::{Bucket, Buckets, ConvertError, RawRecord, Result};
use serde_json::Value;

/// Partition `records` by `testType`, keeping source order within each bucket.
///
/// A record without a `testType` key is an error. A record whose `testType`
/// is anything other than `"test 1"`..`"test 4"` is dropped.
pub fn group(records: Vec<RawRecord>) -> Result<Buckets<RawRecord>> {
    let mut buckets = Buckets::new();
    for record in records {
        match classify(&record)? {
            Some(bucket) => buckets.push(bucket, record),
            None => tracing::debug!(
                index = record.index,
                test_type = %record.fields["testType"],
                "unrecognised testType, skipping record"
            ),
        }
    }
    Ok(buckets)
}

/// Bucket for a single record, `None` when its label is not recognised.
pub fn classify(record: &RawRecord) -> Result<Option<Bucket>> {
    match record.fields.get("testType") {
        None => Err(ConvertError::MissingField {
            index: record.index,
            field: "testType",
        }),
        Some(Value::String(label)) => Ok(Bucket::from_source_label(label)),
        Some(_) => Ok(None),
    }
}
