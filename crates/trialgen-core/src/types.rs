//! Core types for trialgen-core.
//!
//! This module defines the data structures shared across all pipeline stages:
//! the transient [`RawRecord`], the typed output [`Trial`], the [`Bucket`]
//! discriminant and the fixed-order [`Buckets`] container.

use serde::{Deserialize, Serialize};

/// Test category a trial belongs to.
///
/// The source file labels categories `"test 1"` to `"test 4"`; the generated
/// module uses `test1` to `test4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Test1,
    Test2,
    Test3,
    Test4,
}

impl Bucket {
    /// All buckets in emission order.
    pub const ALL: [Bucket; 4] = [Bucket::Test1, Bucket::Test2, Bucket::Test3, Bucket::Test4];

    /// Map a source `testType` label to its bucket. Only exact matches count.
    pub fn from_source_label(label: &str) -> Option<Bucket> {
        match label {
            "test 1" => Some(Bucket::Test1),
            "test 2" => Some(Bucket::Test2),
            "test 3" => Some(Bucket::Test3),
            "test 4" => Some(Bucket::Test4),
            _ => None,
        }
    }

    /// Key written into each trial's `testType` field.
    pub fn key(self) -> &'static str {
        match self {
            Bucket::Test1 => "test1",
            Bucket::Test2 => "test2",
            Bucket::Test3 => "test3",
            Bucket::Test4 => "test4",
        }
    }

    pub fn upper(self) -> &'static str {
        match self {
            Bucket::Test1 => "TEST1",
            Bucket::Test2 => "TEST2",
            Bucket::Test3 => "TEST3",
            Bucket::Test4 => "TEST4",
        }
    }

    /// Name of the exported constant, e.g. `TEST1_TRIALS`.
    pub fn const_name(self) -> String {
        format!("{}_TRIALS", self.upper())
    }

    fn slot(self) -> usize {
        match self {
            Bucket::Test1 => 0,
            Bucket::Test2 => 1,
            Bucket::Test3 => 2,
            Bucket::Test4 => 3,
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Buckets
// ---------------------------------------------------------------------------

/// One ordered sequence per [`Bucket`]. Iteration always follows
/// [`Bucket::ALL`]; items within a bucket keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets<T> {
    slots: [Vec<T>; 4],
}

impl<T> Default for Buckets<T> {
    fn default() -> Self {
        Self {
            slots: Default::default(),
        }
    }
}

impl<T> Buckets<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bucket: Bucket, item: T) {
        self.slots[bucket.slot()].push(item);
    }

    pub fn get(&self, bucket: Bucket) -> &[T] {
        &self.slots[bucket.slot()]
    }

    /// Total number of items across all buckets.
    pub fn len(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Vec::is_empty)
    }

    /// Per-bucket item counts in emission order.
    pub fn counts(&self) -> [(Bucket, usize); 4] {
        Bucket::ALL.map(|b| (b, self.get(b).len()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[T])> + '_ {
        Bucket::ALL.into_iter().map(move |b| (b, self.get(b)))
    }

    /// Map every item, bucket by bucket in emission order, stopping at the
    /// first error.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(Bucket, T) -> std::result::Result<U, E>,
    ) -> std::result::Result<Buckets<U>, E> {
        let mut out = Buckets::new();
        for (bucket, items) in Bucket::ALL.into_iter().zip(self.slots) {
            for item in items {
                out.push(bucket, f(bucket, item)?);
            }
        }
        Ok(out)
    }
}

impl<T> std::ops::Index<Bucket> for Buckets<T> {
    type Output = [T];

    fn index(&self, bucket: Bucket) -> &[T] {
        self.get(bucket)
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A parsed input item prior to transformation.
///
/// Fields are kept as the JSON object the parser produced; typed access and
/// presence checks happen in [`crate::transform`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Zero-based position in the source array.
    pub index: usize,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// A normalised trial as written to the generated module.
///
/// Field order here is the key order in the emitted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trial {
    pub test_type: Bucket,
    pub order: i64,
    pub condition: String,
    pub word: String,
    pub meaning: String,
    pub sentence: String,
    pub theme: String,
    pub sub_order: i64,
    pub notes: String,
    pub is_warmup: bool,
}
