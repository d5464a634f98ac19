//! Test builders — ergonomic constructors for source records and texts.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// SourceRecordBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one record in the hand-authored vocabulary.
///
/// # Example
///
/// ```rust
/// let record = SourceRecordBuilder::new("test 2", "narage")
///     .order("3")
///     .notes("recheck")
///     .build();
/// ```
pub struct SourceRecordBuilder {
    value: Value,
}

impl SourceRecordBuilder {
    pub fn new(test_type: &str, word: &str) -> Self {
        Self {
            value: json!({
                "test type": test_type,
                "student No.": "1",
                "order": "1",
                "condition": "massed",
                "word": word,
                "meaning": "壁画",
                "sentence": format!("A sentence with ({word})."),
                "theme": "art",
                "sub-order": "1",
                "备注": ""
            }),
        }
    }

    pub fn order(self, order: impl Into<Value>) -> Self {
        self.set("order", order)
    }

    pub fn sub_order(self, sub_order: impl Into<Value>) -> Self {
        self.set("sub-order", sub_order)
    }

    pub fn notes(self, notes: &str) -> Self {
        self.set("备注", notes)
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.value[key] = value.into();
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.value
            .as_object_mut()
            .expect("source records are objects")
            .remove(key);
        self
    }

    pub fn build(self) -> Value {
        self.value
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Render records as a pretty JSON array, the way the word list is stored.
/// serde_json leaves the `备注` key unescaped, so the normalizer sees it.
pub fn source_text(records: &[Value]) -> String {
    serde_json::to_string_pretty(records).expect("records serialize")
}

/// Source text for `labels`, one record per label, `order` counting from 1.
pub fn source_for_labels(labels: &[&str]) -> String {
    let records: Vec<Value> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            SourceRecordBuilder::new(label, &format!("w{i}"))
                .order((i + 1).to_string())
                .build()
        })
        .collect();
    source_text(&records)
}
