//! Stored document representation and field-matching helpers.
//!
//! A document is an opaque JSON object owned by exactly one collection. The
//! store assigns its identity at creation time; everything else is the
//! caller's payload, conventionally nested under a `"data"` object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// The reserved top-level field holding the store-assigned document id.
pub const DOCUMENT_ID_FIELD: &str = "_document_id";

/// The conventional top-level field holding the caller's payload object.
pub const DATA_FIELD: &str = "data";

/// One line of a collection's backing file.
///
/// All top-level fields other than `_document_id` are carried verbatim, so a
/// file written by another producer round-trips byte-for-line even when it
/// contains fields the store does not know about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    #[serde(rename = "_document_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl StoredDocument {
    /// Wraps a caller payload with a freshly generated id.
    ///
    /// Any `_document_id` the caller smuggled into the payload is discarded;
    /// the store is the only authority over document identity.
    pub fn with_fresh_id(fields: Map<String, Value>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), fields)
    }

    /// Wraps a caller payload with a known id, used on update to force the
    /// original id back onto the replacement payload.
    pub fn with_id(id: impl Into<String>, mut fields: Map<String, Value>) -> Self {
        fields.remove(DOCUMENT_ID_FIELD);
        Self { id: id.into(), fields }
    }

    /// The caller's `"data"` object, if present and an object.
    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.fields.get(DATA_FIELD).and_then(Value::as_object)
    }

    /// The single-field equality predicate behind `find_by_field`.
    ///
    /// A document matches iff its `data` object contains `field` and the text
    /// form of that field's value equals `value`.
    pub fn matches_field(&self, field: &str, value: &str) -> bool {
        self.data()
            .and_then(|data| data.get(field))
            .is_some_and(|v| value_as_text(v) == value)
    }
}

/// Text form of a JSON value for equality comparison.
///
/// Strings compare as their contents (no surrounding quotes); every other
/// value compares as its compact JSON rendering, so the number `1` matches
/// the query string `"1"`.
pub fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
