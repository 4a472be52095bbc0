//! Caller-side validation of collection names and document payloads.
//!
//! These checks belong to the request boundary, not to the storage layer:
//! backends only re-check the reserved manifest name, which would corrupt the
//! store if it ever reached the filesystem. Everything else here is the
//! contract a routing layer enforces before invoking the store.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    document::DATA_FIELD,
    error::{StoreError, StoreResult},
};

/// The collection name reserved for the manifest's own file.
pub const RESERVED_COLLECTION_NAME: &str = "collections";

/// Validates a caller-supplied collection name.
///
/// Names must be non-empty, alphanumeric-only, and must not collide with the
/// reserved manifest name.
pub fn validate_collection_name(name: &str) -> StoreResult<()> {
    if name.is_empty() {
        return Err(StoreError::Validation("Name cannot be empty.".to_string()));
    }
    if !name.chars().all(char::is_alphanumeric) {
        return Err(StoreError::Validation(
            "Name can only contain alphanumeric characters.".to_string(),
        ));
    }
    if name == RESERVED_COLLECTION_NAME {
        return Err(StoreError::Validation(format!(
            "Name cannot be '{RESERVED_COLLECTION_NAME}'."
        )));
    }
    Ok(())
}

/// The `{"data": {...}}` request shape for adding or updating a document.
///
/// Extra top-level fields are rejected at deserialization time; the `data`
/// object itself is opaque to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentPayload {
    pub data: Map<String, Value>,
}

impl DocumentPayload {
    /// Converts this payload into the top-level field map stored on disk.
    pub fn into_fields(self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(DATA_FIELD.to_string(), Value::Object(self.data));
        fields
    }
}
