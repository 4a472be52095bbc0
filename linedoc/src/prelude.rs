//! Convenient re-exports of commonly used types from linedoc.
//!
//! Import this prelude module to quickly access the most frequently used
//! types and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use linedoc::prelude::*;
//! ```

pub use linedoc_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    collection::CollectionEntry,
    document::{StoredDocument, value_as_text},
    error::{StoreError, StoreResult},
    store::{Collection, DocumentStore},
    validate::{DocumentPayload, validate_collection_name},
};
