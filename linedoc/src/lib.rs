//! Main linedoc crate providing a unified interface for the document store.
//!
//! linedoc is a minimal schema-less document store persisted as line-delimited
//! JSON files. Collections are named groups of documents; documents are opaque
//! JSON payloads with a store-assigned identity. There is no cached index:
//! every read re-scans the relevant file, so the files on disk are always the
//! ground truth.
//!
//! # Quick Start
//!
//! ```ignore
//! use linedoc::{fs::{FsStore, StoreConfig}, prelude::*};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = FsStore::open(StoreConfig::new("./data")).unwrap();
//!     let store = DocumentStore::new(backend);
//!
//!     store.create_collection("molecules").await.unwrap();
//!
//!     let molecules = store.collection("molecules");
//!     let payload: DocumentPayload =
//!         serde_json::from_value(json!({"data": {"name": "Methane", "smiles": "C"}})).unwrap();
//!     let id = molecules.add(payload.into_fields()).await.unwrap();
//!
//!     let found = molecules.find_by_field("name", "Methane").await.unwrap();
//!     println!("found {} document(s), first id {}", found.len(), id);
//!
//!     store.shutdown().await.unwrap();
//! }
//! ```
//!
//! # Backends
//!
//! - [`fs`] - Line-delimited JSON files under a base directory

pub mod prelude;

pub use linedoc_core::{backend, collection, document, error, store, validate};

/// Filesystem storage backend implementations.
pub mod fs {
    pub use linedoc_fs::{CreateMode, FsStore, FsStoreBuilder, MANIFEST_FILE, StoreConfig};
}
