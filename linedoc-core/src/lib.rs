//! Core abstractions for the linedoc document store.
//!
//! This crate defines the storage-layer contract that backends implement and
//! the types shared across the linedoc project:
//!
//! - **Data model** ([`collection`], [`document`]) - Manifest entries and stored documents
//! - **Store backend abstraction** ([`backend`]) - Trait for implementing storage backends
//! - **Document store** ([`store`]) - Main interface for working with collections and documents
//! - **Caller-side validation** ([`validate`]) - Collection-name and payload shape checks
//! - **Error handling** ([`error`]) - Typed failures and the crate-wide result alias
//!
//! # Example
//!
//! ```ignore
//! use linedoc_core::store::DocumentStore;
//! use serde_json::json;
//!
//! let store = DocumentStore::new(backend);
//! store.create_collection("molecules").await?;
//!
//! let molecules = store.collection("molecules");
//! let id = molecules
//!     .add(json!({"data": {"name": "Methane", "smiles": "C"}}).as_object().cloned().unwrap())
//!     .await?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as linedoc_core;

pub mod backend;
pub mod collection;
pub mod document;
pub mod error;
pub mod store;
pub mod validate;
