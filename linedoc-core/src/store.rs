//! Main document store interface for interacting with storage backends.
//!
//! This module provides the primary API for working with the store:
//!
//! - [`DocumentStore`] - Store bound to a specific backend implementation
//! - [`Collection`] - Borrowed handle for one collection's document operations
//!
//! # Example
//!
//! ```ignore
//! use linedoc::{fs::FsStore, store::DocumentStore};
//!
//! let store = DocumentStore::new(backend);
//! store.create_collection("molecules").await?;
//! let molecules = store.collection("molecules");
//! ```

use serde_json::{Map, Value};

use crate::{
    backend::StoreBackend, collection::CollectionEntry, document::StoredDocument,
    error::StoreResult,
};

/// A document store bound to a specific backend implementation.
///
/// All operations delegate to the backend; this type adds the ergonomic
/// surface (collection handles) on top of the raw [`StoreBackend`] contract.
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Gets a handle for the collection with the given name.
    ///
    /// The handle is cheap to create and does not check that the collection
    /// exists; every operation on it re-checks against the backend.
    pub fn collection<'a>(&'a self, name: &str) -> Collection<'a, B> {
        Collection::new(name.to_string(), &self.backend)
    }

    /// Whether a collection with the given name exists.
    pub async fn collection_exists(&self, name: &str) -> StoreResult<bool> {
        self.backend.collection_exists(name).await
    }

    /// Creates a new, empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if a collection with that name already exists.
    pub async fn create_collection(&self, name: &str) -> StoreResult<()> {
        self.backend.create_collection(name).await
    }

    /// Returns the manifest entry (name and size) for a collection.
    pub async fn get_collection(&self, name: &str) -> StoreResult<CollectionEntry> {
        self.backend.get_collection(name).await
    }

    /// Lists all collections in creation order.
    pub async fn list_collections(&self) -> StoreResult<Vec<CollectionEntry>> {
        self.backend.list_collections().await
    }

    /// Deletes a collection and every document it owns.
    pub async fn delete_collection(&self, name: &str) -> StoreResult<()> {
        self.backend.delete_collection(name).await
    }

    /// Replaces a collection's manifest entry, renaming it when the new
    /// entry carries a different name.
    pub async fn update_collection(&self, name: &str, entry: CollectionEntry) -> StoreResult<()> {
        self.backend.update_collection(name, entry).await
    }

    /// Removes every collection and empties the manifest.
    pub async fn purge_all(&self) -> StoreResult<()> {
        self.backend.purge_all().await
    }

    /// Shuts down the store and releases backend resources.
    ///
    /// This consumes the store and should be called when no longer needed.
    pub async fn shutdown(self) -> StoreResult<()> {
        self.backend.shutdown().await?;

        Ok(())
    }
}

/// A borrowed handle for one collection's document operations.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the backend reference
/// * `B` - The storage backend type
#[derive(Debug)]
pub struct Collection<'a, B: StoreBackend> {
    name: String,
    backend: &'a B,
}

impl<'a, B: StoreBackend> Collection<'a, B> {
    pub(crate) fn new(name: String, backend: &'a B) -> Self {
        Self { name, backend }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns this collection's manifest entry.
    pub async fn entry(&self) -> StoreResult<CollectionEntry> {
        self.backend.get_collection(&self.name).await
    }

    /// Whether a document with the given id exists in this collection.
    pub async fn contains(&self, id: &str) -> StoreResult<bool> {
        self.backend.document_exists(&self.name, id).await
    }

    /// Stores a new document and returns its generated id.
    pub async fn add(&self, fields: Map<String, Value>) -> StoreResult<String> {
        self.backend.add_document(&self.name, fields).await
    }

    /// Returns the document with the given id.
    pub async fn get(&self, id: &str) -> StoreResult<StoredDocument> {
        self.backend.get_document(&self.name, id).await
    }

    /// Lists all documents in insertion order.
    pub async fn list(&self) -> StoreResult<Vec<StoredDocument>> {
        self.backend.list_documents(&self.name).await
    }

    /// Removes the document with the given id.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.backend.delete_document(&self.name, id).await
    }

    /// Replaces the payload of the document with the given id, keeping its
    /// identity.
    pub async fn update(&self, id: &str, fields: Map<String, Value>) -> StoreResult<()> {
        self.backend.update_document(&self.name, id, fields).await
    }

    /// Returns all documents whose `data[field]`, in text form, equals
    /// `value`.
    pub async fn find_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> StoreResult<Vec<StoredDocument>> {
        self.backend.find_by_field(&self.name, field, value).await
    }
}
