//! Storage backend abstraction for the document store.
//!
//! The [`StoreBackend`] trait is the seam between the public
//! [`DocumentStore`](crate::store::DocumentStore) API and a concrete storage
//! strategy. Implementations own their state exclusively for their lifetime
//! and are required to be thread-safe (`Send + Sync`); each one documents its
//! own serialization discipline for concurrent calls.
//!
//! Every operation raises a typed failure on the first violated precondition
//! and performs no partial mutation before doing so. No operation retries or
//! swallows an error; every failure is terminal for that call.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fmt::Debug;

use crate::{collection::CollectionEntry, document::StoredDocument, error::StoreResult};

/// Abstract interface for document storage backends.
///
/// Collection names and document ids are compared by exact string equality;
/// backends perform no normalization, trimming, or case-folding.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Whether a collection with the given name exists. Never fails on a
    /// missing name.
    async fn collection_exists(&self, name: &str) -> StoreResult<bool>;

    /// Creates an empty collection.
    ///
    /// # Errors
    ///
    /// [`CollectionAlreadyExists`](crate::error::StoreError::CollectionAlreadyExists)
    /// if the name is taken.
    async fn create_collection(&self, name: &str) -> StoreResult<()>;

    /// Returns the manifest entry for a collection.
    ///
    /// # Errors
    ///
    /// [`CollectionNotFound`](crate::error::StoreError::CollectionNotFound)
    /// if the name is unknown.
    async fn get_collection(&self, name: &str) -> StoreResult<CollectionEntry>;

    /// Lists all collections in creation order.
    async fn list_collections(&self) -> StoreResult<Vec<CollectionEntry>>;

    /// Deletes a collection and all documents it owns.
    ///
    /// # Errors
    ///
    /// [`CollectionNotFound`](crate::error::StoreError::CollectionNotFound)
    /// if the name is unknown.
    async fn delete_collection(&self, name: &str) -> StoreResult<()>;

    /// Replaces the manifest entry for `name` with `entry` verbatim, renaming
    /// the collection when `entry.name` differs.
    ///
    /// # Errors
    ///
    /// [`CollectionNotFound`](crate::error::StoreError::CollectionNotFound)
    /// if `name` is unknown.
    async fn update_collection(&self, name: &str, entry: CollectionEntry) -> StoreResult<()>;

    /// Whether a document with the given id exists in the collection.
    ///
    /// # Errors
    ///
    /// [`CollectionNotFound`](crate::error::StoreError::CollectionNotFound)
    /// if the collection is unknown. A missing id is not an error.
    async fn document_exists(&self, collection: &str, id: &str) -> StoreResult<bool>;

    /// Stores a new document and returns its freshly generated id.
    ///
    /// Any `_document_id` in the caller payload is overwritten. The owning
    /// collection's size is incremented.
    ///
    /// # Errors
    ///
    /// [`CollectionNotFound`](crate::error::StoreError::CollectionNotFound)
    /// if the collection is unknown.
    async fn add_document(
        &self,
        collection: &str,
        fields: Map<String, Value>,
    ) -> StoreResult<String>;

    /// Returns the document with the given id.
    ///
    /// # Errors
    ///
    /// [`CollectionNotFound`](crate::error::StoreError::CollectionNotFound)
    /// for an unknown collection,
    /// [`DocumentNotFound`](crate::error::StoreError::DocumentNotFound) for
    /// an unknown id.
    async fn get_document(&self, collection: &str, id: &str) -> StoreResult<StoredDocument>;

    /// Lists all documents of a collection in insertion order.
    ///
    /// # Errors
    ///
    /// [`CollectionNotFound`](crate::error::StoreError::CollectionNotFound)
    /// if the collection is unknown.
    async fn list_documents(&self, collection: &str) -> StoreResult<Vec<StoredDocument>>;

    /// Removes the document with the given id and decrements the owning
    /// collection's size.
    ///
    /// # Errors
    ///
    /// [`CollectionNotFound`](crate::error::StoreError::CollectionNotFound)
    /// for an unknown collection,
    /// [`DocumentNotFound`](crate::error::StoreError::DocumentNotFound) for
    /// an unknown id.
    async fn delete_document(&self, collection: &str, id: &str) -> StoreResult<()>;

    /// Replaces the payload of the document with the given id, keeping its
    /// identity. A `_document_id` in the replacement payload is ignored.
    ///
    /// # Errors
    ///
    /// [`CollectionNotFound`](crate::error::StoreError::CollectionNotFound)
    /// for an unknown collection,
    /// [`DocumentNotFound`](crate::error::StoreError::DocumentNotFound) for
    /// an unknown id.
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Map<String, Value>,
    ) -> StoreResult<()>;

    /// Returns all documents whose `data[field]`, in text form, equals
    /// `value`. An empty result set is not an error.
    ///
    /// # Errors
    ///
    /// [`CollectionNotFound`](crate::error::StoreError::CollectionNotFound)
    /// if the collection is unknown.
    async fn find_by_field(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> StoreResult<Vec<StoredDocument>>;

    /// Removes every collection and empties the manifest. A no-op when the
    /// store holds no state at all.
    async fn purge_all(&self) -> StoreResult<()>;

    /// Cleanly shuts down the backend, releasing all resources.
    ///
    /// The default implementation is a no-op.
    async fn shutdown(self) -> StoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

/// Factory trait for constructing backend instances.
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> StoreResult<Self::Backend>;
}
