//! Error types and result types for document store operations.
//!
//! Use [`StoreResult<T>`] as the return type for fallible operations.

use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with a document store.
///
/// The first four variants are the boundary contract: an HTTP layer maps
/// [`CollectionAlreadyExists`](StoreError::CollectionAlreadyExists) and
/// [`Validation`](StoreError::Validation) to 400 responses, and the two
/// not-found variants to 404.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Collection creation was attempted with a name that is already taken.
    #[error("Collection with name '{0}' already exists.")]
    CollectionAlreadyExists(String),
    /// A collection operation referenced an unknown collection name.
    #[error("Collection with name '{0}' does not exist.")]
    CollectionNotFound(String),
    /// A document operation referenced an unknown id within an existing collection.
    /// The first argument is the collection name, the second the document id.
    #[error("Document with ID '{1}' does not exist in collection '{0}'.")]
    DocumentNotFound(String, String),
    /// Malformed caller input (bad collection name or payload shape).
    #[error("Validation error: {0}")]
    Validation(String),
    /// An I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization/deserialization error when reading or writing JSON lines.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Whether this error denotes a missing collection or document.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::CollectionNotFound(_) | StoreError::DocumentNotFound(_, _)
        )
    }
}

/// A specialized `Result` type for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<IoError> for StoreError {
    fn from(err: IoError) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<SerdeJsonError> for StoreError {
    fn from(err: SerdeJsonError) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
