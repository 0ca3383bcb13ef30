//! Driven port for schema-flexible document collections.
//!
//! Adapters store one document per entity, keyed by its native
//! [`DocumentId`]. Every call names the collection it targets, so a single
//! shared handle serves all resource kinds.

use async_trait::async_trait;
use bson::Document;

use crate::domain::DocumentId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by document store adapters.
    pub enum DocumentStoreError {
        /// The store is not connected or the server cannot be reached.
        Unavailable { message: String } => "document store unavailable: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "document store query failed: {message}",
    }
}

/// Result of a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A document matched the key and the given fields were set.
    Updated,
    /// No document matched the key; nothing was written.
    NotFound,
}

/// Result of a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Whether the store holds a live connection.
    ///
    /// Callers check this before any I/O so a disconnected store fails fast.
    fn is_available(&self) -> bool;

    /// Insert a document and return the key assigned to it.
    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, DocumentStoreError>;

    /// Fetch the document stored under `id`, including its `_id` field.
    async fn find_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, DocumentStoreError>;

    /// Return every document in the collection, in no particular order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError>;

    /// Set the given fields on the document stored under `id`.
    ///
    /// Fields absent from `changes` are left untouched. Never creates a
    /// document.
    async fn update_one(
        &self,
        collection: &str,
        id: &DocumentId,
        changes: Document,
    ) -> Result<UpdateOutcome, DocumentStoreError>;

    /// Remove the document stored under `id`.
    async fn delete_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<DeleteOutcome, DocumentStoreError>;
}
