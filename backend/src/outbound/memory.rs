//! Process-local document store adapters.
//!
//! [`InMemoryDocumentStore`] mirrors the MongoDB adapter's semantics without
//! a server: keys are generated on insert, updates merge top-level fields and
//! never create documents. It backs tests and local runs.
//!
//! [`UnavailableDocumentStore`] stands in when the startup connection fails.
//! Every call reports `Unavailable` without doing any work.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use bson::Document;
use bson::oid::ObjectId;

use crate::domain::DocumentId;
use crate::domain::document_mapper::ID_FIELD;
use crate::domain::ports::{DeleteOutcome, DocumentStore, DocumentStoreError, UpdateOutcome};

type Collection = BTreeMap<ObjectId, Document>;

/// Document store held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: Mutex<HashMap<String, Collection>>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents held in `collection`.
    pub fn len(&self, collection: &str) -> usize {
        self.lock().get(collection).map_or(0, BTreeMap::len)
    }

    /// Whether `collection` holds no documents.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Collection>> {
        // A panic while holding the lock cannot leave a half-written document.
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    fn is_available(&self) -> bool {
        true
    }

    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<DocumentId, DocumentStoreError> {
        let key = match document.get_object_id(ID_FIELD) {
            Ok(existing) => existing,
            Err(_) => ObjectId::new(),
        };
        document.insert(ID_FIELD, key);
        let mut collections = self.lock();
        let documents = collections.entry(collection.to_owned()).or_default();
        if documents.contains_key(&key) {
            return Err(DocumentStoreError::query(format!(
                "duplicate key {key} in {collection}"
            )));
        }
        documents.insert(key, document);
        Ok(key.into())
    }

    async fn find_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<Option<Document>, DocumentStoreError> {
        Ok(self
            .lock()
            .get(collection)
            .and_then(|documents| documents.get(id.as_object_id()))
            .cloned())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DocumentStoreError> {
        Ok(self
            .lock()
            .get(collection)
            .map(|documents| documents.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn update_one(
        &self,
        collection: &str,
        id: &DocumentId,
        changes: Document,
    ) -> Result<UpdateOutcome, DocumentStoreError> {
        let mut collections = self.lock();
        let Some(document) = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id.as_object_id()))
        else {
            return Ok(UpdateOutcome::NotFound);
        };
        for (field, value) in changes {
            if field != ID_FIELD {
                document.insert(field, value);
            }
        }
        Ok(UpdateOutcome::Updated)
    }

    async fn delete_one(
        &self,
        collection: &str,
        id: &DocumentId,
    ) -> Result<DeleteOutcome, DocumentStoreError> {
        let removed = self
            .lock()
            .get_mut(collection)
            .and_then(|documents| documents.remove(id.as_object_id()));
        Ok(match removed {
            Some(_) => DeleteOutcome::Deleted,
            None => DeleteOutcome::NotFound,
        })
    }
}

/// Store installed when no database connection could be established.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableDocumentStore;

impl UnavailableDocumentStore {
    fn error() -> DocumentStoreError {
        DocumentStoreError::unavailable("no database connection")
    }
}

#[async_trait]
impl DocumentStore for UnavailableDocumentStore {
    fn is_available(&self) -> bool {
        false
    }

    async fn insert(&self, _: &str, _: Document) -> Result<DocumentId, DocumentStoreError> {
        Err(Self::error())
    }

    async fn find_one(
        &self,
        _: &str,
        _: &DocumentId,
    ) -> Result<Option<Document>, DocumentStoreError> {
        Err(Self::error())
    }

    async fn find_all(&self, _: &str) -> Result<Vec<Document>, DocumentStoreError> {
        Err(Self::error())
    }

    async fn update_one(
        &self,
        _: &str,
        _: &DocumentId,
        _: Document,
    ) -> Result<UpdateOutcome, DocumentStoreError> {
        Err(Self::error())
    }

    async fn delete_one(
        &self,
        _: &str,
        _: &DocumentId,
    ) -> Result<DeleteOutcome, DocumentStoreError> {
        Err(Self::error())
    }
}
