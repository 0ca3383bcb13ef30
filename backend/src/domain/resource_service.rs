//! Resource use cases over the document store port.
//!
//! One generic service serves every resource kind. It checks availability
//! before touching the store, converts payloads with the document mapper and
//! translates port failures into domain errors.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, warn};

use crate::domain::document_mapper::{self, ID_FIELD, MappingError};
use crate::domain::ports::{
    DeleteOutcome, DocumentStore, DocumentStoreError, ResourceCatalog, UpdateOutcome,
};
use crate::domain::{DocumentId, Error, Resource};

/// Message returned whenever the store cannot serve a request.
pub const UNAVAILABLE_MESSAGE: &str = "Database not available";

/// Document-backed implementation of [`ResourceCatalog`].
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # use mockable::DefaultClock;
/// use backend::domain::{Item, ResourceService};
/// use backend::outbound::memory::InMemoryDocumentStore;
///
/// let items: ResourceService<Item> =
///     ResourceService::new(Arc::new(InMemoryDocumentStore::new()), Arc::new(DefaultClock));
/// # let _ = items;
/// ```
pub struct ResourceService<R> {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceService<R> {
    /// Create a service over a shared store handle.
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            _resource: PhantomData,
        }
    }

    fn ensure_available(&self) -> Result<(), Error> {
        if self.store.is_available() {
            return Ok(());
        }
        warn!(collection = R::COLLECTION, "document store is not connected");
        Err(Error::service_unavailable(UNAVAILABLE_MESSAGE))
    }

    fn not_found() -> Error {
        Error::not_found(format!("{} not found", R::LABEL))
    }

    fn map_store_error(err: DocumentStoreError) -> Error {
        match err {
            DocumentStoreError::Unavailable { message } => {
                warn!(collection = R::COLLECTION, %message, "document store unreachable");
                Error::service_unavailable(UNAVAILABLE_MESSAGE)
            }
            DocumentStoreError::Query { message } => {
                error!(collection = R::COLLECTION, %message, "document store query failed");
                Error::internal(format!("{} store error: {message}", R::LABEL))
            }
        }
    }

    fn map_mapping_error(err: MappingError) -> Error {
        error!(collection = R::COLLECTION, error = %err, "document mapping failed");
        Error::internal(err.to_string())
    }

    async fn find_existing(&self, id: &DocumentId) -> Result<Option<R>, Error> {
        let document = self
            .store
            .find_one(R::COLLECTION, id)
            .await
            .map_err(Self::map_store_error)?;
        document
            .map(document_mapper::from_storage::<R>)
            .transpose()
            .map_err(Self::map_mapping_error)
    }
}

#[async_trait]
impl<R: Resource> ResourceCatalog<R> for ResourceService<R> {
    async fn create(&self, draft: R::Draft) -> Result<R, Error> {
        self.ensure_available()?;
        let document = document_mapper::to_storage::<R>(&draft, self.clock.utc())
            .map_err(Self::map_mapping_error)?;
        let mut stored = document.clone();
        let id = self
            .store
            .insert(R::COLLECTION, document)
            .await
            .map_err(Self::map_store_error)?;
        stored.insert(ID_FIELD, *id.as_object_id());
        document_mapper::from_storage::<R>(stored).map_err(Self::map_mapping_error)
    }

    async fn list(&self) -> Result<Vec<R>, Error> {
        self.ensure_available()?;
        let documents = self
            .store
            .find_all(R::COLLECTION)
            .await
            .map_err(Self::map_store_error)?;
        documents
            .into_iter()
            .map(document_mapper::from_storage::<R>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Self::map_mapping_error)
    }

    async fn fetch(&self, id: &DocumentId) -> Result<R, Error> {
        self.ensure_available()?;
        self.find_existing(id).await?.ok_or_else(Self::not_found)
    }

    async fn update(&self, id: &DocumentId, patch: R::Patch) -> Result<R, Error> {
        self.ensure_available()?;
        let changes = document_mapper::to_storage_patch::<R>(&patch, self.clock.utc())
            .map_err(Self::map_mapping_error)?;

        let Some(changes) = changes else {
            return self.find_existing(id).await?.ok_or_else(Self::not_found);
        };

        let outcome = self
            .store
            .update_one(R::COLLECTION, id, changes)
            .await
            .map_err(Self::map_store_error)?;
        if outcome == UpdateOutcome::NotFound {
            return Err(Self::not_found());
        }

        // The write and this read are independent; a concurrent delete in
        // between leaves nothing to return.
        match self.find_existing(id).await? {
            Some(entity) => Ok(entity),
            None => {
                warn!(
                    collection = R::COLLECTION,
                    id = %id,
                    "document removed between update and re-fetch"
                );
                Err(Self::not_found())
            }
        }
    }

    async fn delete(&self, id: &DocumentId) -> Result<(), Error> {
        self.ensure_available()?;
        match self
            .store
            .delete_one(R::COLLECTION, id)
            .await
            .map_err(Self::map_store_error)?
        {
            DeleteOutcome::Deleted => Ok(()),
            DeleteOutcome::NotFound => Err(Self::not_found()),
        }
    }
}

#[cfg(test)]
#[path = "resource_service_tests.rs"]
mod tests;
