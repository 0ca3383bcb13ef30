//! Driving port for resource use cases.
//!
//! Inbound adapters (HTTP handlers) depend on this port rather than on the
//! document store, so they never see storage documents or port errors. Each
//! method returns a domain [`Error`] ready to be rendered.

use async_trait::async_trait;

use crate::domain::{DocumentId, Error, Resource};

/// Create/read/update/delete for one resource kind.
#[async_trait]
pub trait ResourceCatalog<R: Resource>: Send + Sync {
    /// Persist a new entity, stamping both timestamps with the same instant.
    async fn create(&self, draft: R::Draft) -> Result<R, Error>;

    /// Return every stored entity.
    async fn list(&self) -> Result<Vec<R>, Error>;

    /// Fetch one entity by key.
    async fn fetch(&self, id: &DocumentId) -> Result<R, Error>;

    /// Apply a partial update and return the entity as stored afterwards.
    async fn update(&self, id: &DocumentId, patch: R::Patch) -> Result<R, Error>;

    /// Remove one entity.
    async fn delete(&self, id: &DocumentId) -> Result<(), Error>;
}
