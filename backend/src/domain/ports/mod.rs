//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod document_store;
mod resource_catalog;

#[cfg(test)]
pub use document_store::MockDocumentStore;
pub use document_store::{DeleteOutcome, DocumentStore, DocumentStoreError, UpdateOutcome};
pub use resource_catalog::ResourceCatalog;
