//! MongoDB persistence adapter.
//!
//! [`MongoDocumentStore`] implements the document store port over the
//! official driver. [`MongoSettings`] carries the connection configuration.
//! Driver types never leave this module: results are plain BSON documents
//! and failures are port errors.

mod mongo_document_store;
mod settings;

pub use mongo_document_store::MongoDocumentStore;
pub use settings::MongoSettings;
