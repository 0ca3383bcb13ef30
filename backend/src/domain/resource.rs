//! Resource kinds stored as documents.
//!
//! Users and items are handled identically: each kind names its collection,
//! supplies a validated create payload (`Draft`) and a validated partial update
//! (`Patch`), and knows how to rebuild itself from a stored document.

use bson::Document;
use serde::Serialize;

/// A kind of entity persisted in its own document collection.
pub trait Resource: Sized + Send + Sync + 'static {
    /// Collection holding documents of this kind.
    const COLLECTION: &'static str;

    /// Singular, capitalised label used in client-facing messages.
    const LABEL: &'static str;

    /// Validated create payload. Every field is written verbatim.
    type Draft: Serialize + Send + Sync + 'static;

    /// Validated partial update. Absent fields must not serialise.
    type Patch: Serialize + Send + Sync + 'static;

    /// Rebuild the entity from a stored document, including its `_id`.
    fn from_document(document: Document) -> Result<Self, bson::de::Error>;
}
