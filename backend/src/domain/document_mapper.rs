//! Mapping between validated payloads and stored documents.
//!
//! Timestamps are injected here so every adapter stores the same shape:
//! `created_at` and `updated_at` are written as native BSON datetimes, which
//! truncates them to millisecond precision. Values read back therefore match
//! what a create response reported.

use bson::{Bson, Document};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Resource;

/// Field holding the creation timestamp.
pub const CREATED_AT_FIELD: &str = "created_at";
/// Field holding the last-modification timestamp.
pub const UPDATED_AT_FIELD: &str = "updated_at";
/// Field holding the native document key.
pub const ID_FIELD: &str = "_id";

/// Failures raised while converting between payloads and documents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// A payload could not be encoded as a document.
    #[error("failed to encode {kind} document: {message}")]
    Encode { kind: &'static str, message: String },
    /// A stored document does not match the entity shape.
    #[error("stored {kind} document is malformed: {message}")]
    Decode { kind: &'static str, message: String },
}

fn encode<R: Resource, T: Serialize>(value: &T) -> Result<Document, MappingError> {
    bson::to_document(value).map_err(|err| MappingError::Encode {
        kind: R::LABEL,
        message: err.to_string(),
    })
}

/// Build the document stored for a new entity.
///
/// Both timestamps are set to `now`.
pub fn to_storage<R: Resource>(
    draft: &R::Draft,
    now: DateTime<Utc>,
) -> Result<Document, MappingError> {
    let mut document = encode::<R, _>(draft)?;
    document.remove(ID_FIELD);
    let stamp = Bson::DateTime(bson::DateTime::from_chrono(now));
    document.insert(CREATED_AT_FIELD, stamp.clone());
    document.insert(UPDATED_AT_FIELD, stamp);
    Ok(document)
}

/// Build the partial document for an update.
///
/// Returns `None` when the patch touches no fields, in which case no write
/// should happen and `updated_at` stays as it is.
pub fn to_storage_patch<R: Resource>(
    patch: &R::Patch,
    now: DateTime<Utc>,
) -> Result<Option<Document>, MappingError> {
    let mut document = encode::<R, _>(patch)?;
    document.remove(ID_FIELD);
    document.remove(CREATED_AT_FIELD);
    if document.is_empty() {
        return Ok(None);
    }
    document.insert(
        UPDATED_AT_FIELD,
        Bson::DateTime(bson::DateTime::from_chrono(now)),
    );
    Ok(Some(document))
}

/// Rebuild an entity from its stored document.
pub fn from_storage<R: Resource>(document: Document) -> Result<R, MappingError> {
    R::from_document(document).map_err(|err| MappingError::Decode {
        kind: R::LABEL,
        message: err.to_string(),
    })
}
