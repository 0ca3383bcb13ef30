//! Document identifiers and their textual encoding.
//!
//! Documents are keyed by the database's native 12-byte ObjectId. Clients only
//! ever see the canonical 24-character lowercase hex rendering, so decoding a
//! path segment is the single place where malformed identifiers are rejected.

use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;

/// Number of hex characters in an encoded identifier.
pub const DOCUMENT_ID_LEN: usize = 24;

/// Reasons a textual identifier cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentIdError {
    /// The identifier was empty.
    #[error("document id must not be empty")]
    Empty,
    /// The identifier has the wrong number of characters.
    #[error("document id must be 24 characters, got {length}")]
    InvalidLength { length: usize },
    /// The identifier contains characters outside `[0-9a-fA-F]`.
    #[error("document id must contain only hexadecimal characters")]
    InvalidCharacters,
}

/// Native document key.
///
/// # Examples
/// ```
/// use backend::domain::DocumentId;
///
/// let id = DocumentId::decode("65a1b2c3d4e5f60718293a4b").expect("valid id");
/// assert_eq!(id.encode(), "65a1b2c3d4e5f60718293a4b");
/// assert!(DocumentId::decode("not-an-id").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Decode a textual identifier into a native key.
    pub fn decode(text: &str) -> Result<Self, DocumentIdError> {
        if text.is_empty() {
            return Err(DocumentIdError::Empty);
        }
        let length = text.chars().count();
        if length != DOCUMENT_ID_LEN {
            return Err(DocumentIdError::InvalidLength { length });
        }
        if !text.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DocumentIdError::InvalidCharacters);
        }
        ObjectId::parse_str(text)
            .map(Self)
            .map_err(|_| DocumentIdError::InvalidCharacters)
    }

    /// Canonical textual form (lowercase hex).
    pub fn encode(&self) -> String {
        self.0.to_hex()
    }

    /// Access the underlying ObjectId.
    pub fn as_object_id(&self) -> &ObjectId {
        &self.0
    }
}

impl From<ObjectId> for DocumentId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl From<DocumentId> for ObjectId {
    fn from(value: DocumentId) -> Self {
        value.0
    }
}

impl FromStr for DocumentId {
    type Err = DocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
