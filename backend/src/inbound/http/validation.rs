//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs accept every field as optional so that shape problems are
//! reported through the domain [`Error`] rather than a framework message.
//! These helpers turn the wire values into validated domain values.

use actix_web::HttpRequest;
use actix_web::error::JsonPayloadError;
use serde::{Deserialize, Deserializer};
use serde_json::json;
use tracing::debug;

use crate::domain::{DocumentId, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    NullField,
    InvalidIdentifier,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::NullField => "null_field",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::validation_failed(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn null_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must not be null"))
        .with_code(ErrorCode::NullField)
}

/// Require a field that the wire format lets clients omit.
pub(crate) fn required<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Accept an omitted field but reject an explicit `null`.
///
/// Used for patch fields whose stored value may not be cleared.
pub(crate) fn not_null<T>(value: Option<Option<T>>, field: FieldName) -> Result<Option<T>, Error> {
    match value {
        None => Ok(None),
        Some(None) => Err(null_field_error(field)),
        Some(Some(inner)) => Ok(Some(inner)),
    }
}

/// Decode a path identifier, naming the resource kind in the message.
pub(crate) fn parse_document_id(raw: &str, label: &str) -> Result<DocumentId, Error> {
    DocumentId::decode(raw).map_err(|err| {
        Error::invalid_identifier(format!("Invalid {} ID", label.to_lowercase())).with_details(
            json!({
                "field": "id",
                "value": raw,
                "reason": err.to_string(),
                "code": ErrorCode::InvalidIdentifier.as_str(),
            }),
        )
    })
}

/// Deserialise a field so that an explicit `null` differs from an omission.
///
/// Pair with `#[serde(default)]`: an absent field stays `None`, `null`
/// becomes `Some(None)` and a value becomes `Some(Some(value))`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Map JSON extractor failures onto validation errors.
///
/// Covers bodies that are not JSON, carry the wrong content type or hold
/// wrongly typed fields.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    Error::validation_failed("request body is not a valid JSON object")
        .with_details(json!({
            "reason": err.to_string(),
            "code": ErrorCode::InvalidBody.as_str(),
        }))
        .into()
}
