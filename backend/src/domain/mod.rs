//! Domain primitives, resource kinds and the use-case service.
//!
//! Purpose: Define strongly typed entities used by the HTTP and persistence
//! adapters, the ports that separate them, and the generic service that
//! drives create/read/update/delete for every resource kind.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - DocumentId: native document key and its textual encoding.
//! - User / Item: persisted entities with their drafts and patches.
//! - ResourceService: port-backed use cases for one resource kind.

pub mod document_id;
pub mod document_mapper;
pub mod error;
pub mod item;
pub mod ports;
pub mod resource;
pub mod resource_service;
pub mod trace_id;
pub mod user;

pub use self::document_id::{DOCUMENT_ID_LEN, DocumentId, DocumentIdError};
pub use self::document_mapper::MappingError;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::item::{Item, ItemPatch, NewItem};
pub use self::resource::Resource;
pub use self::resource_service::ResourceService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserPatch};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Item not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
