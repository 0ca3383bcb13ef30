//! User entity and its create/update payloads.

use bson::Document;
use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DocumentId, Resource};

/// Persisted user.
///
/// ## Invariants
/// - `id` is assigned by the store at creation and never changes.
/// - `updated_at >= created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: DocumentId,
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i64>,
}

/// Validated partial update for a user.
///
/// `None` leaves a field untouched. For `age`, `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Option<i64>>,
}

impl UserPatch {
    /// True when the patch touches no fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}

#[derive(Deserialize)]
struct StoredUser {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    email: String,
    #[serde(default)]
    age: Option<i64>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl From<StoredUser> for User {
    fn from(value: StoredUser) -> Self {
        let StoredUser {
            id,
            name,
            email,
            age,
            created_at,
            updated_at,
        } = value;
        Self {
            id: id.into(),
            name,
            email,
            age,
            created_at,
            updated_at,
        }
    }
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    const LABEL: &'static str = "User";

    type Draft = NewUser;
    type Patch = UserPatch;

    fn from_document(document: Document) -> Result<Self, bson::de::Error> {
        bson::from_document::<StoredUser>(document).map(Self::from)
    }
}
