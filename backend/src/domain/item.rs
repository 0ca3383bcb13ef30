//! Item entity and its create/update payloads.

use bson::Document;
use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DocumentId, Resource};

/// Persisted inventory item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: DocumentId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating an item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
}

/// Validated partial update for an item.
///
/// `description: Some(None)` clears the stored description.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

impl ItemPatch {
    /// True when the patch touches no fields.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
    }
}

#[derive(Deserialize)]
struct StoredItem {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: f64,
    #[serde(default)]
    quantity: i64,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    updated_at: DateTime<Utc>,
}

impl From<StoredItem> for Item {
    fn from(value: StoredItem) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            description: value.description,
            price: value.price,
            quantity: value.quantity,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl Resource for Item {
    const COLLECTION: &'static str = "items";
    const LABEL: &'static str = "Item";

    type Draft = NewItem;
    type Patch = ItemPatch;

    fn from_document(document: Document) -> Result<Self, bson::de::Error> {
        bson::from_document::<StoredItem>(document).map(Self::from)
    }
}
