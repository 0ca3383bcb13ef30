//! Items API handlers.
//!
//! ```text
//! POST /items/ {"name":"Widget","price":9.99}
//! GET /items/
//! GET /items/{id}
//! PUT /items/{id} {"quantity":5}
//! DELETE /items/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Item, ItemPatch, NewItem, Resource};
use crate::inbound::http::ApiResult;
use crate::inbound::http::message::MessageResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, not_null, parse_document_id, present, required,
};

const NAME: FieldName = FieldName::new("name");
const PRICE: FieldName = FieldName::new("price");
const QUANTITY: FieldName = FieldName::new("quantity");

/// Request body for `POST /items/`. `quantity` defaults to zero.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(required = true, example = "Widget")]
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(required = true, example = 9.99)]
    pub price: Option<f64>,
    #[schema(example = 0)]
    pub quantity: Option<i64>,
}

impl TryFrom<CreateItemRequest> for NewItem {
    type Error = Error;

    fn try_from(value: CreateItemRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(value.name, NAME)?,
            description: value.description,
            price: required(value.price, PRICE)?,
            quantity: value.quantity.unwrap_or_default(),
        })
    }
}

/// Request body for `PUT /items/{id}`. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    /// `null` clears the stored description.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub quantity: Option<Option<i64>>,
}

impl TryFrom<UpdateItemRequest> for ItemPatch {
    type Error = Error;

    fn try_from(value: UpdateItemRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: not_null(value.name, NAME)?,
            description: value.description,
            price: not_null(value.price, PRICE)?,
            quantity: not_null(value.quantity, QUANTITY)?,
        })
    }
}

/// Item as returned by every items endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    #[schema(example = "65a1b2c3d4e5f60718293a4b")]
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(value: Item) -> Self {
        let Item {
            id,
            name,
            description,
            price,
            quantity,
            created_at,
            updated_at,
        } = value;
        Self {
            id: id.encode(),
            name,
            description,
            price,
            quantity,
            created_at,
            updated_at,
        }
    }
}

/// Create an item.
#[utoipa::path(
    post,
    path = "/items/",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Created item", body = ItemResponse),
        (status = 422, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Database not available", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items/")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<CreateItemRequest>,
) -> ApiResult<web::Json<ItemResponse>> {
    let draft = NewItem::try_from(payload.into_inner())?;
    let item = state.items.create(draft).await?;
    Ok(web::Json(item.into()))
}

/// List every item.
#[utoipa::path(
    get,
    path = "/items/",
    responses(
        (status = 200, description = "Items", body = [ItemResponse]),
        (status = 503, description = "Database not available", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items/")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<ItemResponse>>> {
    let items = state.items.list().await?;
    Ok(web::Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// Fetch one item.
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = String, Path, description = "24-character hex item identifier")),
    responses(
        (status = 200, description = "Item", body = ItemResponse),
        (status = 400, description = "Invalid item ID", body = ErrorSchema),
        (status = 404, description = "Item not found", body = ErrorSchema),
        (status = 503, description = "Database not available", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = parse_document_id(&path, Item::LABEL)?;
    Ok(web::Json(state.items.fetch(&id).await?.into()))
}

/// Update the supplied fields of one item.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = String, Path, description = "24-character hex item identifier")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Updated item", body = ItemResponse),
        (status = 400, description = "Invalid item ID", body = ErrorSchema),
        (status = 404, description = "Item not found", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Database not available", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateItemRequest>,
) -> ApiResult<web::Json<ItemResponse>> {
    let id = parse_document_id(&path, Item::LABEL)?;
    let patch = ItemPatch::try_from(payload.into_inner())?;
    Ok(web::Json(state.items.update(&id, patch).await?.into()))
}

/// Delete one item.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = String, Path, description = "24-character hex item identifier")),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 400, description = "Invalid item ID", body = ErrorSchema),
        (status = 404, description = "Item not found", body = ErrorSchema),
        (status = 503, description = "Database not available", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_document_id(&path, Item::LABEL)?;
    state.items.delete(&id).await?;
    Ok(web::Json(MessageResponse::deleted(Item::LABEL)))
}
