//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every resource route, the welcome route and the health probes
//! - **Schemas**: request and response bodies plus the error envelope
//!   wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep domain types
//!   free of utoipa derives
//!
//! The generated specification is served by Swagger UI in debug builds.

use crate::inbound::http::health::{DatabaseStatus, ProbeBody};
use crate::inbound::http::items::{CreateItemRequest, ItemResponse, UpdateItemRequest};
use crate::inbound::http::message::MessageResponse;
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        description = "Create, read, update and delete users and items."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::root::welcome,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateUserRequest,
        UpdateUserRequest,
        UserResponse,
        CreateItemRequest,
        UpdateItemRequest,
        ItemResponse,
        MessageResponse,
        ProbeBody,
        DatabaseStatus,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "root", description = "Service welcome"),
        (name = "users", description = "User documents"),
        (name = "items", description = "Inventory item documents"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
