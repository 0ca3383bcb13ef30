//! Users API handlers.
//!
//! ```text
//! POST /users/ {"name":"Ada","email":"ada@example.com","age":36}
//! GET /users/
//! GET /users/{id}
//! PUT /users/{id} {"age":null}
//! DELETE /users/{id}
//! ```

use actix_web::{delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, Resource, User, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::message::MessageResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, not_null, parse_document_id, present, required,
};

const NAME: FieldName = FieldName::new("name");
const EMAIL: FieldName = FieldName::new("email");

/// Request body for `POST /users/`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(required = true)]
    pub name: Option<String>,
    #[schema(required = true)]
    pub email: Option<String>,
    pub age: Option<i64>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(value.name, NAME)?,
            email: required(value.email, EMAIL)?,
            age: value.age,
        })
    }
}

/// Request body for `PUT /users/{id}`. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    /// `null` clears the stored age.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub age: Option<Option<i64>>,
}

impl TryFrom<UpdateUserRequest> for UserPatch {
    type Error = Error;

    fn try_from(value: UpdateUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: not_null(value.name, NAME)?,
            email: not_null(value.email, EMAIL)?,
            age: value.age,
        })
    }
}

/// User as returned by every users endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "65a1b2c3d4e5f60718293a4b")]
    pub id: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    pub age: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id.encode(),
            name: value.name,
            email: value.email,
            age: value.age,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users/",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user", body = UserResponse),
        (status = 422, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Database not available", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let draft = NewUser::try_from(payload.into_inner())?;
    let user = state.users.create(draft).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// List every user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users/",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 503, description = "Database not available", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users/")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users.list().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "24-character hex user identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Invalid user ID", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "Database not available", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_document_id(&path, User::LABEL)?;
    let user = state.users.fetch(&id).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Update the supplied fields of one user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "24-character hex user identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Invalid user ID", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 422, description = "Validation failed", body = ErrorSchema),
        (status = 503, description = "Database not available", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_document_id(&path, User::LABEL)?;
    let patch = UserPatch::try_from(payload.into_inner())?;
    let user = state.users.update(&id, patch).await?;
    Ok(web::Json(UserResponse::from(user)))
}

/// Delete one user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "24-character hex user identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid user ID", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 503, description = "Database not available", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_document_id(&path, User::LABEL)?;
    state.users.delete(&id).await?;
    Ok(web::Json(MessageResponse::deleted(User::LABEL)))
}

#[cfg(test)]
mod tests;
