//! Service welcome route.

use actix_web::{get, web};

use crate::inbound::http::message::MessageResponse;

pub const WELCOME_MESSAGE: &str = "Welcome to the Inventory API";

/// Greet clients at the service root.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message", body = MessageResponse)),
    tags = ["root"],
    operation_id = "welcome"
)]
#[get("/")]
pub async fn welcome() -> web::Json<MessageResponse> {
    web::Json(MessageResponse::new(WELCOME_MESSAGE))
}
