//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod items;
pub mod message;
pub mod root;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// JSON extractor configuration shared by every resource route.
///
/// Body errors surface as `validation_failed` (422) envelopes.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(validation::json_error_handler)
}

/// Register the welcome route and both resource collections.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::{configure, json_config};
///
/// let app = App::new().app_data(json_config()).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::welcome)
        .service(users::create_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(items::create_item)
        .service(items::list_items)
        .service(items::get_item)
        .service(items::update_item)
        .service(items::delete_item);
}
