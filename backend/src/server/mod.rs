//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::{ServerConfig, ServerSettings};

#[cfg(feature = "metrics")]
pub(crate) use metrics::make_metrics;
#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::{configure, json_config};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over the resource handlers.
///
/// # Parameters
/// - `health_state`: shared probe state, marked ready once the listener is bound.
/// - `http_state`: resource services handed to every worker.
/// - `config`: bind address and optional metrics middleware.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: HttpState,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(http_state);
    let ServerConfig {
        bind_addr,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Wiring tests for the assembled application.

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use backend::test_support::in_memory_state;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn deps() -> AppDependencies {
        let health_state = HealthState::new();
        health_state.mark_ready();
        AppDependencies {
            health_state: web::Data::new(health_state),
            http_state: web::Data::new(in_memory_state().state),
        }
    }

    #[rstest]
    #[case("/")]
    #[case("/users/")]
    #[case("/items/")]
    #[case("/health/ready")]
    #[case("/health/live")]
    #[actix_web::test]
    async fn routes_are_mounted(#[case] uri: &str) {
        let app = test::init_service(build_app(deps())).await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK, "GET {uri}");
        assert!(res.headers().contains_key("trace-id"));
    }

    #[actix_web::test]
    async fn malformed_json_uses_the_shared_error_handler() {
        let app = test::init_service(build_app(deps())).await;
        let req = test::TestRequest::post()
            .uri("/items/")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], json!("validation_failed"));
    }

    #[cfg(debug_assertions)]
    #[actix_web::test]
    async fn openapi_document_is_served_in_debug_builds() {
        let app = test::init_service(build_app(deps())).await;
        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert!(body["paths"]["/items/{id}"].is_object());
    }
}
