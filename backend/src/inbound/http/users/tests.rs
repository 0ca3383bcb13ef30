//! Tests for users API handlers.

use super::*;
use crate::inbound::http::test_utils::test_app;
use crate::outbound::memory::UnavailableDocumentStore;
use crate::test_support::{MutableClock, in_memory_state};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

async fn call(
    state: HttpState,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(state)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

fn ada() -> Value {
    json!({"name": "Ada Lovelace", "email": "ada@example.com", "age": 36})
}

#[actix_web::test]
async fn created_user_round_trips_through_get() {
    let fixture = in_memory_state();
    let app = actix_test::init_service(test_app(fixture.state)).await;

    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/users/")
            .set_json(ada())
            .to_request(),
    )
    .await;
    let id = created["id"].as_str().expect("id string");
    assert_eq!(id.len(), 24);
    assert_eq!(created["created_at"], created["updated_at"]);
    assert_eq!(created["created_at"], "2026-01-01T00:00:00Z");

    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/users/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched, created);
}

#[rstest]
#[case(json!({"email": "ada@example.com"}), "name")]
#[case(json!({"name": "Ada"}), "email")]
#[case(json!({"name": null, "email": "ada@example.com"}), "name")]
#[actix_web::test]
async fn create_rejects_missing_required_fields(#[case] body: Value, #[case] field: &str) {
    let fixture = in_memory_state();
    let (status, value) = call(
        fixture.state,
        actix_test::TestRequest::post().uri("/users/").set_json(body),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["code"], "validation_failed");
    assert_eq!(value["details"]["field"], field);
    assert_eq!(value["details"]["code"], "missing_field");
    assert!(fixture.store.is_empty("users"));
}

#[actix_web::test]
async fn create_rejects_wrongly_typed_body() {
    let fixture = in_memory_state();
    let (status, value) = call(
        fixture.state,
        actix_test::TestRequest::post()
            .uri("/users/")
            .set_json(json!({"name": "Ada", "email": "ada@example.com", "age": "old"})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["details"]["code"], "invalid_body");
}

#[actix_web::test]
async fn update_clears_age_and_keeps_other_fields() {
    let fixture = in_memory_state();
    let clock = Arc::clone(&fixture.clock);
    let app = actix_test::init_service(test_app(fixture.state)).await;
    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/users/")
            .set_json(ada())
            .to_request(),
    )
    .await;
    let id = created["id"].as_str().expect("id string");
    clock.advance_seconds(60);

    let updated: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/users/{id}"))
            .set_json(json!({"age": null}))
            .to_request(),
    )
    .await;

    assert_eq!(updated["age"], Value::Null);
    assert_eq!(updated["email"], "ada@example.com");
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["updated_at"], "2026-01-01T00:01:00Z");
}

#[actix_web::test]
async fn update_rejects_null_email() {
    let fixture = in_memory_state();
    let (status, value) = call(
        fixture.state,
        actix_test::TestRequest::put()
            .uri("/users/65a1b2c3d4e5f60718293a4b")
            .set_json(json!({"email": null})),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(value["details"]["code"], "null_field");
    assert_eq!(value["details"]["field"], "email");
}

#[rstest]
#[case::get(actix_test::TestRequest::get())]
#[case::put(actix_test::TestRequest::put().set_json(json!({"name": "Ada"})))]
#[case::delete(actix_test::TestRequest::delete())]
#[actix_web::test]
async fn malformed_identifier_is_bad_request(#[case] request: actix_test::TestRequest) {
    let fixture = in_memory_state();
    let (status, value) = call(fixture.state, request.uri("/users/not-a-valid-id")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["code"], "invalid_identifier");
    assert_eq!(value["message"], "Invalid user ID");
    assert!(value["traceId"].is_string());
}

#[actix_web::test]
async fn unknown_identifier_is_not_found() {
    let fixture = in_memory_state();
    let (status, value) = call(
        fixture.state,
        actix_test::TestRequest::get().uri("/users/65a1b2c3d4e5f60718293a4b"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value["message"], "User not found");
}

#[actix_web::test]
async fn delete_confirms_then_reports_missing() {
    let fixture = in_memory_state();
    let app = actix_test::init_service(test_app(fixture.state)).await;
    let created: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/users/")
            .set_json(ada())
            .to_request(),
    )
    .await;
    let uri = format!("/users/{}", created["id"].as_str().expect("id string"));

    let first = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(first).await;
    assert_eq!(body, json!({"message": "User deleted successfully"}));

    let second = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete().uri(&uri).to_request(),
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_returns_empty_array_for_empty_collection() {
    let fixture = in_memory_state();
    let (status, value) = call(fixture.state, actix_test::TestRequest::get().uri("/users/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!([]));
}

#[rstest]
#[case::create(actix_test::TestRequest::post().uri("/users/").set_json(ada()))]
#[case::list(actix_test::TestRequest::get().uri("/users/"))]
#[case::fetch(actix_test::TestRequest::get().uri("/users/65a1b2c3d4e5f60718293a4b"))]
#[case::update(
    actix_test::TestRequest::put()
        .uri("/users/65a1b2c3d4e5f60718293a4b")
        .set_json(json!({"name": "Grace"}))
)]
#[case::delete(actix_test::TestRequest::delete().uri("/users/65a1b2c3d4e5f60718293a4b"))]
#[actix_web::test]
async fn disconnected_store_yields_service_unavailable(#[case] request: actix_test::TestRequest) {
    let state = HttpState::with_store(
        Arc::new(UnavailableDocumentStore),
        Arc::new(MutableClock::default()),
    );
    let (status, value) = call(state, request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(value["code"], "service_unavailable");
    assert_eq!(value["message"], "Database not available");
}

#[actix_web::test]
async fn malformed_id_is_rejected_before_the_store_is_consulted() {
    let state = HttpState::with_store(
        Arc::new(UnavailableDocumentStore),
        Arc::new(MutableClock::default()),
    );
    let (status, value) = call(
        state,
        actix_test::TestRequest::get().uri("/users/not-an-object-id"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["code"], "invalid_identifier");
    assert_eq!(value["message"], "Invalid user ID");
}
