//! Shared world for resource API behaviour tests.
//!
//! Requests run in-process through `actix_web::test` on a `SystemRunner`
//! owned by the world, so steps stay synchronous. Documents persist across
//! steps because every request is served from the same `HttpState`.

use std::cell::RefCell;
use std::sync::Arc;

use actix_rt::{System, SystemRunner};
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use backend::Trace;
use backend::inbound::http::state::HttpState;
use backend::inbound::http::{configure, json_config};
use backend::outbound::memory::UnavailableDocumentStore;
use backend::test_support::{MutableClock, StateFixture, in_memory_state};
use serde_json::Value;

pub(crate) struct ApiWorld {
    runner: SystemRunner,
    fixture: StateFixture,
    state: RefCell<HttpState>,
    pub(crate) last_status: RefCell<Option<u16>>,
    pub(crate) last_body: RefCell<Option<Value>>,
    /// Body of the most recent successful create.
    pub(crate) created: RefCell<Option<Value>>,
}

impl ApiWorld {
    pub(crate) fn new() -> Self {
        let fixture = in_memory_state();
        let state = RefCell::new(fixture.state.clone());
        Self {
            runner: System::new(),
            fixture,
            state,
            last_status: RefCell::new(None),
            last_body: RefCell::new(None),
            created: RefCell::new(None),
        }
    }

    pub(crate) fn clock(&self) -> &MutableClock {
        &self.fixture.clock
    }

    /// Route every following request to a store with no connection.
    pub(crate) fn disconnect(&self) {
        self.state.replace(HttpState::with_store(
            Arc::new(UnavailableDocumentStore),
            self.fixture.clock.clone(),
        ));
    }

    pub(crate) fn send(&self, request: TestRequest) {
        let state = self.state.borrow().clone();
        let (status, body) = self.runner.block_on(async move {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .app_data(json_config())
                    .wrap(Trace)
                    .configure(configure),
            )
            .await;
            let response = test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let body: Value = test::read_body_json(response).await;
            (status, body)
        });
        self.last_status.replace(Some(status));
        self.last_body.replace(Some(body));
    }

    /// Send a create request and remember the entity on success.
    pub(crate) fn create(&self, collection: &str, payload: Value) {
        self.send(
            TestRequest::post()
                .uri(&format!("/{collection}/"))
                .set_json(payload),
        );
        if *self.last_status.borrow() == Some(200) {
            self.created.replace(self.last_body.borrow().clone());
        }
    }

    /// URI of the entity remembered by [`ApiWorld::create`].
    pub(crate) fn created_uri(&self, collection: &str) -> String {
        let created = self.created.borrow();
        let id = created
            .as_ref()
            .and_then(|body| body.get("id"))
            .and_then(Value::as_str)
            .expect("created entity id");
        format!("/{collection}/{id}")
    }

    pub(crate) fn body(&self) -> Value {
        self.last_body.borrow().clone().expect("response body")
    }

    pub(crate) fn created_body(&self) -> Value {
        self.created.borrow().clone().expect("created entity")
    }
}
