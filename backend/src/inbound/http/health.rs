//! Liveness and readiness probes for orchestration and load balancers.
//!
//! Readiness flips once the listener is bound. The probe body also reports
//! whether the database connection was established, but a missing database
//! does not fail the probe: resource routes answer 503 on their own.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shared process health flags.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    database: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            database: AtomicBool::new(false),
        }
    }
}

/// Database connection as reported by the readiness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseStatus {
    Connected,
    Unavailable,
}

/// Body returned by both probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProbeBody {
    #[schema(example = "ok")]
    pub status: String,
    pub database: DatabaseStatus,
}

impl HealthState {
    /// Create a state that is live but not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Record whether the startup connection to the database succeeded.
    pub fn set_database_connected(&self, connected: bool) {
        self.database.store(connected, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn database_status(&self) -> DatabaseStatus {
        if self.database.load(Ordering::Acquire) {
            DatabaseStatus::Connected
        } else {
            DatabaseStatus::Unavailable
        }
    }

    fn probe_response(&self, probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(ProbeBody {
                status: if probe_ok { "ok" } else { "unavailable" }.to_owned(),
                database: self.database_status(),
            })
    }
}

/// Readiness probe. Returns 200 once the server is bound and 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = ProbeBody),
        (status = 503, description = "Server is not ready", body = ProbeBody)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    state.probe_response(state.is_ready())
}

/// Liveness probe. Returns 200 while the process is alive and 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive", body = ProbeBody),
        (status = 503, description = "Server is shutting down", body = ProbeBody)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    state.probe_response(state.is_alive())
}
