//! Backend entry-point: connects to MongoDB and serves the resource API.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::ports::DocumentStore;
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::UnavailableDocumentStore;
use backend::outbound::persistence::{MongoDocumentStore, MongoSettings};
use server::{ServerConfig, ServerSettings, create_server};

const APP_NAME: &str = "inventory-backend";

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let server_settings = ServerSettings::load_from_iter([OsString::from(APP_NAME)])
        .map_err(|e| std::io::Error::other(format!("server settings: {e}")))?;
    let mongo_settings = MongoSettings::load_from_iter([OsString::from(APP_NAME)])
        .map_err(|e| std::io::Error::other(format!("MongoDB settings: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let mongo = match MongoDocumentStore::connect(&mongo_settings).await {
        Ok(store) => Some(Arc::new(store)),
        Err(error) => {
            warn!(
                %error,
                uri = %mongo_settings.redacted_uri(),
                "MongoDB unreachable; resource routes will answer 503"
            );
            None
        }
    };
    health_state.set_database_connected(mongo.is_some());

    let store: Arc<dyn DocumentStore> = match &mongo {
        Some(store) => store.clone(),
        None => Arc::new(UnavailableDocumentStore),
    };
    let http_state = HttpState::with_store(store, Arc::new(DefaultClock));

    let config = ServerConfig::from(&server_settings);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::make_metrics()?));

    let result = create_server(health_state.clone(), http_state, config)?.await;

    health_state.mark_unhealthy();
    if let Some(store) = mongo {
        store.shutdown().await;
    }
    info!("server stopped");
    result
}
