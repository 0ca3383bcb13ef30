//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{DocumentStore, ResourceCatalog};
use crate::domain::{Item, ResourceService, User};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn ResourceCatalog<User>>,
    pub items: Arc<dyn ResourceCatalog<Item>>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        users: Arc<dyn ResourceCatalog<User>>,
        items: Arc<dyn ResourceCatalog<Item>>,
    ) -> Self {
        Self { users, items }
    }

    /// Back both resource kinds with services over one shared store.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemoryDocumentStore;
    /// use mockable::DefaultClock;
    ///
    /// let state = HttpState::with_store(
    ///     Arc::new(InMemoryDocumentStore::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = state;
    /// ```
    pub fn with_store(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            Arc::new(ResourceService::<User>::new(
                Arc::clone(&store),
                Arc::clone(&clock),
            )),
            Arc::new(ResourceService::<Item>::new(store, clock)),
        )
    }
}
