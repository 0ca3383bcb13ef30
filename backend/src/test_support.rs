//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Compiled for tests and when the `test-support` feature is enabled.

pub mod clock;

use std::sync::Arc;

use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryDocumentStore;

pub use clock::{MutableClock, fixture_timestamp};

/// Handles to the doubles behind an [`HttpState`].
pub struct StateFixture {
    pub state: HttpState,
    pub store: Arc<InMemoryDocumentStore>,
    pub clock: Arc<MutableClock>,
}

/// Build HTTP state over an empty in-memory store and a still clock.
///
/// # Examples
/// ```
/// use backend::test_support::in_memory_state;
///
/// let fixture = in_memory_state();
/// assert!(fixture.store.is_empty("items"));
/// ```
pub fn in_memory_state() -> StateFixture {
    let store = Arc::new(InMemoryDocumentStore::new());
    let clock = Arc::new(MutableClock::default());
    let state = HttpState::with_store(store.clone(), clock.clone());
    StateFixture {
        state,
        store,
        clock,
    }
}
