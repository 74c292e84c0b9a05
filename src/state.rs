//! Shared application state for all routes.

use std::sync::Arc;

use crate::store::AccountStore;

/// Handed to every handler through axum's `State` extractor.
///
/// Each router built from its own `AppState` is fully independent, so tests
/// can run several apps side by side with separate stores.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn AccountStore>,
}

impl AppState {
    pub fn new(store: impl AccountStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn from_shared(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn AccountStore {
        self.store.as_ref()
    }
}
