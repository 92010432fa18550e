//! Application state shared across handlers.

use std::sync::Arc;

use crate::store::DocumentStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable; every clone shares one document store.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Create a new application state around `store`.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
