//! Application state for the earning calculator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::Catalog;

/// Shared application state.
///
/// Holds the reference catalog, read-only for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates a new application state owning the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Creates a new application state sharing an already loaded catalog.
    pub fn shared(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Returns a reference to the reference catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
