//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction.

use std::sync::Arc;

use crate::server::data::course::CourseStore;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: the store sits behind an `Arc` and backends share their connection
/// pools internally.
#[derive(Clone)]
pub struct AppState {
    /// Course store selected at startup from the database URL.
    pub store: Arc<dyn CourseStore>,
}

impl AppState {
    /// Creates a new application state with the provided store.
    ///
    /// # Arguments
    /// - `store` - Connected course store
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }
}
