//! Shared handler state.

use crate::data::AssignmentStore;

/// State cloned into every request handler.
///
/// Holds configuration only; requests never share mutable data.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: AssignmentStore,
}

impl AppState {
    pub fn new(store: AssignmentStore) -> Self {
        Self { store }
    }
}
