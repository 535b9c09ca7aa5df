use crate::store::TodoStore;
use std::sync::Arc;

/// Shared application state
///
/// The store is built once in `main` and handed to the router here.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: impl TodoStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
