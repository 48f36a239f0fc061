use crate::config::ServerConfig;
use query::QueryEngine;
use std::sync::Arc;
use store::TextStore;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Content store (shared across requests)
    pub store: Arc<TextStore>,

    /// Query engine over the shared store
    pub engine: Arc<QueryEngine>,
}

impl ServerState {
    /// Create new server state with an empty store
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(TextStore::new());
        let engine = Arc::new(QueryEngine::new(store.clone()));

        Self {
            config: Arc::new(config),
            store,
            engine,
        }
    }
}
