//! Application Factory
//!
//! Builds the `AppState` from configuration, choosing the document store
//! backend.

use std::sync::Arc;

use crate::core::app_state::AppState;
use crate::core::config::{Config, StorageBackend};
use crate::storage::{DocumentStore, MemoryStore, MongoStore};
use crate::types::Result;

/// Create AppState based on configuration
///
/// For the mongo backend the server is pinged once. An unreachable server is
/// logged and tolerated: the service still starts and store-backed requests
/// answer 503 until the database comes back.
pub async fn create_app_state(config: Config) -> Result<AppState> {
    tracing::info!("Creating AppState with storage backend: {:?}", config.storage.backend);

    let store: Arc<dyn DocumentStore> = match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory document store; data is lost on restart");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::Mongo => {
            let store = MongoStore::connect(&config.storage).await?;
            match store.ping().await {
                Ok(()) => tracing::info!("MongoDB reachable, database {}", config.storage.database),
                Err(e) => tracing::warn!("MongoDB not reachable yet: {}", e),
            }
            Arc::new(store)
        }
    };

    tracing::info!("AppState created with {} store", store.backend_name());
    AppState::new(store, config)
}
