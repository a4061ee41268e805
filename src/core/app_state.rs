//! Application State Management
//!
//! `AppState` owns every piece of shared state a handler can touch. It is
//! cloned into each request by axum; clones share the same store, board and
//! counters.

use std::sync::Arc;

use crate::core::config::Config;
use crate::storage::{DocumentStore, PostBoard, Repository};
use crate::system::RequestCounters;
use crate::types::{Record, Result};

/// Central application state holding all services and components
#[derive(Clone)]
pub struct AppState {
    /// Document store shared by all handlers
    pub store: Arc<dyn DocumentStore>,

    /// Integer-keyed posts served by update/delete
    pub board: Arc<PostBoard>,

    /// Per-endpoint request counters
    pub counters: Arc<RequestCounters>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create an AppState around a store, with a freshly seeded board and zeroed counters
    pub fn new(store: Arc<dyn DocumentStore>, config: Config) -> Result<Self> {
        Ok(Self {
            store,
            board: Arc::new(PostBoard::seeded()),
            counters: Arc::new(RequestCounters::new()?),
            config: Arc::new(config),
        })
    }

    /// Typed access to the collection holding `T`
    pub fn repository<T: Record>(&self) -> Repository<T> {
        Repository::new(self.store.clone())
    }
}
