//! Blog Service - CRUD over posts, comments, users and profiles
//!
//! An HTTP service backed by a document store, with an in-memory board of
//! integer-keyed posts and per-endpoint request counters on the side.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;
pub mod types;

// Main functional modules
pub mod api;
pub mod storage;
pub mod system;

// Re-export commonly used items for convenience
pub use crate::core::{AppState, Config};
pub use crate::types::{Error, Result};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
