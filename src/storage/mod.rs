//! Storage layer for the blog service
//!
//! Two kinds of state live here:
//! - the document store, an abstraction over an external database holding the
//!   posts, comments, users and profiles collections
//! - the post board, an in-memory map of integer-keyed posts that serves the
//!   update and delete endpoints
//!
//! Document data crosses the `DocumentStore` boundary as a JSON object map so
//! backends stay free to pick their own wire format. Typed access goes through
//! `Repository`.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::types::{Collection, Result};

/// Document fields as they cross the store boundary, without the identifier
pub type Fields = Map<String, Value>;

/// Trait for document store implementations
///
/// Identifiers are assigned by the store on insert and never change. A lookup
/// with an identifier the backend could never have issued is a miss, not an
/// error.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document and return its assigned identifier
    async fn insert(&self, collection: Collection, fields: Fields) -> Result<String>;

    /// Get a document by identifier
    async fn find_by_id(&self, collection: Collection, id: &str) -> Result<Option<Fields>>;

    /// Get the first document whose string `field` equals `value`, with its identifier
    async fn find_one_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<(String, Fields)>>;

    /// Check that the backend is reachable
    async fn ping(&self) -> Result<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Process-local store (DashMap per collection)
pub mod memory;

/// MongoDB-backed store
pub mod mongo;

/// Typed access over a `DocumentStore`
pub mod repository;

/// In-memory integer-keyed post board
pub mod board;

pub use board::PostBoard;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use repository::Repository;
