//! In-memory document store using DashMap
//!
//! Stores each collection as a concurrent map of identifier to JSON fields.
//! Identifiers are v4 UUIDs in simple form. Data is lost on restart; this
//! backend exists for development and tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use uuid::Uuid;

use super::{DocumentStore, Fields};
use crate::types::{Collection, Result};

struct Entry {
    /// Insertion sequence, so field lookups return the oldest match like a natural-order scan
    seq: u64,
    fields: Fields,
}

/// Process-local document store
pub struct MemoryStore {
    /// One map per collection, indexed by `slot`
    collections: [DashMap<String, Entry>; 4],
    /// Counter for insertion order
    sequence: AtomicU64,
}

fn slot(collection: Collection) -> usize {
    match collection {
        Collection::Posts => 0,
        Collection::Comments => 1,
        Collection::Users => 2,
        Collection::Profiles => 3,
    }
}

impl MemoryStore {
    /// Create an empty store with all collections provisioned
    pub fn new() -> Self {
        Self {
            collections: Default::default(),
            sequence: AtomicU64::new(0),
        }
    }

    fn collection(&self, collection: Collection) -> &DashMap<String, Entry> {
        &self.collections[slot(collection)]
    }

    /// Number of documents in a collection
    #[cfg(test)]
    pub(crate) fn document_count(&self, collection: Collection) -> usize {
        self.collection(collection).len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: Collection, fields: Fields) -> Result<String> {
        let id = Uuid::new_v4().simple().to_string();
        let seq = self.sequence.fetch_add(1, Ordering::Relaxed);
        self.collection(collection)
            .insert(id.clone(), Entry { seq, fields });
        tracing::debug!(%collection, %id, "memory store insert");
        Ok(id)
    }

    async fn find_by_id(&self, collection: Collection, id: &str) -> Result<Option<Fields>> {
        Ok(self
            .collection(collection)
            .get(id)
            .map(|entry| entry.fields.clone()))
    }

    async fn find_one_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<(String, Fields)>> {
        let found = self
            .collection(collection)
            .iter()
            .filter(|entry| entry.value().fields.get(field).and_then(Value::as_str) == Some(value))
            .min_by_key(|entry| entry.value().seq)
            .map(|entry| (entry.key().clone(), entry.value().fields.clone()));
        Ok(found)
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let a = store
            .insert(Collection::Users, fields(json!({"username": "a"})))
            .await
            .unwrap();
        let b = store
            .insert(Collection::Users, fields(json!({"username": "b"})))
            .await
            .unwrap();
        assert!(!a.is_empty());
        assert_ne!(a, b);
        assert_eq!(store.document_count(Collection::Users), 2);
    }

    #[tokio::test]
    async fn collections_are_disjoint() {
        let store = MemoryStore::new();
        let id = store
            .insert(Collection::Posts, fields(json!({"title": "t"})))
            .await
            .unwrap();
        assert!(store.find_by_id(Collection::Posts, &id).await.unwrap().is_some());
        assert!(store.find_by_id(Collection::Comments, &id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_one_by_field_returns_oldest_match() {
        let store = MemoryStore::new();
        let first = store
            .insert(Collection::Profiles, fields(json!({"user_id": "u1", "age": 1})))
            .await
            .unwrap();
        for age in 2..6 {
            store
                .insert(Collection::Profiles, fields(json!({"user_id": "u1", "age": age})))
                .await
                .unwrap();
        }
        store
            .insert(Collection::Profiles, fields(json!({"user_id": "u2", "age": 9})))
            .await
            .unwrap();

        let (id, found) = store
            .find_one_by_field(Collection::Profiles, "user_id", "u1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(id, first);
        assert_eq!(found.get("age"), Some(&json!(1)));
        assert!(store
            .find_one_by_field(Collection::Profiles, "user_id", "nobody")
            .await
            .unwrap()
            .is_none());
    }
}
