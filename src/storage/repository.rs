//! Typed repository over a `DocumentStore`

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use super::{DocumentStore, Fields};
use crate::types::{Error, Record, Result, Stored};

/// Typed view of one collection
///
/// Converts records to and from the store's field maps and turns misses into
/// `Error::NotFound` carrying the record's message.
pub struct Repository<T: Record> {
    store: Arc<dyn DocumentStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Repository<T> {
    /// Create a repository for `T` on the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Insert a record and return it with its assigned identifier
    pub async fn create(&self, record: T) -> Result<Stored<T>> {
        let fields = to_fields(&record)?;
        let id = self.store.insert(T::COLLECTION, fields).await?;
        tracing::info!(collection = %T::COLLECTION, %id, "record created");
        Ok(Stored { id, record })
    }

    /// Read a record by identifier
    pub async fn get(&self, id: &str) -> Result<Stored<T>> {
        match self.store.find_by_id(T::COLLECTION, id).await? {
            Some(fields) => Ok(Stored {
                id: id.to_string(),
                record: from_fields(id, fields)?,
            }),
            None => {
                tracing::debug!(collection = %T::COLLECTION, %id, "record not found");
                Err(Error::not_found(T::NOT_FOUND))
            }
        }
    }

    /// Read the first record whose `field` equals `value`
    pub async fn find_by(&self, field: &str, value: &str) -> Result<Stored<T>> {
        match self.store.find_one_by_field(T::COLLECTION, field, value).await? {
            Some((id, fields)) => {
                let record = from_fields(&id, fields)?;
                Ok(Stored { id, record })
            }
            None => {
                tracing::debug!(collection = %T::COLLECTION, field, value, "no record matches");
                Err(Error::not_found(T::NOT_FOUND))
            }
        }
    }
}

fn to_fields<T: Record>(record: &T) -> Result<Fields> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) => Err(Error::invalid_input(format!(
            "{} record is not a JSON object",
            T::COLLECTION
        ))),
        Err(e) => Err(Error::invalid_input(e.to_string())),
    }
}

fn from_fields<T: Record>(id: &str, fields: Fields) -> Result<T> {
    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        tracing::error!(collection = %T::COLLECTION, %id, error = %e, "stored document does not match its schema");
        Error::store(format!("Undecodable {} document {}: {}", T::COLLECTION, id, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::types::{Collection, Comment, Post, Profile};
    use proptest::prelude::*;
    use serde_json::json;

    fn memory() -> Arc<dyn DocumentStore> {
        Arc::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn get_returns_created_record() {
        let posts = Repository::<Post>::new(memory());
        let post = Post {
            title: "Third post".to_string(),
            content: "Body".to_string(),
            user_id: "u1".to_string(),
        };
        let created = posts.create(post.clone()).await.unwrap();
        let read = posts.get(&created.id).await.unwrap();
        assert_eq!(read, created);
        assert_eq!(read.record, post);
    }

    #[tokio::test]
    async fn miss_carries_record_message() {
        let comments = Repository::<Comment>::new(memory());
        match comments.get("never-issued").await {
            Err(Error::NotFound(msg)) => assert_eq!(msg, "Comment not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn find_by_matches_user_id_field() {
        let store = memory();
        let profiles = Repository::<Profile>::new(store.clone());
        let profile = Profile {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            age: 30,
            user_id: "u1".to_string(),
        };
        let created = profiles.create(profile).await.unwrap();
        assert_eq!(profiles.find_by("user_id", "u1").await.unwrap(), created);
        assert!(matches!(
            profiles.find_by("user_id", "u2").await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn schema_mismatch_is_a_store_error() {
        let store = memory();
        let mut fields = Fields::new();
        fields.insert("title".to_string(), json!(42));
        let id = store.insert(Collection::Posts, fields).await.unwrap();
        let posts = Repository::<Post>::new(store);
        assert!(matches!(posts.get(&id).await, Err(Error::Store(_))));
    }

    proptest! {
        #[test]
        fn read_after_create_returns_submitted_fields(
            title in ".*",
            content in ".*",
            user_id in "[a-z0-9]{1,12}",
        ) {
            let posts = Repository::<Post>::new(memory());
            let post = Post { title, content, user_id };
            let (created, read) = tokio_test::block_on(async {
                let created = posts.create(post.clone()).await.unwrap();
                let read = posts.get(&created.id).await.unwrap();
                (created, read)
            });
            prop_assert!(!created.id.is_empty());
            prop_assert_eq!(read.record, post);
        }
    }
}
