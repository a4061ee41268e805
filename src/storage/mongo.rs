//! MongoDB document store
//!
//! Holds one long-lived client and a handle per collection. The driver pools
//! connections, so the store is shared by every handler behind an `Arc`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use super::{DocumentStore, Fields};
use crate::core::config::StorageConfig;
use crate::types::{Collection, Error, Result};

/// Document store backed by a MongoDB database
pub struct MongoStore {
    database: Database,
    collections: HashMap<Collection, mongodb::Collection<Document>>,
}

impl MongoStore {
    /// Build a client from the storage configuration and provision every collection handle.
    ///
    /// No round trip happens here; the driver connects lazily. Call `ping` to
    /// check reachability.
    pub async fn connect(config: &StorageConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.mongo_uri)
            .await
            .map_err(|e| Error::config(format!("Invalid MongoDB URI: {}", e)))?;
        let timeout = Duration::from_millis(config.connect_timeout_ms);
        options.app_name = Some(crate::NAME.to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)
            .map_err(|e| Error::config(format!("Failed to build MongoDB client: {}", e)))?;
        let database = client.database(&config.database);

        let collections = Collection::ALL
            .iter()
            .map(|&collection| (collection, database.collection::<Document>(collection.name())))
            .collect();

        tracing::info!(database = %config.database, "MongoDB collections provisioned");
        Ok(Self { database, collections })
    }

    fn collection(&self, collection: Collection) -> Result<&mongodb::Collection<Document>> {
        self.collections
            .get(&collection)
            .ok_or_else(|| Error::store(format!("Collection {} is not provisioned", collection)))
    }
}

/// Render a store-assigned `_id` as the opaque string clients see
fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Split a raw document into its identifier and remaining fields
fn split_document(mut document: Document) -> Result<(String, Fields)> {
    let id = document
        .remove("_id")
        .map(|id| id_to_string(&id))
        .ok_or_else(|| Error::store("Document without _id"))?;
    let fields = bson::from_document::<Fields>(document)
        .map_err(|e| Error::store(format!("Failed to decode document {}: {}", id, e)))?;
    Ok((id, fields))
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(&self, collection: Collection, fields: Fields) -> Result<String> {
        let document = bson::to_document(&fields)
            .map_err(|e| Error::invalid_input(format!("Unstorable document: {}", e)))?;
        let result = self.collection(collection)?.insert_one(document).await?;
        let id = id_to_string(&result.inserted_id);
        tracing::debug!(%collection, %id, "mongo insert");
        Ok(id)
    }

    async fn find_by_id(&self, collection: Collection, id: &str) -> Result<Option<Fields>> {
        // Only ObjectIds are ever issued; anything else cannot match.
        let Ok(oid) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let found = self
            .collection(collection)?
            .find_one(doc! { "_id": oid })
            .await?;
        found
            .map(|document| split_document(document).map(|(_, fields)| fields))
            .transpose()
    }

    async fn find_one_by_field(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
    ) -> Result<Option<(String, Fields)>> {
        let mut filter = Document::new();
        filter.insert(field, value);
        let found = self.collection(collection)?.find_one(filter).await?;
        found.map(split_document).transpose()
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mongo"
    }
}
