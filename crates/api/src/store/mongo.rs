//! MongoDB-backed document store.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, Bson, doc, oid::ObjectId};
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection as MongoCollection};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tokio::sync::OnceCell;

use golden_bowl_core::{
    Collection, DeleteAck, Document, DocumentId, ID_FIELD, InsertAck, UpdateOutcome, UpsertAck,
};

use super::{DocumentStore, StoreError};
use crate::config::MongoConfig;

/// Store backed by a MongoDB cluster.
///
/// The client is created on first use and then held for the life of the
/// process. A failed creation is not cached, so the next request tries again.
pub struct MongoStore {
    uri: SecretString,
    database: String,
    client: OnceCell<Client>,
}

impl MongoStore {
    /// Create a store for the configured cluster without connecting.
    #[must_use]
    pub fn new(config: &MongoConfig) -> Self {
        Self {
            uri: config.connection_uri(),
            database: config.database.clone(),
            client: OnceCell::new(),
        }
    }

    async fn client(&self) -> Result<&Client, StoreError> {
        self.client
            .get_or_try_init(|| async {
                let mut options = ClientOptions::parse(self.uri.expose_secret())
                    .await
                    .map_err(StoreError::Unavailable)?;
                options.server_api = Some(
                    ServerApi::builder()
                        .version(ServerApiVersion::V1)
                        .strict(true)
                        .deprecation_errors(true)
                        .build(),
                );
                let client = Client::with_options(options).map_err(StoreError::Unavailable)?;
                tracing::info!(database = %self.database, "MongoDB client created");
                Ok::<_, StoreError>(client)
            })
            .await
    }

    async fn collection(
        &self,
        collection: Collection,
    ) -> Result<MongoCollection<bson::Document>, StoreError> {
        Ok(self
            .client()
            .await?
            .database(&self.database)
            .collection(collection.name()))
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn find(
        &self,
        collection: Collection,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let filter = to_bson_document(&filter)?;
        let documents: Vec<bson::Document> = self
            .collection(collection)
            .await?
            .find(filter)
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(document_to_json).collect())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        let filter = to_bson_document(&filter)?;
        let found = self.collection(collection).await?.find_one(filter).await?;
        Ok(found.map(document_to_json))
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<Option<Document>, StoreError> {
        let filter = doc! { "_id": object_id(id)? };
        let found = self.collection(collection).await?.find_one(filter).await?;
        Ok(found.map(document_to_json))
    }

    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<InsertAck, StoreError> {
        let document = to_bson_document(&document)?;
        let result = self
            .collection(collection)
            .await?
            .insert_one(document)
            .await?;

        Ok(InsertAck {
            acknowledged: true,
            inserted_id: bson_to_json(result.inserted_id),
        })
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        let filter = doc! { "_id": object_id(id)? };
        let mut set = to_bson_document(&fields)?;
        set.remove(ID_FIELD);

        let target = self.collection(collection).await?;

        // The server rejects an empty `$set`
        if set.is_empty() {
            let exists = target.find_one(filter).await?.is_some();
            return Ok(if exists {
                UpdateOutcome::Unchanged
            } else {
                UpdateOutcome::NotFound
            });
        }

        let result = target.update_one(filter, doc! { "$set": set }).await?;
        Ok(UpdateOutcome::from_counts(
            result.matched_count,
            result.modified_count,
        ))
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<DeleteAck, StoreError> {
        let filter = doc! { "_id": object_id(id)? };
        let result = self.collection(collection).await?.delete_one(filter).await?;

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }

    async fn upsert_by_key(
        &self,
        collection: Collection,
        key: &str,
        fields: Document,
    ) -> Result<UpsertAck, StoreError> {
        let mut set = to_bson_document(&fields)?;
        set.remove(ID_FIELD);

        let result = self
            .collection(collection)
            .await?
            .update_one(doc! { "_id": key }, doc! { "$set": set })
            .upsert(true)
            .await?;

        Ok(UpsertAck {
            acknowledged: true,
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.map(bson_to_json),
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client()
            .await?
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }
}

// =============================================================================
// BSON <-> JSON
// =============================================================================

fn object_id(id: &DocumentId) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id.as_str()).map_err(|e| StoreError::InvalidId(e.to_string()))
}

/// Convert a JSON document to BSON for writes and filters.
pub(crate) fn to_bson_document(document: &Document) -> Result<bson::Document, StoreError> {
    bson::to_document(document).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Convert a stored document to the JSON shape clients receive.
pub(crate) fn document_to_json(document: bson::Document) -> Document {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

/// Render a BSON value as plain JSON.
///
/// Object ids become their 24-hex string and dates become RFC 3339 strings,
/// rather than the `$oid`/`$date` extended-JSON wrappers.
pub(crate) fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map_or_else(|_| Value::from(dt.timestamp_millis()), Value::String),
        Bson::Document(document) => Value::Object(document_to_json(document)),
        Bson::Array(values) => Value::Array(values.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_object_ids_render_as_hex() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let json = document_to_json(doc! { "_id": oid, "name": "Miso Soup", "price": 9.5 });

        assert_eq!(
            Value::Object(json),
            json!({ "_id": "65a1f0c2e4b0a1b2c3d4e5f6", "name": "Miso Soup", "price": 9.5 })
        );
    }

    #[test]
    fn test_nested_values_are_converted() {
        let oid = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let json = document_to_json(doc! {
            "items": [ { "itemId": oid, "qty": 2_i32 } ],
            "createdAt": bson::DateTime::from_millis(0),
        });

        assert_eq!(
            Value::Object(json),
            json!({
                "items": [ { "itemId": "65a1f0c2e4b0a1b2c3d4e5f6", "qty": 2 } ],
                "createdAt": "1970-01-01T00:00:00Z"
            })
        );
    }

    #[test]
    fn test_json_filters_convert_to_bson() {
        let filter = json!({ "email": "a@b.c", "role": "admin" });
        let Value::Object(filter) = filter else {
            unreachable!()
        };

        let bson = to_bson_document(&filter).unwrap();
        assert_eq!(bson.get_str("email").unwrap(), "a@b.c");
        assert_eq!(bson.get_str("role").unwrap(), "admin");
    }

    #[test]
    fn test_document_id_converts_to_object_id() {
        let id = DocumentId::parse("65A1F0C2E4B0A1B2C3D4E5F6").unwrap();
        assert_eq!(object_id(&id).unwrap().to_hex(), "65a1f0c2e4b0a1b2c3d4e5f6");
    }

    #[tokio::test]
    async fn test_unusable_cluster_reports_unavailable() {
        // SRV URIs may not carry a port, so the driver rejects this before any lookup
        let store = MongoStore::new(&MongoConfig {
            user: "app".to_string(),
            password: SecretString::from("secret"),
            cluster: "cluster0.example.net:27017".to_string(),
            app_name: "golden-bowl".to_string(),
            database: "golden_bowl".to_string(),
        });

        assert!(matches!(store.ping().await, Err(StoreError::Unavailable(_))));
        assert!(matches!(
            store.find(Collection::Items, Document::new()).await,
            Err(StoreError::Unavailable(_))
        ));
    }
}
