//! In-process document store.
//!
//! Mirrors the observable behavior of [`super::MongoStore`]: insertion-ordered
//! collections, store-generated object ids, `$set`-style merges, and
//! upserts keyed on `_id`. Each operation holds the lock for its whole
//! duration, so single-document writes are atomic and the last writer wins.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use tokio::sync::RwLock;

use golden_bowl_core::{
    Collection, DeleteAck, Document, DocumentId, ID_FIELD, InsertAck, UpdateOutcome, UpsertAck,
};

use super::{DocumentStore, StoreError};

/// Store holding every collection in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn has_id(document: &Document, id: &str) -> bool {
    document.get(ID_FIELD).and_then(Value::as_str) == Some(id)
}

/// Apply `fields` to `document`, returning whether anything changed.
fn merge(document: &mut Document, fields: Document) -> bool {
    let mut modified = false;
    for (key, value) in fields {
        if key == ID_FIELD {
            continue;
        }
        if document.get(&key) != Some(&value) {
            document.insert(key, value);
            modified = true;
        }
    }
    modified
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find(
        &self,
        collection: Collection,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches(document, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| matches(document, &filter))
                .cloned()
        }))
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| has_id(document, id.as_str()))
                .cloned()
        }))
    }

    async fn insert_one(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<InsertAck, StoreError> {
        let inserted_id = document
            .entry(ID_FIELD)
            .or_insert_with(|| Value::String(ObjectId::new().to_hex()))
            .clone();

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();
        if documents.iter().any(|d| d.get(ID_FIELD) == Some(&inserted_id)) {
            return Err(StoreError::DuplicateKey {
                collection,
                id: inserted_id.to_string(),
            });
        }
        documents.push(document);

        Ok(InsertAck {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(document) = collections
            .get_mut(&collection)
            .and_then(|documents| documents.iter_mut().find(|d| has_id(d, id.as_str())))
        else {
            return Ok(UpdateOutcome::NotFound);
        };

        Ok(if merge(document, fields) {
            UpdateOutcome::Modified
        } else {
            UpdateOutcome::Unchanged
        })
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<DeleteAck, StoreError> {
        let mut collections = self.collections.write().await;
        let deleted_count = collections
            .get_mut(&collection)
            .and_then(|documents| {
                let position = documents.iter().position(|d| has_id(d, id.as_str()))?;
                documents.remove(position);
                Some(1)
            })
            .unwrap_or(0);

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn upsert_by_key(
        &self,
        collection: Collection,
        key: &str,
        fields: Document,
    ) -> Result<UpsertAck, StoreError> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        if let Some(document) = documents.iter_mut().find(|d| has_id(d, key)) {
            let modified = merge(document, fields);
            return Ok(UpsertAck {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(modified),
                upserted_id: None,
            });
        }

        let mut document = Document::new();
        document.insert(ID_FIELD.to_owned(), Value::String(key.to_owned()));
        merge(&mut document, fields);
        documents.push(document);

        Ok(UpsertAck {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(Value::String(key.to_owned())),
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
