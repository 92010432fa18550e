//! Document store access.
//!
//! Handlers talk to the store through the [`DocumentStore`] trait so the
//! backend can be chosen at startup:
//!
//! - [`MongoStore`] - hosted MongoDB cluster (production)
//! - [`MemoryStore`] - process-local collections (local development, tests)
//!
//! Every operation touches a single document or a single collection scan and
//! is awaited to completion. There is no retry, timeout, or cross-collection
//! transaction; concurrent writes to one document resolve as last write wins.

mod memory;
mod mongo;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use golden_bowl_core::{
    Collection, DeleteAck, Document, DocumentId, InsertAck, UpdateOutcome, UpsertAck,
};

use crate::config::StoreConfig;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An identifier could not be converted to the store's native form.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The database driver reported a failure (connectivity, server error).
    #[error("database error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// A document could not be converted between JSON and the store format.
    #[error("document conversion failed: {0}")]
    Serialization(String),

    /// An insert reused an `_id` already present in the collection.
    #[error("duplicate key in {collection}: {id}")]
    DuplicateKey { collection: Collection, id: String },

    /// No client could be created for the configured cluster.
    #[error("store unavailable: {0}")]
    Unavailable(#[source] mongodb::error::Error),
}

/// Per-collection operation primitives.
///
/// Documents are open JSON maps; filters match documents whose fields equal
/// every filter entry exactly.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// Return every document matching `filter`, in store order.
    async fn find(
        &self,
        collection: Collection,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError>;

    /// Return the first document matching `filter`.
    async fn find_one(
        &self,
        collection: Collection,
        filter: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Return the document with identifier `id`.
    async fn find_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<Option<Document>, StoreError>;

    /// Insert `document`, generating `_id` when it has none.
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<InsertAck, StoreError>;

    /// Merge `fields` into the document with identifier `id`.
    ///
    /// Fields not named are left untouched. `_id` is never rewritten.
    async fn update_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError>;

    /// Remove the document with identifier `id`, if any.
    async fn delete_by_id(
        &self,
        collection: Collection,
        id: &DocumentId,
    ) -> Result<DeleteAck, StoreError>;

    /// Create the document whose `_id` is `key`, or merge `fields` into it.
    ///
    /// Reusing `key` on every write keeps at most one such document, since
    /// `_id` is unique within a collection.
    async fn upsert_by_key(
        &self,
        collection: Collection,
        key: &str,
        fields: Document,
    ) -> Result<UpsertAck, StoreError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Create the store selected by configuration.
///
/// Never connects: the MongoDB client is created on first use so that an
/// unreachable cluster does not keep the HTTP listener from starting.
#[must_use]
pub fn from_config(config: &StoreConfig) -> Arc<dyn DocumentStore> {
    match config {
        StoreConfig::MongoDb(mongo) => Arc::new(MongoStore::new(mongo)),
        StoreConfig::Memory => Arc::new(MemoryStore::new()),
    }
}
