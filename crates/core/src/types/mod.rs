//! Core types for Golden Bowl.
//!
//! This module provides type-safe wrappers for the concepts every handler and
//! store backend share.

pub mod ack;
pub mod collection;
pub mod document;
pub mod id;

pub use ack::{DeleteAck, InsertAck, UpdateOutcome, UpsertAck};
pub use collection::Collection;
pub use document::{Document, ID_FIELD, MissingFields, is_truthy, require_fields};
pub use id::{DocumentId, IdError};
