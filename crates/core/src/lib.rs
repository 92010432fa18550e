//! Golden Bowl Core - Shared types library.
//!
//! This crate provides the types shared by the API server and its tests:
//! - open, schema-less documents and the truthiness rules used to validate them
//! - store identifiers and collection names
//! - acknowledgments returned by store writes
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! driver, no HTTP. Store backends live in `golden-bowl-api`.
//!
//! # Modules
//!
//! - [`types`] - Documents, identifiers, collections, and write outcomes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
