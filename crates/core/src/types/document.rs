//! Schema-less documents.
//!
//! Stored entities are open field maps rather than fixed structs: users,
//! items, and orders carry whatever fields the client sent. The only checks
//! applied are presence checks using JavaScript truthiness, which is what the
//! API's clients expect.

use serde_json::{Map, Value};

/// Name of the identifier field on every stored document.
pub const ID_FIELD: &str = "_id";

/// An open, schema-less document.
pub type Document = Map<String, Value>;

/// Returns `true` if `value` is truthy under JavaScript rules.
///
/// `null`, `false`, `0`, and `""` are falsy. Arrays and objects are always
/// truthy, even when empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Required fields that were missing or falsy.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required fields: {}", .0.join(", "))]
pub struct MissingFields(pub Vec<String>);

/// Check that every field in `fields` is present and truthy.
///
/// # Errors
///
/// Returns [`MissingFields`] listing every offending field in the order given.
pub fn require_fields(doc: &Document, fields: &[&str]) -> Result<(), MissingFields> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|field| !doc.get(**field).is_some_and(is_truthy))
        .map(|field| (*field).to_owned())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingFields(missing))
    }
}
