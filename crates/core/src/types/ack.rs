//! Acknowledgments returned by store writes.
//!
//! These serialize in camelCase because they are sent to clients verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Acknowledgment of a single-document insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    /// Identifier of the new document, generated by the store unless the
    /// client supplied one.
    pub inserted_id: Value,
}

/// Acknowledgment of a single-document delete.
///
/// A zero `deleted_count` is still a successful acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Acknowledgment of an upsert keyed on a fixed identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    /// Set only when the upsert created the document.
    pub upserted_id: Option<Value>,
}

/// Result of a partial update by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOutcome {
    /// No document has the identifier.
    NotFound,
    /// The document exists but every field already held the given value.
    Unchanged,
    /// At least one field changed.
    Modified,
}

impl UpdateOutcome {
    /// Classify a store's matched/modified counts.
    #[must_use]
    pub const fn from_counts(matched: u64, modified: u64) -> Self {
        if modified > 0 {
            Self::Modified
        } else if matched > 0 {
            Self::Unchanged
        } else {
            Self::NotFound
        }
    }

    #[must_use]
    pub const fn is_modified(self) -> bool {
        matches!(self, Self::Modified)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_update_outcome_from_counts() {
        assert_eq!(UpdateOutcome::from_counts(0, 0), UpdateOutcome::NotFound);
        assert_eq!(UpdateOutcome::from_counts(1, 0), UpdateOutcome::Unchanged);
        assert_eq!(UpdateOutcome::from_counts(1, 1), UpdateOutcome::Modified);
    }

    #[test]
    fn test_acks_serialize_in_camel_case() {
        let insert = InsertAck {
            acknowledged: true,
            inserted_id: json!("65a1f0c2e4b0a1b2c3d4e5f6"),
        };
        assert_eq!(
            serde_json::to_value(&insert).ok(),
            Some(json!({ "acknowledged": true, "insertedId": "65a1f0c2e4b0a1b2c3d4e5f6" }))
        );

        let delete = DeleteAck {
            acknowledged: true,
            deleted_count: 0,
        };
        assert_eq!(
            serde_json::to_value(delete).ok(),
            Some(json!({ "acknowledged": true, "deletedCount": 0 }))
        );
    }
}
