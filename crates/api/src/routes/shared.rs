//! Helpers shared by the resource handlers.

use serde::Serialize;
use serde_json::Value;

use golden_bowl_core::{Collection, Document, DocumentId, ID_FIELD, UpdateOutcome};

use crate::error::Result;
use crate::state::AppState;

/// Response body for partial updates.
///
/// "Matched but unchanged" and "not found" share one failure message; the
/// distinction is kept in [`UpdateOutcome`] and the logs.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub message: String,
}

impl UpdateResponse {
    /// Build the response for `entity` (e.g. "item") from a store outcome.
    #[must_use]
    pub fn from_outcome(entity: &str, outcome: UpdateOutcome) -> Self {
        if outcome.is_modified() {
            Self {
                success: true,
                message: format!("{entity} updated successfully"),
            }
        } else {
            Self {
                success: false,
                message: format!("No changes made or {entity} not found"),
            }
        }
    }
}

/// Build an equality filter from field/value pairs.
pub fn filter<const N: usize>(pairs: [(&str, Value); N]) -> Document {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

/// Merge `body` into the document `raw_id`, never touching its identifier.
///
/// # Errors
///
/// Returns `AppError::InvalidId` for a malformed identifier and
/// `AppError::Store` if the store call fails.
pub async fn partial_update(
    state: &AppState,
    collection: Collection,
    raw_id: &str,
    mut body: Document,
) -> Result<UpdateOutcome> {
    let id = DocumentId::parse(raw_id)?;
    body.remove(ID_FIELD);

    let outcome = state.store().update_by_id(collection, &id, body).await?;
    tracing::info!(%collection, %id, ?outcome, "Partial update applied");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_update_response_messages() {
        let ok = UpdateResponse::from_outcome("item", UpdateOutcome::Modified);
        assert!(ok.success);
        assert_eq!(ok.message, "item updated successfully");

        for outcome in [UpdateOutcome::Unchanged, UpdateOutcome::NotFound] {
            let failed = UpdateResponse::from_outcome("order", outcome);
            assert!(!failed.success);
            assert_eq!(failed.message, "No changes made or order not found");
        }
    }

    #[test]
    fn test_filter_builds_document() {
        let doc = filter([("email", json!("a@b.c")), ("role", json!("admin"))]);
        assert_eq!(Value::Object(doc), json!({ "email": "a@b.c", "role": "admin" }));
    }
}
