//! Active-session route handlers.
//!
//! The active session is one record in the `sessions` collection whose `_id`
//! is always [`ACTIVE_SESSION_KEY`]. Every write upserts that key, so the
//! store's unique `_id` keeps it a singleton. It is last-write-wins global
//! state, not a per-user session, and nothing verifies requests against it.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use golden_bowl_core::{Collection, Document, ID_FIELD, UpsertAck, require_fields};

use super::shared::filter;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Fixed `_id` of the active-session record.
pub const ACTIVE_SESSION_KEY: &str = "active";

/// Fields a session write must carry, each truthy.
pub const REQUIRED_SESSION_FIELDS: [&str; 2] = ["user", "role"];

/// Response body for a session write.
#[derive(Debug, Serialize)]
pub struct SessionUpdated {
    pub message: String,
    pub result: UpsertAck,
}

/// Read the active session.
pub async fn show(State(state): State<AppState>) -> Result<Json<Document>> {
    state
        .store()
        .find_one(
            Collection::Sessions,
            filter([(ID_FIELD, Value::String(ACTIVE_SESSION_KEY.to_string()))]),
        )
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No active session".to_string()))
}

/// Create or overwrite the active session.
///
/// Stores `user`, `role`, `loggedIn` (default `true`) and a server-side
/// `updatedAt` timestamp. Other body fields are ignored.
pub async fn upsert(
    State(state): State<AppState>,
    Json(body): Json<Document>,
) -> Result<Json<SessionUpdated>> {
    require_fields(&body, &REQUIRED_SESSION_FIELDS)?;

    let mut fields = Document::new();
    for key in REQUIRED_SESSION_FIELDS {
        if let Some(value) = body.get(key) {
            fields.insert(key.to_owned(), value.clone());
        }
    }
    fields.insert(
        "loggedIn".to_owned(),
        body.get("loggedIn").cloned().unwrap_or(Value::Bool(true)),
    );
    fields.insert(
        "updatedAt".to_owned(),
        Value::String(Utc::now().to_rfc3339()),
    );

    let result = state
        .store()
        .upsert_by_key(Collection::Sessions, ACTIVE_SESSION_KEY, fields)
        .await?;
    tracing::info!(
        created = result.upserted_id.is_some(),
        "Active session updated"
    );

    Ok(Json(SessionUpdated {
        message: "Active session updated".to_string(),
        result,
    }))
}
