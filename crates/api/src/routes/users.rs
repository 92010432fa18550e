//! User route handlers.
//!
//! Users have no update route; they are registered, listed, looked up by
//! email and role, and deleted.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use golden_bowl_core::{Collection, DeleteAck, Document, DocumentId, InsertAck};

use super::shared::filter;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Query parameters for the role lookup.
#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub email: Option<String>,
    pub role: Option<String>,
}

/// List every user.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Document>>> {
    let users = state.store().find(Collection::Users, Document::new()).await?;
    Ok(Json(users))
}

/// Register a user. Any JSON object is accepted.
pub async fn create(
    State(state): State<AppState>,
    Json(user): Json<Document>,
) -> Result<Json<InsertAck>> {
    tracing::debug!(?user, "Registering user");
    let ack = state.store().insert_one(Collection::Users, user).await?;
    tracing::info!(inserted_id = %ack.inserted_id, "User created");
    Ok(Json(ack))
}

/// Delete a user. Acknowledges even when nothing was deleted.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>> {
    let id = DocumentId::parse(&id)?;
    let ack = state.store().delete_by_id(Collection::Users, &id).await?;
    tracing::info!(%id, deleted_count = ack.deleted_count, "User delete acknowledged");
    Ok(Json(ack))
}

/// Find the first user whose email and role both match exactly.
pub async fn find_by_role(
    State(state): State<AppState>,
    Query(query): Query<RoleQuery>,
) -> Result<Json<Document>> {
    let email = query.email.filter(|email| !email.is_empty());
    let role = query.role.filter(|role| !role.is_empty());
    let (Some(email), Some(role)) = (email, role) else {
        return Err(AppError::BadRequest(
            "Email and role are required".to_string(),
        ));
    };

    let filter = filter([("email", Value::String(email)), ("role", Value::String(role))]);
    state
        .store()
        .find_one(Collection::Users, filter)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
