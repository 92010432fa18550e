//! Item route handlers.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use golden_bowl_core::{Collection, DeleteAck, Document, DocumentId, InsertAck};

use super::shared::{UpdateResponse, filter, partial_update};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// List every item.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Document>>> {
    let items = state.store().find(Collection::Items, Document::new()).await?;
    Ok(Json(items))
}

/// Resolve a single-segment item path.
///
/// `/items/{segment}` serves both id lookups and category filters. A segment
/// shaped like a store identifier is looked up by id; anything else is a
/// category name.
pub async fn show(state: State<AppState>, Path(segment): Path<String>) -> Result<Response> {
    if DocumentId::is_well_formed(&segment) {
        Ok(by_id(state, Path(segment)).await?.into_response())
    } else {
        Ok(by_category(state, Path(segment)).await?.into_response())
    }
}

/// List items whose category equals `category` exactly.
///
/// No match is an empty list, not a 404.
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Document>>> {
    let items = state
        .store()
        .find(
            Collection::Items,
            filter([("category", Value::String(category))]),
        )
        .await?;
    Ok(Json(items))
}

/// Fetch one item by identifier.
pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>> {
    let id = DocumentId::parse(&id)?;
    state
        .store()
        .find_by_id(Collection::Items, &id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("item not found".to_string()))
}

/// Create an item. Any JSON object is accepted.
pub async fn create(
    State(state): State<AppState>,
    Json(item): Json<Document>,
) -> Result<Json<InsertAck>> {
    let ack = state.store().insert_one(Collection::Items, item).await?;
    tracing::info!(inserted_id = %ack.inserted_id, "Item created");
    Ok(Json(ack))
}

/// Merge the body's fields into an item.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Document>,
) -> Result<Json<UpdateResponse>> {
    let outcome = partial_update(&state, Collection::Items, &id, body).await?;
    Ok(Json(UpdateResponse::from_outcome("item", outcome)))
}

/// Delete an item. Acknowledges even when nothing was deleted.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>> {
    let id = DocumentId::parse(&id)?;
    let ack = state.store().delete_by_id(Collection::Items, &id).await?;
    tracing::info!(%id, deleted_count = ack.deleted_count, "Item delete acknowledged");
    Ok(Json(ack))
}
