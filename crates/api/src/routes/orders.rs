//! Order route handlers.
//!
//! Orders are created, listed, and partially updated. There is no delete.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use serde_json::Value;

use golden_bowl_core::{Collection, Document, require_fields};

use super::shared::{UpdateResponse, partial_update};
use crate::error::Result;
use crate::state::AppState;

/// Fields an order must carry, each truthy.
pub const REQUIRED_ORDER_FIELDS: [&str; 4] = ["items", "totalPrice", "status", "createdAt"];

/// Response body for a created order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub message: String,
    pub order_id: Value,
}

/// List every order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Document>>> {
    let orders = state.store().find(Collection::Orders, Document::new()).await?;
    Ok(Json(orders))
}

/// Create an order.
///
/// Rejected with 400 before the store is touched if any required field is
/// missing or falsy.
pub async fn create(
    State(state): State<AppState>,
    Json(order): Json<Document>,
) -> Result<(StatusCode, Json<OrderCreated>)> {
    require_fields(&order, &REQUIRED_ORDER_FIELDS)?;

    let ack = state.store().insert_one(Collection::Orders, order).await?;
    tracing::info!(order_id = %ack.inserted_id, "Order created");

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Order created successfully".to_string(),
            order_id: ack.inserted_id,
        }),
    ))
}

/// Merge the body's fields into an order.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Document>,
) -> Result<Json<UpdateResponse>> {
    let outcome = partial_update(&state, Collection::Orders, &id, body).await?;
    Ok(Json(UpdateResponse::from_outcome("order", outcome)))
}
