//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                          - Liveness banner
//! GET    /health                    - Liveness check
//! GET    /health/ready              - Readiness check (pings the store)
//!
//! # Users
//! GET    /users                     - List users
//! POST   /users                     - Register a user
//! GET    /users/role?email=&role=   - Find the user with this email and role
//! DELETE /users/{id}                - Delete a user
//!
//! # Items
//! GET    /items                     - List items
//! POST   /items                     - Create an item
//! GET    /items/{id-or-category}    - Id lookup if the segment is an id, else category filter
//! GET    /items/by-id/{id}          - Id lookup
//! GET    /items/by-category/{name}  - Category filter
//! PUT    /items/{id}                - Partial update
//! DELETE /items/{id}                - Delete an item
//!
//! # Orders
//! GET    /orders                    - List orders
//! POST   /orders                    - Create an order
//! PUT    /orders/{id}               - Partial update
//!
//! # Active session
//! GET    /sessions/active           - Read the active session
//! PUT    /sessions/active           - Create or replace the active session
//! ```

pub mod health;
pub mod items;
pub mod orders;
pub mod sessions;
pub mod shared;
pub mod users;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list).post(users::create))
        // Static segment, matched before `/{id}`
        .route("/role", get(users::find_by_role))
        .route("/{id}", axum::routing::delete(users::delete))
}

/// Create the item routes router.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list).post(items::create))
        .route("/by-id/{id}", get(items::by_id))
        .route("/by-category/{category}", get(items::by_category))
        .route(
            "/{id}",
            get(items::show).put(items::update).delete(items::delete),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list).post(orders::create))
        .route("/{id}", put(orders::update))
}

/// Create the session routes router.
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/active", get(sessions::show).put(sessions::upsert))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::live))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/users", user_routes())
        .nest("/items", item_routes())
        .nest("/orders", order_routes())
        .nest("/sessions", session_routes())
}
