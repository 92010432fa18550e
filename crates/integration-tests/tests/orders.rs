//! Orders against a running server.

#![allow(clippy::unwrap_used)]

use golden_bowl_integration_tests::{TestContext, unique_tag};
use reqwest::Method;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_order_create_and_update() {
    let ctx = TestContext::from_env();
    let tag = unique_tag("order");

    let (status, created) = ctx
        .send_json(
            Method::POST,
            "/orders",
            &json!({
                "items": [{ "name": "Pho", "qty": 1 }],
                "totalPrice": 12,
                "status": "pending",
                "createdAt": tag,
            }),
        )
        .await
        .unwrap();
    assert_eq!(status, 201);
    let id = created["orderId"].as_str().unwrap().to_owned();

    let (_, updated) = ctx
        .send_json(Method::PUT, &format!("/orders/{id}"), &json!({ "status": "delivered" }))
        .await
        .unwrap();
    assert_eq!(updated["success"], json!(true));

    let (_, orders) = ctx.get_json("/orders").await.unwrap();
    let order = orders
        .as_array()
        .unwrap()
        .iter()
        .find(|order| order["_id"] == json!(id))
        .unwrap();
    assert_eq!(order["status"], json!("delivered"));
}

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_incomplete_order_is_not_stored() {
    let ctx = TestContext::from_env();
    let tag = unique_tag("incomplete");

    let (status, _) = ctx
        .send_json(
            Method::POST,
            "/orders",
            &json!({ "items": ["Pho"], "status": "pending", "createdAt": tag }),
        )
        .await
        .unwrap();
    assert_eq!(status, 400);

    let (_, orders) = ctx.get_json("/orders").await.unwrap();
    assert!(
        !orders
            .as_array()
            .unwrap()
            .iter()
            .any(|order| order["createdAt"] == json!(tag))
    );
}
