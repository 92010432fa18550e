//! Users and items against a running server.

#![allow(clippy::unwrap_used)]

use golden_bowl_core::DocumentId;
use golden_bowl_integration_tests::{TestContext, unique_tag};
use reqwest::Method;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_user_lifecycle() {
    let ctx = TestContext::from_env();
    let email = format!("{}@example.com", unique_tag("user"));

    let (status, ack) = ctx
        .send_json(Method::POST, "/users", &json!({ "email": email, "role": "customer" }))
        .await
        .unwrap();
    assert_eq!(status, 200);
    let id = ack["insertedId"].as_str().unwrap().to_owned();
    assert!(DocumentId::is_well_formed(&id));

    let (status, user) = ctx
        .get_json(&format!("/users/role?email={email}&role=customer"))
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(user["_id"], json!(id));

    let (status, ack) = ctx.delete_json(&format!("/users/{id}")).await.unwrap();
    assert_eq!(status, 200);
    assert_eq!(ack["deletedCount"], json!(1));

    let (status, _) = ctx
        .get_json(&format!("/users/role?email={email}&role=customer"))
        .await
        .unwrap();
    assert_eq!(status, 404);
}

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_item_lifecycle() {
    let ctx = TestContext::from_env();
    let category = unique_tag("category");

    let (_, ack) = ctx
        .send_json(
            Method::POST,
            "/items",
            &json!({ "name": "Pho", "category": category, "price": 12 }),
        )
        .await
        .unwrap();
    let id = ack["insertedId"].as_str().unwrap().to_owned();

    let (status, item) = ctx.get_json(&format!("/items/{id}")).await.unwrap();
    assert_eq!(status, 200);
    assert_eq!(item["name"], json!("Pho"));

    let (_, in_category) = ctx.get_json(&format!("/items/{category}")).await.unwrap();
    assert_eq!(in_category.as_array().unwrap().len(), 1);

    let (_, updated) = ctx
        .send_json(Method::PUT, &format!("/items/{id}"), &json!({ "price": 13 }))
        .await
        .unwrap();
    assert_eq!(updated["success"], json!(true));

    let (_, unchanged) = ctx
        .send_json(Method::PUT, &format!("/items/{id}"), &json!({ "price": 13 }))
        .await
        .unwrap();
    assert_eq!(unchanged["success"], json!(false));

    let (_, ack) = ctx.delete_json(&format!("/items/{id}")).await.unwrap();
    assert_eq!(ack["deletedCount"], json!(1));

    let (_, ack) = ctx.delete_json(&format!("/items/{id}")).await.unwrap();
    assert_eq!(ack["deletedCount"], json!(0));
}

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_malformed_id_is_generic_server_error() {
    let ctx = TestContext::from_env();
    let (status, body) = ctx.get_json("/items/by-id/not-an-id").await.unwrap();
    assert_eq!(status, 500);
    assert_eq!(body["message"], json!("Internal Server Error"));
}
