//! The active session against a running server.

#![allow(clippy::unwrap_used)]

use golden_bowl_integration_tests::{TestContext, unique_tag};
use reqwest::Method;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_session_is_last_write_wins() {
    let ctx = TestContext::from_env();
    let first = unique_tag("first");
    let second = unique_tag("second");

    for user in [&first, &second] {
        let (status, body) = ctx
            .send_json(
                Method::PUT,
                "/sessions/active",
                &json!({ "user": user, "role": "admin" }),
            )
            .await
            .unwrap();
        assert_eq!(status, 200);
        assert_eq!(body["message"], json!("Active session updated"));
    }

    let (status, session) = ctx.get_json("/sessions/active").await.unwrap();
    assert_eq!(status, 200);
    assert_eq!(session["_id"], json!("active"));
    assert_eq!(session["user"], json!(second));
    assert_eq!(session["loggedIn"], json!(true));
}

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_session_write_requires_role() {
    let ctx = TestContext::from_env();
    let (status, _) = ctx
        .send_json(Method::PUT, "/sessions/active", &json!({ "user": "ana" }))
        .await
        .unwrap();
    assert_eq!(status, 400);
}
