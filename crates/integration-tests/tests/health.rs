//! Liveness and readiness against a running server.

#![allow(clippy::unwrap_used)]

use golden_bowl_integration_tests::TestContext;

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_root_banner() {
    let ctx = TestContext::from_env();
    let response = ctx.client.get(ctx.url("/")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "golden_bowl_side is LIVE");
}

#[tokio::test]
#[ignore = "requires a running API server"]
async fn test_store_is_ready() {
    let ctx = TestContext::from_env();
    let response = ctx.client.get(ctx.url("/health/ready")).send().await.unwrap();
    assert_eq!(response.status(), 200);
}
