use crate::common::test_context::TestContext;
use nordigen_rust::{error::ApiError, Error, NordigenClient};
use serde_json::Value;

#[tokio::test]
async fn invalid_token() {
    let ctx = TestContext::start().await;

    // Create a new client with an invalid token pointing to the same server
    let client = NordigenClient::builder("invalid")
        .with_endpoint(ctx.endpoint())
        .build()
        .unwrap();

    let err = client
        .aspsps
        .list_for_country("gb")
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::ApiError(ApiError { status: 401, .. })));
}

#[tokio::test]
async fn invalid_token_with_status_passthrough() {
    let ctx = TestContext::start().await;

    let client = NordigenClient::builder("invalid")
        .with_endpoint(ctx.endpoint())
        .with_status_passthrough(true)
        .build()
        .unwrap();

    // The error document comes back as a regular response
    let res: Value = client.get("/aspsps/?country=gb").await.unwrap();
    assert!(res.get("summary").is_some());
}

#[tokio::test]
async fn valid_token_through_the_generic_request() {
    let ctx = TestContext::start().await;

    let client = NordigenClient::builder(ctx.access_token.as_str())
        .with_endpoint(ctx.endpoint())
        .build()
        .unwrap();

    let res: Vec<Value> = client.get("/aspsps/?country=gb").await.unwrap();
    assert!(!res.is_empty());
}
