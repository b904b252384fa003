use crate::common::{test_context::TestContext, SANDBOX_ASPSP_ID};

#[tokio::test]
async fn list_for_country() {
    let ctx = TestContext::start().await;

    let aspsps = ctx.client.aspsps.list_for_country("gb").await.unwrap();

    assert!(!aspsps.is_empty());
    assert!(aspsps
        .iter()
        .all(|a| a.countries.iter().any(|c| c.eq_ignore_ascii_case("gb"))));
}

#[tokio::test]
async fn list_for_country_is_not_cached() {
    let ctx = TestContext::start().await;

    let first = ctx.client.aspsps.list_for_country("gb").await.unwrap();
    let second = ctx.client.aspsps.list_for_country("gb").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn get_by_id_successful() {
    let ctx = TestContext::start().await;

    let aspsp = ctx
        .client
        .aspsps
        .get_by_id(SANDBOX_ASPSP_ID)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(aspsp.id, SANDBOX_ASPSP_ID);
    assert!(!aspsp.name.is_empty());
}

#[tokio::test]
async fn get_by_id_not_found() {
    let ctx = TestContext::start().await;

    let aspsp = ctx
        .client
        .aspsps
        .get_by_id("NON_EXISTENT_BANK")
        .await
        .unwrap();

    assert!(aspsp.is_none());
}
