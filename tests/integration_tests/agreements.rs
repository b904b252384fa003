use crate::common::{test_context::TestContext, SANDBOX_ASPSP_ID};
use chrono::{Duration, Utc};
use nordigen_rust::{
    apis::agreements::CreateEndUserAgreementRequestBuilder, error::ApiError, Error,
};
use uuid::Uuid;

#[tokio::test]
async fn create_agreement() {
    let ctx = TestContext::start().await;

    let enduser_id = Uuid::new_v4().to_string();
    let agreement = ctx
        .client
        .agreements
        .create(
            &CreateEndUserAgreementRequestBuilder::default()
                .enduser_id(enduser_id.clone())
                .aspsp_id(SANDBOX_ASPSP_ID)
                .max_historical_days(30u32)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(!agreement.id.is_empty());
    assert_eq!(agreement.enduser_id, enduser_id);
    assert_eq!(agreement.aspsp_id, SANDBOX_ASPSP_ID);
    assert_eq!(agreement.max_historical_days, 30);
    assert_eq!(agreement.accepted, None);

    // Freshly created, so the timestamp must be recent
    let created = agreement.created.unwrap();
    assert!(Utc::now() - created < Duration::minutes(5));
}

#[tokio::test]
async fn create_agreement_with_unknown_bank() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .agreements
        .create(
            &CreateEndUserAgreementRequestBuilder::default()
                .enduser_id(Uuid::new_v4().to_string())
                .aspsp_id("NON_EXISTENT_BANK")
                .build()
                .unwrap(),
        )
        .await
        .expect_err("Expected error");

    match err {
        Error::ApiError(ApiError { status, errors, .. }) => {
            assert_eq!(status, 400);
            assert!(errors.contains_key("aspsp_id"));
        }
        e => panic!("Unexpected error: {}", e),
    }
}
