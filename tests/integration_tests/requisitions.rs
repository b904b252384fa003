use crate::common::{test_context::TestContext, MOCK_REDIRECT_URI, SANDBOX_ASPSP_ID};
use nordigen_rust::{
    apis::{
        agreements::CreateEndUserAgreementRequestBuilder,
        requisitions::CreateRequisitionRequestBuilder,
    },
    error::ApiError,
    Error,
};
use uuid::Uuid;

#[tokio::test]
async fn create_requisition_and_link() {
    let ctx = TestContext::start().await;

    let enduser_id = Uuid::new_v4().to_string();
    let reference = Uuid::new_v4().to_string();
    let agreement = ctx
        .client
        .agreements
        .create(
            &CreateEndUserAgreementRequestBuilder::default()
                .enduser_id(enduser_id.clone())
                .aspsp_id(SANDBOX_ASPSP_ID)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let requisition = ctx
        .client
        .requisitions
        .create(
            &CreateRequisitionRequestBuilder::default()
                .enduser_id(enduser_id.clone())
                .redirect(MOCK_REDIRECT_URI)
                .reference(reference.clone())
                .agreements(vec![agreement.id.clone()])
                .user_language(Some("EN".to_string()))
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(!requisition.id.is_empty());
    assert_eq!(requisition.enduser_id, enduser_id);
    assert_eq!(requisition.reference, reference);
    assert_eq!(requisition.agreements, vec![agreement.id]);
    assert!(requisition.accounts.is_empty());
    assert!(!requisition.is_linked());

    let link = ctx
        .client
        .requisitions
        .get_link(&requisition, SANDBOX_ASPSP_ID)
        .await
        .unwrap()
        .expect("No link returned");
    assert!(link.starts_with("http"));

    // Nobody went through the link yet
    let fetched = ctx
        .client
        .requisitions
        .get_by_id(&requisition.id)
        .await
        .unwrap();
    assert_eq!(fetched.id, requisition.id);
    assert!(fetched.accounts.is_empty());
}

#[tokio::test]
async fn get_link_for_unknown_bank() {
    let ctx = TestContext::start().await;

    let requisition = ctx
        .client
        .requisitions
        .create(
            &CreateRequisitionRequestBuilder::default()
                .enduser_id(Uuid::new_v4().to_string())
                .redirect(MOCK_REDIRECT_URI)
                .reference(Uuid::new_v4().to_string())
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let err = ctx
        .client
        .requisitions
        .get_link(&requisition, "NON_EXISTENT_BANK")
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::ApiError(ApiError { status: 400, .. })));
}

#[tokio::test]
async fn get_non_existent_requisition() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .requisitions
        .get_by_id(&Uuid::new_v4().to_string())
        .await
        .expect_err("Expected error");
    assert!(matches!(err, Error::ApiError(ApiError { status: 404, .. })));
}

#[tokio::test]
async fn linked_requisition_lists_accounts() {
    let ctx = TestContext::start().await;

    let requisition = ctx.linked_requisition().await.unwrap();

    assert!(requisition.is_linked());
    assert!(!requisition.accounts.is_empty());
}
