use crate::{
    apis::{
        agreements::{CreateEndUserAgreementRequest, EndUserAgreement},
        NordigenClientInner,
    },
    Error,
};
use std::sync::Arc;

/// Nordigen end user agreements APIs client.
#[derive(Clone, Debug)]
pub struct AgreementsApi {
    inner: Arc<NordigenClientInner>,
}

impl AgreementsApi {
    pub(crate) fn new(inner: Arc<NordigenClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new end user agreement.
    ///
    /// Only needed to change the length of the transaction history which can be retrieved:
    /// without an agreement, 90 days are available.
    #[tracing::instrument(
        name = "Create End User Agreement",
        skip(self, request),
        fields(
            aspsp_id = %request.aspsp_id,
            max_historical_days = request.max_historical_days
        )
    )]
    pub async fn create(
        &self,
        request: &CreateEndUserAgreementRequest,
    ) -> Result<EndUserAgreement, Error> {
        self.inner.post("/agreements/enduser/", request).await
    }
}
