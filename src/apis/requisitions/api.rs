use crate::{
    apis::{
        requisitions::{CreateRequisitionRequest, Requisition, RequisitionLinkRequest},
        NordigenClientInner,
    },
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Nordigen requisitions APIs client.
#[derive(Clone, Debug)]
pub struct RequisitionsApi {
    inner: Arc<NordigenClientInner>,
}

impl RequisitionsApi {
    pub(crate) fn new(inner: Arc<NordigenClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new requisition for an end user.
    #[tracing::instrument(
        name = "Create Requisition",
        skip(self, request),
        fields(
            reference = %request.reference,
            agreements = request.agreements.len()
        )
    )]
    pub async fn create(&self, request: &CreateRequisitionRequest) -> Result<Requisition, Error> {
        self.inner.post("/requisitions/", request).await
    }

    /// Gets the link the end user has to visit to authenticate at the given bank.
    ///
    /// Returns `None` if the server did not return a link, and
    /// [`Error::UnexpectedResponse`](crate::Error::UnexpectedResponse) if the response
    /// is not a JSON object or its link is not a string.
    /// The requisition id is percent-encoded into the path.
    #[tracing::instrument(
        name = "Get Requisition Link",
        skip(self, requisition),
        fields(requisition_id = %requisition.id)
    )]
    pub async fn get_link(
        &self,
        requisition: &Requisition,
        aspsp_id: &str,
    ) -> Result<Option<String>, Error> {
        let res: Value = self
            .inner
            .post(
                &format!("/requisitions/{}/links/", encode(&requisition.id)),
                &RequisitionLinkRequest { aspsp_id },
            )
            .await?;

        let fields = res.as_object().ok_or_else(|| {
            Error::UnexpectedResponse(format!("expected a JSON object, got {}", res))
        })?;

        match fields.get("initiate") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(link)) if link.is_empty() => Ok(None),
            Some(Value::String(link)) => Ok(Some(link.clone())),
            Some(other) => Err(Error::UnexpectedResponse(format!(
                "expected `initiate` to be a string, got {}",
                other
            ))),
        }
    }

    /// Gets an existing requisition.
    ///
    /// Poll this to find out when the end user completed the flow: `accounts` lists the
    /// linked accounts from then on. The id is percent-encoded into the path.
    #[tracing::instrument(name = "Get Requisition by ID", skip(self))]
    pub async fn get_by_id(&self, requisition_id: &str) -> Result<Requisition, Error> {
        self.inner
            .get(&format!("/requisitions/{}/", encode(requisition_id)))
            .await
    }
}
