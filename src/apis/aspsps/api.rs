use crate::{
    apis::{aspsps::Aspsp, NordigenClientInner},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Nordigen ASPSPs (banks) APIs client.
#[derive(Clone, Debug)]
pub struct AspspsApi {
    inner: Arc<NordigenClientInner>,
}

impl AspspsApi {
    pub(crate) fn new(inner: Arc<NordigenClientInner>) -> Self {
        Self { inner }
    }

    /// Lists the banks available in a country, e.g. `"gb"` for Great Britain.
    ///
    /// The list is returned as sent by the server, without any filtering.
    /// The country code is percent-encoded into the query string.
    #[tracing::instrument(name = "List ASPSPs for Country", skip(self))]
    pub async fn list_for_country(&self, country_code: &str) -> Result<Vec<Aspsp>, Error> {
        self.inner
            .get(&format!("/aspsps/?country={}", encode(country_code)))
            .await
    }

    /// Gets the details of a single bank.
    ///
    /// If there's no bank with the given id, `None` is returned.
    /// The id is percent-encoded into the path.
    ///
    /// With [`with_status_passthrough`](crate::client::NordigenClientBuilder::with_status_passthrough)
    /// enabled the 404 is not recognised: the error document fails to decode as an
    /// [`Aspsp`] and an [`Error::HttpError`] is returned instead of `None`.
    #[tracing::instrument(name = "Get ASPSP by ID", skip(self))]
    pub async fn get_by_id(&self, aspsp_id: &str) -> Result<Option<Aspsp>, Error> {
        let res = self
            .inner
            .get(&format!("/aspsps/{}/", encode(aspsp_id)))
            .await;

        // Return `None` if the server returned 404
        match res {
            Ok(aspsp) => Ok(Some(aspsp)),
            Err(Error::ApiError(api_error)) if api_error.status == 404 => Ok(None),
            Err(e) => Err(e),
        }
    }
}
