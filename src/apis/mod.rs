//! Clients for the various Nordigen APIs.

use crate::Error;
use reqwest::Method;
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::{Debug, Formatter};

pub mod accounts;
pub mod agreements;
pub mod aspsps;
pub mod auth;
pub mod requisitions;

pub(crate) struct NordigenClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) endpoint: String,
}

impl NordigenClientInner {
    /// Absolute URL for a path relative to the configured endpoint.
    ///
    /// The two are concatenated as they are: no slashes are added or removed.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    /// Sends one authenticated request and decodes the JSON response body.
    ///
    /// `Content-Type: application/json` is only sent along with a body.
    pub(crate) async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut req = self.client.request(method, self.url(path));
        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await?.json().await?;

        Ok(res)
    }

    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.request::<(), T>(Method::GET, path, None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body)).await
    }
}

impl Debug for NordigenClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NordigenClientInner")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
