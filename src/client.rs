//! Module containing the main Nordigen API client.

use crate::{
    apis::{
        accounts::AccountsApi, agreements::AgreementsApi, aspsps::AspspsApi, auth::AccessToken,
        requisitions::RequisitionsApi, NordigenClientInner,
    },
    common::DEFAULT_ENDPOINT,
    middlewares::{
        authentication::AuthenticationMiddleware, error_handling::ErrorHandlingMiddleware,
        inject_headers::InjectHeadersMiddleware,
    },
    Error,
};
use reqwest::Method;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::{DefaultSpanBackend, TracingMiddleware};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Client for Nordigen public APIs.
///
/// Every method maps to exactly one HTTP request: nothing is cached and failed requests
/// are never retried. Cloning the client is cheap and clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct NordigenClient {
    /// Bank (ASPSP) directory APIs client.
    pub aspsps: AspspsApi,
    /// End user agreements APIs client.
    pub agreements: AgreementsApi,
    /// Requisitions APIs client.
    pub requisitions: RequisitionsApi,
    /// Accounts APIs client.
    pub accounts: AccountsApi,
    inner: Arc<NordigenClientInner>,
}

impl NordigenClient {
    /// Builds a new [`NordigenClient`](crate::client::NordigenClient) with the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the access token is not a valid HTTP header value.
    /// Use [`builder`](NordigenClient::builder) to handle that case.
    pub fn new(access_token: impl Into<AccessToken>) -> NordigenClient {
        NordigenClientBuilder::new(access_token)
            .build()
            .expect("Access token is not a valid HTTP header value")
    }

    /// Returns a new builder to configure a new [`NordigenClient`](crate::client::NordigenClient).
    pub fn builder(access_token: impl Into<AccessToken>) -> NordigenClientBuilder {
        NordigenClientBuilder::new(access_token)
    }

    /// Base URL every request path is appended to.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Makes an authenticated request to the Nordigen API and decodes the JSON response.
    ///
    /// The URL is the configured endpoint followed by `path`, with no normalization.
    /// When a `body` is given, it is serialized as JSON and sent along with
    /// `Content-Type: application/json`.
    ///
    /// This is the primitive all the other APIs are built upon. It can be used to reach
    /// endpoints this crate does not model yet.
    #[tracing::instrument(name = "Nordigen Request", skip(self, body))]
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.inner.request(method, path, body).await
    }

    /// Shorthand for a `GET` [`request`](NordigenClient::request) without a body.
    pub async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        self.inner.get(path).await
    }

    /// Shorthand for a `POST` [`request`](NordigenClient::request) with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.inner.post(path, body).await
    }
}

/// Builder for a [`NordigenClient`](crate::client::NordigenClient).
#[derive(Debug)]
pub struct NordigenClientBuilder {
    client: reqwest::Client,
    access_token: AccessToken,
    endpoint: String,
    status_passthrough: bool,
}

impl NordigenClientBuilder {
    /// Creates a new builder to configure a [`NordigenClient`](crate::client::NordigenClient).
    pub fn new(access_token: impl Into<AccessToken>) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token: access_token.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            status_passthrough: false,
        }
    }

    /// Consumes the builder and builds a new [`NordigenClient`](crate::client::NordigenClient).
    ///
    /// Fails if the access token is not a valid HTTP header value.
    pub fn build(self) -> Result<NordigenClient, Error> {
        let auth_middleware = AuthenticationMiddleware::new(&self.access_token)
            .map_err(|e| Error::Other(e.into()))?;

        let inner = Arc::new(NordigenClientInner {
            client: build_client_with_middleware(
                self.client,
                auth_middleware,
                self.status_passthrough,
            ),
            endpoint: self.endpoint,
        });

        Ok(NordigenClient {
            aspsps: AspspsApi::new(inner.clone()),
            agreements: AgreementsApi::new(inner.clone()),
            requisitions: RequisitionsApi::new(inner.clone()),
            accounts: AccountsApi::new(inner.clone()),
            inner,
        })
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// This is the place to configure timeouts, proxies and the like.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the base URL every request path is appended to.
    ///
    /// Defaults to: `https://ob.nordigen.com/api`
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Compatibility switch: when enabled, responses with a non-successful status code are
    /// decoded like successful ones instead of being turned into an
    /// [`Error::ApiError`](crate::Error::ApiError).
    ///
    /// The error document sent by the server then has to fit the expected response type,
    /// which it rarely does. Defaults to `false`.
    pub fn with_status_passthrough(mut self, status_passthrough: bool) -> Self {
        self.status_passthrough = status_passthrough;
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    auth_middleware: AuthenticationMiddleware,
    status_passthrough: bool,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::<DefaultSpanBackend>::new());

    if !status_passthrough {
        builder = builder.with(ErrorHandlingMiddleware);
    }

    builder
        .with(InjectHeadersMiddleware::new())
        .with(auth_middleware)
        .build()
}
