use crate::{apis::auth::AccessToken, common::TOKEN_AUTH_SCHEME};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the access token into outgoing HTTP requests.
pub struct AuthenticationMiddleware {
    header_value: HeaderValue,
}

impl AuthenticationMiddleware {
    /// Fails if the token contains characters which are not allowed in an HTTP header.
    pub fn new(access_token: &AccessToken) -> Result<Self, reqwest::header::InvalidHeaderValue> {
        let mut header_value = HeaderValue::from_str(&format!(
            "{} {}",
            TOKEN_AUTH_SCHEME,
            access_token.expose_secret()
        ))?;
        header_value.set_sensitive(true);

        Ok(Self { header_value })
    }
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut()
            .insert(AUTHORIZATION, self.header_value.clone());

        next.run(req, extensions).await
    }
}
