use crate::common::{ACCEPT_JSON, USER_AGENT};
use async_trait::async_trait;
use reqwest::{
    header::{self, HeaderValue},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Middleware to inject the `Accept` and `User-Agent` headers to all outgoing requests.
pub struct InjectHeadersMiddleware {
    accept: HeaderValue,
    user_agent: HeaderValue,
}

impl Default for InjectHeadersMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl InjectHeadersMiddleware {
    pub fn new() -> Self {
        Self {
            accept: HeaderValue::from_static(ACCEPT_JSON),
            user_agent: HeaderValue::from_static(USER_AGENT),
        }
    }
}

#[async_trait]
impl Middleware for InjectHeadersMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let headers = req.headers_mut();
        headers.insert(header::ACCEPT, self.accept.clone());
        headers.insert(header::USER_AGENT, self.user_agent.clone());

        next.run(req, extensions).await
    }
}
