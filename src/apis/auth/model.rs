use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Access token sent as `Authorization: Token <access token>` on every request.
///
/// The token is kept in a [`secrecy::Secret`](secrecy::Secret), so it never shows up
/// in `Debug` output (and therefore in tracing spans) and is wiped from memory on drop.
///
/// ```rust
/// # use nordigen_rust::apis::auth::AccessToken;
/// let token = AccessToken::new("supersecret");
///
/// assert!(!format!("{:?}", token).contains("supersecret"));
/// assert_eq!(token.expose_secret(), "supersecret");
/// ```
#[derive(Deserialize, Clone, Debug)]
#[serde(transparent)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    /// Wraps a secret string in a new `AccessToken`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl From<String> for AccessToken {
    fn from(s: String) -> Self {
        AccessToken::new(s)
    }
}

impl From<&str> for AccessToken {
    fn from(s: &str) -> Self {
        AccessToken::new(s)
    }
}
