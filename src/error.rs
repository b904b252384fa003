//! Standard errors used by all functions in the crate.

use std::{collections::HashMap, fmt};

/// Error collecting all possible failures of the Nordigen client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    ///
    /// Covers network failures as well as response bodies which could not be decoded.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Nordigen API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// A successful response whose contents do not have the expected shape.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Nordigen HTTP APIs error.
#[derive(thiserror::Error, Debug)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Concise description of the error.
    ///
    /// If the server did not return a recognised error document, this is the raw response body,
    /// or the canonical reason of the status code when the body is empty.
    pub summary: String,
    /// A human readable explanation specific to this occurrence of the problem.
    pub detail: Option<String>,
    /// Machine readable class of the error, when the server sends one.
    pub r#type: Option<String>,
    /// Validation errors, keyed by the name of the offending request field.
    pub errors: HashMap<String, Vec<String>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nordigen HTTP error {}: {}", self.status, self.summary)?;

        if let Some(ref r#type) = self.r#type {
            write!(f, " ({})", r#type)?;
        }

        if let Some(ref detail) = self.detail {
            write!(f, "\nAdditional details: {}", detail)?;
        }

        if !self.errors.is_empty() {
            write!(f, "\nAll errors:")?;
            for (k, v) in &self.errors {
                write!(f, "\n- {}: {}", k, v.join(", "))?;
            }
        }

        Ok(())
    }
}
