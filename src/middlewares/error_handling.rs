use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use task_local_extensions::Extensions;

/// Reqwest middleware which translates non-successful responses returned from Nordigen APIs
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let response = next.run(req, extensions).await?;

        if !response.status().is_success() {
            let status = response.status();
            let bytes = response.bytes().await?;

            tracing::debug!("Failed HTTP request. Status code: {}", status);

            return Err(Error::ApiError(into_api_error(status, &bytes)).into());
        }

        Ok(response)
    }
}

/// Error documents returned by Nordigen APIs.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum ErrorResponse {
    Summary {
        summary: String,
        detail: Option<String>,
        r#type: Option<String>,
    },
    Detail {
        detail: String,
    },
    Fields(Map<String, Value>),
}

/// Validation error reported against a single request field.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum FieldError {
    Summary {
        summary: String,
        detail: Option<String>,
    },
    Messages(Vec<String>),
    Message(String),
}

impl FieldError {
    fn into_messages(self) -> Vec<String> {
        match self {
            FieldError::Summary {
                detail: Some(detail),
                ..
            } => vec![detail],
            FieldError::Summary { summary, .. } => vec![summary],
            FieldError::Messages(messages) => messages,
            FieldError::Message(message) => vec![message],
        }
    }
}

/// Whether a validation error document reports at least one field.
///
/// Entries which are not field errors, such as `status_code`, are ignored.
fn has_field_errors(fields: &Map<String, Value>) -> bool {
    fields
        .iter()
        .filter(|(k, _)| k.as_str() != "status_code")
        .any(|(_, v)| serde_json::from_value::<FieldError>(v.clone()).is_ok())
}

/// Builds an [`ApiError`] out of a failed response.
///
/// If the body is not a recognised error document, the entire body is used as the summary.
fn into_api_error(status: StatusCode, body: &[u8]) -> ApiError {
    let canonical_reason = status
        .canonical_reason()
        .unwrap_or("Unknown Error")
        .to_string();

    let mut api_error = ApiError {
        status: status.as_u16(),
        summary: canonical_reason.clone(),
        detail: None,
        r#type: None,
        errors: HashMap::new(),
    };

    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(ErrorResponse::Summary {
            summary,
            detail,
            r#type,
        }) => {
            api_error.summary = summary;
            api_error.detail = detail;
            api_error.r#type = r#type;
        }
        Ok(ErrorResponse::Detail { detail }) => {
            api_error.detail = Some(detail);
        }
        Ok(ErrorResponse::Fields(fields)) if has_field_errors(&fields) => {
            api_error.errors = fields
                .into_iter()
                .filter(|(k, _)| k.as_str() != "status_code")
                .filter_map(|(k, v)| {
                    serde_json::from_value::<FieldError>(v)
                        .ok()
                        .map(|e| (k, e.into_messages()))
                })
                .collect();
        }
        _ if !body.is_empty() => {
            api_error.summary = String::from_utf8_lossy(body).into_owned();
        }
        _ => {}
    }

    api_error
}
