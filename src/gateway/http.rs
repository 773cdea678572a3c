//! HTTP gateway backed by `reqwest`.

use super::backend::{Gateway, Verb};
use super::status::http_error;
use crate::domain::error::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::Instrument;

/// Error body returned by the API on failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Gateway talking JSON over HTTP to the results API.
///
/// # Examples
///
/// ```
/// use trackside::gateway::HttpGateway;
///
/// let gateway = HttpGateway::new("http://localhost:8080/api/");
/// assert_eq!(gateway.url("athletes/all"), "http://localhost:8080/api/athletes/all");
/// ```
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a path relative to the API root.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    const fn method(verb: Verb) -> Method {
        match verb {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        }
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn request(&self, verb: Verb, path: &str, body: Option<Value>) -> Result<Option<Value>> {
        let url = self.url(path);
        let span = tracing::debug_span!("gateway_request", verb = verb.as_str(), url = %url);

        async move {
            let mut request = self
                .client
                .request(Self::method(verb), &url)
                .header(CONTENT_TYPE, "application/json")
                .header(ACCEPT, "application/json");
            if let Some(body) = body {
                request = request.json(&body);
            }

            let response = request.send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;
            tracing::debug!(status = status.as_u16(), len = bytes.len(), "response received");

            decode_response(status, &bytes)
        }
        .instrument(span)
        .await
    }
}

/// Turns a status and body into the gateway result.
fn decode_response(status: StatusCode, bytes: &[u8]) -> Result<Option<Value>> {
    if !status.is_success() {
        let server_message = serde_json::from_slice::<ErrorBody>(bytes)
            .ok()
            .and_then(|b| b.message);
        tracing::warn!(status = status.as_u16(), message = ?server_message, "request failed");
        return Err(http_error(status.as_u16(), server_message.as_deref()));
    }

    if status == StatusCode::NO_CONTENT || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    Ok(Some(serde_json::from_slice(bytes)?))
}
