//! HTTP transport seam.
//!
//! The provider only ever issues one GET per call, so the request/response
//! envelopes are deliberately small. `ReqwestTransport` is the production
//! implementation; tests plug in their own `Transport`.
use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use quote_common::QuoteError;
use quote_common::Result;
use quote_common::net::DEFAULT_TIMEOUT;

/// Outbound GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL.
    pub url: String,
    /// Header names are stored lowercase.
    pub headers: BTreeMap<String, String>,
    /// Per-request timeout applied by the transport.
    pub timeout: Duration,
}

impl HttpRequest {
    /// GET `url` with no headers and the default timeout.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Add or replace a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Override the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Undecoded body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Executes a single GET request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform `request` and return the response, whatever its status.
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// `Transport` backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client with this crate's user agent.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quote_provider/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| QuoteError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Reuse an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.get(&request.url).timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        debug!("GET {}", request.url);
        let response = builder.send().await.map_err(|e| map_reqwest_error(e, request))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(e, request))?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error, request: &HttpRequest) -> QuoteError {
    if err.is_timeout() {
        QuoteError::Timeout(request.timeout)
    } else if err.is_connect() {
        QuoteError::Transport(format!("connection failed: {err}"))
    } else {
        QuoteError::Transport(format!("request failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_names_are_case_insensitive() {
        let request = HttpRequest::get("https://example.test/quote")
            .with_header("X-Api-Key", "secret")
            .with_header("Accept", "application/json");

        assert_eq!(request.header("x-api-key"), Some("secret"));
        assert_eq!(request.header("ACCEPT"), Some("application/json"));
        assert_eq!(request.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn only_2xx_is_success() {
        assert!(HttpResponse::ok("{}").is_success());
        assert!(HttpResponse { status: 204, body: Vec::new() }.is_success());
        assert!(!HttpResponse { status: 301, body: Vec::new() }.is_success());
        assert!(!HttpResponse { status: 500, body: Vec::new() }.is_success());
    }
}
