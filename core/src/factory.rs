//! HTTP client factory.
//!
//! # Design
//! `ClientFactory` carries the process-wide default base address resolved at
//! startup and nothing else. Each `client()` call builds an independent
//! `ApiClient` with its own `reqwest::Client`; no instance is cached or
//! shared between calls. There are no retries, timeouts or interceptors.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::requests::TaskRequests;

/// Produces `ApiClient`s bound to a base address.
#[derive(Debug, Clone)]
pub struct ClientFactory {
    default_base_url: String,
}

impl ClientFactory {
    pub fn new(default_base_url: impl Into<String>) -> Self {
        Self {
            default_base_url: default_base_url.into(),
        }
    }

    pub fn default_base_url(&self) -> &str {
        &self.default_base_url
    }

    /// Build a fresh client for `base_url`, or for the factory default when
    /// no override is given.
    pub fn client(&self, base_url: Option<&str>) -> ApiClient {
        let base_url = base_url.unwrap_or(&self.default_base_url);
        ApiClient {
            base_url: base_url.to_string(),
            http: reqwest::Client::new(),
        }
    }
}

/// A ready-to-use HTTP client configured with one base address.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request builder/parser resolving paths against this client's address.
    pub fn requests(&self) -> TaskRequests {
        TaskRequests::new(&self.base_url)
    }

    /// Execute `request`. Any status code is returned as data; only
    /// transport failures are errors here.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let mut builder = self.http.request(to_reqwest(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;

        debug!(status, url = %request.url, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn to_reqwest(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}
