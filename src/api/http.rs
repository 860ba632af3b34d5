//! HTTP utilities for the product catalog REST API
//!
//! A deliberately small wrapper: one request, full body buffered, body
//! parsed as JSON. The HTTP status code is never inspected - a 404 or 500
//! whose body is valid JSON counts as a success, matching the behavior
//! the rest of the program is written against. Do not add status checks
//! here.

use anyhow::{Context, Result};
use reqwest::{Client, Method};
use serde_json::Value;

/// HTTP client wrapper for store API calls
#[derive(Clone)]
pub struct JsonHttpClient {
    client: Client,
}

impl JsonHttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("storecli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Perform a single-shot request and parse the response body as JSON.
    ///
    /// No retry, no timeout, no status-code branching. An empty or
    /// otherwise non-JSON body fails with the same parse error regardless
    /// of method.
    pub async fn request(&self, method: Method, url: &str, body: Option<&Value>) -> Result<Value> {
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        tracing::debug!("response status: {}, {} bytes", status, body.len());

        serde_json::from_str(&body).context("Invalid JSON response from server")
    }

    /// Make a GET request
    pub async fn get(&self, url: &str) -> Result<Value> {
        self.request(Method::GET, url, None).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, url: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, url, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str) -> Result<Value> {
        self.request(Method::DELETE, url, None).await
    }
}
