//! HTTP client for the World Cuisine Tour API
//!
//! Provides a reusable client with a fixed base URL and default JSON headers.

#![allow(dead_code)]

use anyhow::{Context, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method,
};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::utils::Timer;

/// Default API base URL for a locally running backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP client errors
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// HTTP client with base URL and default JSON headers
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout_secs: u64,
}

impl ApiClient {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    /// The configured base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build full URL for an API path (path includes the leading slash)
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request with an optional JSON body
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.build_url(path);
        debug!("Sending {} request to {}", method, url);

        let mut req_builder = self.client.request(method, &url);
        if let Some(body) = body {
            req_builder = req_builder.json(&body);
        }

        let timer = Timer::start();

        let response = req_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout(self.timeout_secs)
            } else if e.is_connect() {
                HttpError::ConnectionRefused(url.clone())
            } else {
                HttpError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::RequestFailed(e.to_string()))?;
        let duration_ms = timer.elapsed_ms();

        debug!(
            "Response: {} {} in {}ms",
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            duration_ms
        );

        Ok(HttpResponse {
            status_code: status.as_u16(),
            body,
            duration_ms,
        })
    }

    /// GET an API path
    pub async fn get(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.send(Method::GET, path, None).await
    }

    /// POST a JSON payload to an API path
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<HttpResponse, HttpError> {
        let body = serde_json::to_value(payload)?;
        self.send(Method::POST, path, Some(body)).await
    }

    /// PUT a JSON payload to an API path
    pub async fn put<T: Serialize>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<HttpResponse, HttpError> {
        let body = serde_json::to_value(payload)?;
        self.send(Method::PUT, path, Some(body)).await
    }

    /// DELETE an API path
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.send(Method::DELETE, path, None).await
    }
}

/// HTTP response with raw body and timing
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: String,
    pub duration_ms: u64,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Parse the body as JSON
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Body truncated for failure messages
    pub fn body_excerpt(&self) -> &str {
        let limit = 200;
        match self.body.char_indices().nth(limit) {
            Some((idx, _)) => &self.body[..idx],
            None => &self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.build_url("/"), "http://localhost:3000/api/");
        assert_eq!(
            client.build_url("/country?code=US"),
            "http://localhost:3000/api/country?code=US"
        );
    }

    #[test]
    fn response_json_parse() {
        let resp = HttpResponse {
            status_code: 200,
            body: r#"{"message": "hello"}"#.to_string(),
            duration_ms: 5,
        };

        assert!(resp.is_success());
        let value = resp.json().unwrap();
        assert_eq!(value["message"], "hello");
    }

    #[test]
    fn response_json_parse_failure() {
        let resp = HttpResponse {
            status_code: 200,
            body: "<html>not json</html>".to_string(),
            duration_ms: 5,
        };

        assert!(resp.json().is_err());
    }

    #[test]
    fn body_excerpt_truncates() {
        let resp = HttpResponse {
            status_code: 500,
            body: "x".repeat(500),
            duration_ms: 5,
        };

        assert_eq!(resp.body_excerpt().len(), 200);
    }

    #[test]
    fn body_excerpt_respects_char_boundaries() {
        let resp = HttpResponse {
            status_code: 500,
            body: "é".repeat(300),
            duration_ms: 5,
        };

        assert_eq!(resp.body_excerpt().chars().count(), 200);
    }
}
