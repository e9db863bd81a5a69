//! reqwest-backed [`HttpTransport`].
//!
//! Thin HTTP wrapper: every request carries `Content-Type: application/json`,
//! non-2xx statuses become [`ApiError::Status`], and the body is handed back
//! as parsed JSON. Pure parsing in `parse_body` for testability.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

use super::{ApiError, HttpTransport, Target};
use crate::config::ApiConfig;

pub struct ReqwestTransport {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Join the target's base URL and `path` with exactly one slash.
    #[must_use]
    pub fn url(&self, target: Target, path: &str) -> String {
        format!("{}/{}", self.config.base_url(target), path.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, target: Target, path: &str) -> Result<Value, ApiError> {
        let url = self.url(target, path);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_response(response).await
    }

    async fn post(&self, target: Target, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(target, path);
        debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_response(response).await
    }
}

async fn read_response(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), body: text });
    }

    parse_body(&text)
}

/// An empty success body (e.g. `204`) decodes to `null`.
fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;
