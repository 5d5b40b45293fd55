use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde_json::Value;
use url::Url;

/// Default per-request timeout against NetBox (30 seconds).
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Failure raised by the NetBox adapter. Never swallowed: a failed call
/// surfaces immediately, with no retry or backoff.
#[derive(Debug, thiserror::Error)]
pub enum NetBoxError {
    #[error("invalid NetBox URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("NetBox request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("NetBox returned HTTP {status} for {path}")]
    Status { status: u16, path: String },
}

/// Async read-only NetBox API client. Wraps one base URL and one bearer
/// token, both fixed at construction; the underlying connection pool is
/// shared across concurrent calls.
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: reqwest::Client,
    base_url: Url,
}

impl NetBoxClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, NetBoxError> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)?;

        let mut headers = HeaderMap::new();
        if !token.is_empty() {
            if let Ok(value) = HeaderValue::from_str(&format!("Token {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// GET an API endpoint with query parameters, returning the parsed JSON
    /// body. `endpoint` is a path like `dcim/devices`; user input never
    /// appears in it beyond identifiers validated by the caller.
    pub async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, NetBoxError> {
        let path = format!("api/{}/", endpoint.trim_matches('/'));
        let url = self.base_url.join(&path)?;

        tracing::debug!(%url, params = ?params, "NetBox GET");
        let response = self.http.get(url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), path, "NetBox error response");
            return Err(NetBoxError::Status {
                status: status.as_u16(),
                path,
            });
        }

        Ok(response.json().await?)
    }

    /// GET a single object by numeric identifier: `endpoint/{id}/`.
    pub async fn get_by_id(&self, endpoint: &str, id: i64) -> Result<Value, NetBoxError> {
        self.get(&format!("{}/{id}", endpoint.trim_matches('/')), &[])
            .await
    }
}
