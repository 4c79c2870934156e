//! HTTP client for upstream JSON documents

use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::error::{FetchError, ResourceKind, Result};
use crate::config::UpstreamConfig;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// `None` waits on the upstream indefinitely.
    pub request_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: String,
    /// Reject non-2xx responses instead of decoding their bodies.
    pub check_status: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            request_timeout: None,
            connect_timeout: None,
            user_agent: "groupie/0.1.0".to_string(),
            check_status: false,
        }
    }
}

impl From<&UpstreamConfig> for FetcherConfig {
    fn from(upstream: &UpstreamConfig) -> Self {
        Self {
            request_timeout: upstream.request_timeout_ms.map(Duration::from_millis),
            connect_timeout: upstream.connect_timeout_ms.map(Duration::from_millis),
            user_agent: upstream.user_agent.clone(),
            check_status: upstream.check_status,
        }
    }
}

/// Issues one GET per call and decodes the body into the requested shape.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    check_status: bool,
}

impl HttpFetcher {
    pub fn new(config: FetcherConfig) -> reqwest::Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            check_status: config.check_status,
        })
    }

    /// GET `url` and decode the whole body as `T`.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        resource: ResourceKind,
        url: &str,
    ) -> Result<T> {
        let body = self.fetch_body(resource, url).await?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            resource,
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    // The response is consumed by `bytes()` or dropped on the early returns,
    // either way the connection goes back to the pool.
    async fn fetch_body(&self, resource: ResourceKind, url: &str) -> Result<Bytes> {
        debug!(%resource, url, "Fetching upstream resource");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                resource,
                url: url.to_string(),
                reason: describe(&e),
            })?;

        let status = response.status();
        if !status.is_success() {
            if self.check_status {
                return Err(FetchError::Status {
                    resource,
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            debug!(%resource, url, status = status.as_u16(), "Non-success status, decoding body anyway");
        }

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Transport {
                    resource,
                    url: url.to_string(),
                    reason: describe(&e),
                }
            } else {
                FetchError::Read {
                    resource,
                    url: url.to_string(),
                    reason: describe(&e),
                }
            }
        })?;

        debug!(%resource, url, size = bytes.len(), "Upstream resource received");

        Ok(bytes)
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "timed out".to_string()
    } else if err.is_builder() {
        format!("invalid request: {}", err)
    } else {
        err.to_string()
    }
}
