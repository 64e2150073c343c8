//! Transport abstraction for testability

use super::request::HttpRequest;
use gamification_core::Result;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace, warn};

const USER_AGENT_VALUE: &str = "GamificationMobileSDK/1.0 (Rust)";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw outcome of a request that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The request never produced a response (connect, timeout, body read)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Executes requests and hands back status plus body.
///
/// Implementations must not interpret the status code; every response that
/// arrives is returned as `Ok`, whatever its status.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: &HttpRequest,
    ) -> impl Future<Output = std::result::Result<HttpResponse, TransportError>> + Send;
}

/// Transport backed by a pooled `reqwest::Client`
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT_VALUE)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: &HttpRequest,
    ) -> std::result::Result<HttpResponse, TransportError> {
        trace!(method = request.method().as_str(), url = request.url(), "HTTP request starting");

        let mut builder = self.client.request(request.method().into(), request.url());
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| {
            warn!(
                url = request.url(),
                error = %e,
                is_connect = e.is_connect(),
                is_timeout = e.is_timeout(),
                "HTTP request failed"
            );
            TransportError(format!("Request failed: {}", e))
        })?;

        let status = response.status().as_u16();
        debug!(url = request.url(), status, "HTTP response received");

        let body = response.bytes().await.map_err(|e| {
            warn!(url = request.url(), error = %e, "Failed to read response body");
            TransportError(format!("Failed to read response: {}", e))
        })?;

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
