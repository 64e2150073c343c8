//! The single path every live response goes through

use super::classify::classify;
use super::request::HttpRequest;
use super::transport::Transport;
use gamification_core::Result;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

/// Decode a JSON body into any model.
///
/// Date fields go through `DateCodec` via the models' `dates::wire`
/// adapters, so fixtures and live responses decode identically. A structural
/// mismatch comes back as `Error::Decoding` carrying the decoder's error.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, body_len = body.len(), "Failed to decode response body");
        e.into()
    })
}

/// Dispatches requests, classifies the outcome, and decodes the body.
///
/// Holds no state; a single instance can be shared by any number of clients
/// and used with any transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkManager;

impl NetworkManager {
    pub fn new() -> Self {
        Self
    }

    /// Send `request` on `transport` and decode a successful body as `T`
    #[instrument(skip(self, request, transport), fields(method = request.method().as_str(), url = request.url()))]
    pub async fn fetch<T, C>(&self, request: &HttpRequest, transport: &C) -> Result<T>
    where
        T: DeserializeOwned,
        C: Transport,
    {
        let outcome = transport.send(request).await;
        let body = classify(outcome)?;
        debug!(bytes = body.len(), "Response accepted");
        decode_json(&body)
    }
}
