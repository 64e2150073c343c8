//! Authenticated resource client with a local-fixture fallback

use super::network::{decode_json, NetworkManager};
use super::request::HttpRequest;
use super::transport::{ReqwestTransport, Transport};
use crate::auth::Authenticator;
use crate::fixtures::FixtureBundle;
use gamification_core::{Error, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// How a call obtains its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetcher {
    /// Authenticated request over the transport
    Live,
    /// Named local fixture; no network, no authentication
    Fixture(String),
}

/// Client for gamification resources.
///
/// Live calls carry `Authorization: Bearer <token>` read from the
/// authenticator at call time. The token is never cached or refreshed here;
/// a missing token fails the call with `AuthenticationNeeded` before anything
/// is sent, and a 401 is returned to the caller as-is.
pub struct ResourceClient<A, T = ReqwestTransport> {
    auth: Arc<A>,
    network: NetworkManager,
    transport: T,
    bundle: FixtureBundle,
}

impl<A: Authenticator> ResourceClient<A, ReqwestTransport> {
    /// Client over a fresh reqwest transport
    pub fn live(auth: Arc<A>) -> Result<Self> {
        Ok(Self::new(auth, ReqwestTransport::new()?))
    }
}

impl<A, T> ResourceClient<A, T>
where
    A: Authenticator,
    T: Transport,
{
    pub fn new(auth: Arc<A>, transport: T) -> Self {
        Self {
            auth,
            network: NetworkManager::new(),
            transport,
            bundle: FixtureBundle::default(),
        }
    }

    /// Use `bundle` when `fetch_local_json` is not given one
    pub fn with_bundle(mut self, bundle: FixtureBundle) -> Self {
        self.bundle = bundle;
        self
    }

    pub fn auth(&self) -> &Arc<A> {
        &self.auth
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn bundle(&self) -> &FixtureBundle {
        &self.bundle
    }

    /// Fetch `request` over the client's own transport
    pub async fn fetch<R: DeserializeOwned>(&self, request: &HttpRequest) -> Result<R> {
        self.fetch_with(request, &self.transport).await
    }

    /// Fetch `request` over a caller-supplied transport
    #[instrument(skip_all, fields(url = request.url()))]
    pub async fn fetch_with<R, U>(&self, request: &HttpRequest, transport: &U) -> Result<R>
    where
        R: DeserializeOwned,
        U: Transport,
    {
        let request = self.authorize(request)?;
        self.network.fetch(&request, transport).await
    }

    /// Decode fixture `name` from `bundle`, or the client's default bundle
    #[instrument(skip(self, bundle))]
    pub async fn fetch_local_json<R: DeserializeOwned>(
        &self,
        name: &str,
        bundle: Option<&FixtureBundle>,
    ) -> Result<R> {
        let bytes = bundle.unwrap_or(&self.bundle).load(name).await?;
        debug!(bytes = bytes.len(), "Fixture loaded");
        decode_json(&bytes)
    }

    /// Resolve a payload through `fetcher`.
    ///
    /// `build` is only invoked for live calls, so fixture calls never depend
    /// on the instance URL being valid.
    pub async fn retrieve<R, F>(&self, fetcher: &Fetcher, build: F) -> Result<R>
    where
        R: DeserializeOwned,
        F: FnOnce() -> Result<HttpRequest>,
    {
        match fetcher {
            Fetcher::Live => {
                let request = build()?;
                self.fetch(&request).await
            }
            Fetcher::Fixture(name) => self.fetch_local_json(name, None).await,
        }
    }

    fn authorize(&self, request: &HttpRequest) -> Result<HttpRequest> {
        let token = self.auth.access_token().ok_or_else(|| {
            let err = Error::AuthenticationNeeded;
            error!("{} (no access token available)", err);
            err
        })?;
        Ok(request.with_header("Authorization", &format!("Bearer {}", token)))
    }
}
