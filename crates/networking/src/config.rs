//! SDK configuration

use gamification_core::{Error, Result};
use std::time::Duration;
use tracing::warn;

/// API version used when a call does not name one
pub const DEFAULT_API_VERSION: &str = "v59.0";

/// Delay applied to dev-mode play-game calls to emulate network latency
pub const DEFAULT_DEV_LATENCY: Duration = Duration::from_secs(1);

pub const ENV_INSTANCE_URL: &str = "GAMIFICATION_INSTANCE_URL";
pub const ENV_API_VERSION: &str = "GAMIFICATION_API_VERSION";
pub const ENV_DEV_LATENCY_MS: &str = "GAMIFICATION_DEV_LATENCY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Base URL of the org, e.g. `https://mydomain.my.salesforce.com`
    pub instance_url: String,
    pub api_version: String,
    pub dev_latency: Duration,
}

impl SdkConfig {
    pub fn new(instance_url: impl Into<String>) -> Self {
        Self {
            instance_url: instance_url.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            dev_latency: DEFAULT_DEV_LATENCY,
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Zero disables the simulated latency
    pub fn with_dev_latency(mut self, latency: Duration) -> Self {
        self.dev_latency = latency;
        self
    }

    /// Read configuration from `GAMIFICATION_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let instance_url = lookup(ENV_INSTANCE_URL)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| Error::InvalidUrl(format!("{} is not set", ENV_INSTANCE_URL)))?;

        let mut config = Self::new(instance_url.trim());

        if let Some(version) = lookup(ENV_API_VERSION).filter(|v| !v.trim().is_empty()) {
            config.api_version = version.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_DEV_LATENCY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.dev_latency = Duration::from_millis(ms),
                Err(e) => warn!(
                    "Ignoring {}={:?} ({}), using {:?}",
                    ENV_DEV_LATENCY_MS, raw, e, DEFAULT_DEV_LATENCY
                ),
            }
        }

        Ok(config)
    }
}
