//! Per-call options for endpoint methods

use crate::http::Fetcher;

/// Options shared by every endpoint call.
///
/// `RequestOptions::default()` is a live call at the configured API version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Overrides the configured API version
    pub version: Option<String>,
    /// Serve the call from a local fixture instead of the network
    pub dev_mode: bool,
    /// Fixture to use in dev mode instead of the endpoint's default
    pub mock_file_name: Option<String>,
}

impl RequestOptions {
    /// Dev-mode call using the endpoint's default fixture
    pub fn dev() -> Self {
        Self {
            dev_mode: true,
            ..Self::default()
        }
    }

    /// Dev-mode call using fixture `name`
    pub fn dev_with_fixture(name: impl Into<String>) -> Self {
        Self {
            dev_mode: true,
            mock_file_name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub(crate) fn fetcher(&self, default_fixture: &str) -> Fetcher {
        if self.dev_mode {
            let name = self.mock_file_name.as_deref().unwrap_or(default_fixture);
            Fetcher::Fixture(name.to_string())
        } else {
            Fetcher::Live
        }
    }
}
