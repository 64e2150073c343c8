//! Authentication capability supplied by the SDK consumer

use gamification_core::Result;
use std::future::Future;

/// Source of access tokens.
///
/// The SDK only ever reads the current token. Acquiring or refreshing it is
/// the implementor's business; `grant_access_token` is part of the contract
/// so consumers can drive a refresh after an `AuthenticationNeeded` error.
pub trait Authenticator: Send + Sync {
    /// Current access token, if one is available
    fn access_token(&self) -> Option<String>;

    /// Obtain a fresh access token
    fn grant_access_token(&self) -> impl Future<Output = Result<String>> + Send;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    pub const MOCK_TOKEN: &str = "AccessToken1234";

    /// Authenticator with a switchable "no token" mode
    #[derive(Debug, Default)]
    pub struct MockAuthenticator {
        without_token: AtomicBool,
    }

    impl MockAuthenticator {
        pub fn set_without_token(&self, without_token: bool) {
            self.without_token.store(without_token, Ordering::SeqCst);
        }
    }

    impl Authenticator for MockAuthenticator {
        fn access_token(&self) -> Option<String> {
            if self.without_token.load(Ordering::SeqCst) {
                None
            } else {
                Some(MOCK_TOKEN.to_string())
            }
        }

        async fn grant_access_token(&self) -> Result<String> {
            Ok(MOCK_TOKEN.to_string())
        }
    }

    #[tokio::test]
    async fn test_mock_authenticator_modes() {
        let auth = MockAuthenticator::default();
        assert_eq!(auth.access_token().as_deref(), Some(MOCK_TOKEN));

        auth.set_without_token(true);
        assert!(auth.access_token().is_none());
        assert_eq!(auth.grant_access_token().await.unwrap(), MOCK_TOKEN);
    }
}
