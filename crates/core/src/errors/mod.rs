//! Error types and Result alias for the gamification SDK

use thiserror::Error;

/// Every failure the SDK can surface to a caller.
///
/// Callers branch on the variant; nothing is swallowed into a generic
/// catch-all. HTTP statuses without a dedicated variant still land in
/// `ResponseUnsuccessful` with the numeric code in the message.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    #[error("Authentication is needed")]
    AuthenticationNeeded,

    #[error("Functionality is not enabled")]
    FunctionalityNotEnabled,

    #[error("Response unsuccessful: {message}")]
    ResponseUnsuccessful {
        message: String,
        /// Message suitable for end users. Empty when the server gave none.
        display_message: String,
    },

    #[error("Unparsable date: {0}")]
    UnparsableDate(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Structural JSON mismatch, carried as the decoder reported it.
    #[error(transparent)]
    Decoding(#[from] serde_json::Error),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn request_failed(message: impl Into<String>) -> Self {
        Error::RequestFailed {
            message: message.into(),
        }
    }

    /// Error for a non-2xx status that has no dedicated variant.
    pub fn unsuccessful_status(code: u16) -> Self {
        Error::ResponseUnsuccessful {
            message: format!("HTTP response status code {}", code),
            display_message: String::new(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::request_failed(err.to_string())
    }
}
