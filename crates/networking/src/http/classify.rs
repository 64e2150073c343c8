//! Mapping of transport outcomes and HTTP statuses onto SDK errors

use super::transport::{HttpResponse, TransportError};
use gamification_core::{Error, Result};
use tracing::{debug, error};

/// Classify a transport outcome.
///
/// Rules, in order: no response -> `RequestFailed`; 2xx -> body passed
/// through untouched; 401 -> `AuthenticationNeeded`; 403 ->
/// `FunctionalityNotEnabled`; anything else -> `ResponseUnsuccessful` with
/// the status code in the message. Each failure is logged exactly once here.
pub fn classify(outcome: std::result::Result<HttpResponse, TransportError>) -> Result<Vec<u8>> {
    let response = match outcome {
        Ok(response) => response,
        Err(e) => return Err(logged(Error::request_failed(e.0))),
    };

    match response.status {
        200..=299 => Ok(response.body),
        401 => Err(logged(Error::AuthenticationNeeded)),
        403 => Err(logged(Error::FunctionalityNotEnabled)),
        status => {
            let err = logged(Error::unsuccessful_status(status));
            debug!(status, body_len = response.body.len(), "Unsuccessful HTTP response");
            Err(err)
        }
    }
}

fn logged(err: Error) -> Error {
    error!("{}", err);
    err
}
