//! Shared HTTP plumbing for the network collaborators.

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

use super::ServiceError;

/// Upstream endpoints, used to label failures and to interpret a 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Geocode,
    Positions,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Geocode => write!(f, "geocode"),
            Endpoint::Positions => write!(f, "positions"),
        }
    }
}

/// Build a blocking client with the configured timeout.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, ServiceError> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Map an HTTP status to the service taxonomy.
///
/// Only the geocoder's 404 means the city is unknown; a 404 from the
/// positions API is an upstream failure like any other.
pub(crate) fn check_status(status: StatusCode, endpoint: Endpoint) -> Result<(), ServiceError> {
    if status.is_success() {
        return Ok(());
    }

    match (status, endpoint) {
        (StatusCode::NOT_FOUND, Endpoint::Geocode) => Err(ServiceError::NotFound),
        (StatusCode::TOO_MANY_REQUESTS, _) => Err(ServiceError::RateLimited),
        (other, _) => Err(ServiceError::UpstreamUnavailable(format!(
            "{endpoint} answered HTTP {other}"
        ))),
    }
}

/// Check the status and decode a JSON body.
///
/// Bodies that do not match the expected shape are reported as
/// [`ServiceError::InvalidResponseShape`] rather than transport errors.
pub(crate) fn decode_json<T: DeserializeOwned>(response: Response, endpoint: Endpoint) -> Result<T, ServiceError> {
    check_status(response.status(), endpoint)?;
    let body = response.text()?;
    serde_json::from_str(&body)
        .map_err(|e| ServiceError::InvalidResponseShape(format!("{endpoint}: {e}")))
}
