//! Failure taxonomy of the collaborator layer.
//!
//! The `Display` text of every variant is the message shown to the user. The
//! technical detail, when there is one, is kept separately for debug output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Please enter a city name")]
    EmptyQuery,

    #[error("City not found. Please check the spelling and try again.")]
    NotFound,

    #[error("Too many requests. Please wait a moment and try again.")]
    RateLimited,

    #[error("Unable to retrieve sky data. Please try again later.")]
    UpstreamUnavailable(String),

    #[error("Invalid response from server. Please try again.")]
    InvalidResponseShape(String),

    #[error("Network error. Please check your connection and try again.")]
    Transport(#[from] reqwest::Error),
}

impl ServiceError {
    /// Technical detail behind the user-facing message, if any.
    pub fn detail(&self) -> Option<String> {
        match self {
            ServiceError::UpstreamUnavailable(detail) | ServiceError::InvalidResponseShape(detail) => {
                Some(detail.clone())
            }
            ServiceError::Transport(e) => Some(e.to_string()),
            ServiceError::EmptyQuery | ServiceError::NotFound | ServiceError::RateLimited => None,
        }
    }
}
