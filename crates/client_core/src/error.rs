use reqwest::StatusCode;
use thiserror::Error;

/// Why a call to the project API did not produce a usable result.
///
/// Frontends collapse every variant into a single failure state; the variants
/// exist for logs and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("project api returned {0}")]
    Status(StatusCode),
    #[error("project api unreachable")]
    Transport(#[source] reqwest::Error),
    #[error("project api returned a malformed body")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::Status(status) => Some(*status),
            _ => None,
        }
    }
}
