//! Client Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure talking to the todo API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, body or decoding failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("{method} {path} returned status {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },
}

/// Rejection of the draft form before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a task title")]
    EmptyTitle,
}
